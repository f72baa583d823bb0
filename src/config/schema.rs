//! Configuration schema definitions.
//!
//! This module defines the logger configuration document. All types derive
//! Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration: logger definitions keyed by logical name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Per-logger settings. Insertion order is irrelevant; entries are
    /// independent of one another.
    pub loggers: HashMap<String, LoggerConfig>,
}

/// Settings for a single named logger.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggerConfig {
    /// Minimum severity as understood by the level grammar
    /// (e.g. "trace", "debug", "info", "warn", "error", "off").
    pub level: String,

    /// Output file path. Absent or empty means standard output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Colorize output (ANSI escapes).
    #[serde(default)]
    pub color: bool,
}
