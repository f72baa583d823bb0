//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::schema::Config;
use crate::error::{SetupError, SetupResult};

/// Load a configuration file.
///
/// The document is decoded as JSON, or as TOML when the path carries a
/// `.toml` extension; both encode the same schema.
pub fn load_config(path: &Path) -> SetupResult<Config> {
    let content = fs::read_to_string(path).map_err(|e| SetupError::ConfigRead {
        path: path.to_path_buf(),
        source: Arc::new(e),
    })?;

    if path.extension().map_or(false, |ext| ext == "toml") {
        toml::from_str(&content).map_err(|e| SetupError::ConfigDecodeToml {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })
    } else {
        serde_json::from_str(&content).map_err(|e| SetupError::ConfigDecode {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })
    }
}
