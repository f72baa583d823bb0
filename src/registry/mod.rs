//! Named-logger registry.
//!
//! # Responsibilities
//! - Map logical names to stable logger handles for the process lifetime
//! - Create default handles on first request for an unconfigured name
//! - Install configured instances in place, preserving handle identity
//! - Gate one-shot initialization from a config file
//!
//! # Design Decisions
//! - `DashMap` entry API for miss-then-insert: two concurrent `get`s for the
//!   same name can never create two handles
//! - Entries are never removed; there is no teardown
//! - The run-once gate is an `OnceLock<Result>` rather than a flag check, so
//!   racing first callers block until the winner finishes and every later
//!   caller receives the first result

use std::path::Path;
use std::sync::OnceLock;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing_subscriber::filter::LevelFilter;

use crate::apply;
use crate::config::Config;
use crate::error::SetupResult;
use crate::factory::{DefaultFactory, LogTarget, LoggerFactory};

pub mod handle;

pub use handle::{Logger, LoggerCore};

/// Process-lifetime mapping from logical name to logger handle.
///
/// Explicitly constructed and shared by reference; tests get isolation by
/// building a fresh registry each. The process-wide instance lives behind
/// [`crate::global`].
#[derive(Default)]
pub struct Registry {
    loggers: DashMap<String, Logger>,
    init_result: OnceLock<SetupResult<()>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for `name`.
    ///
    /// A miss creates and inserts a default handle (info severity, standard
    /// output, color on); later calls with the same name return the same
    /// handle instance.
    pub fn get(&self, name: &str) -> Logger {
        self.get_with_level(name, LevelFilter::INFO)
    }

    /// Like [`get`](Self::get), but a miss creates the default at `level`.
    pub fn get_with_level(&self, name: &str, level: LevelFilter) -> Logger {
        self.loggers
            .entry(name.to_string())
            .or_insert_with(|| {
                Logger::new(DefaultFactory.build_core(name, level, LogTarget::Stdout, true))
            })
            .clone()
    }

    /// Install a freshly built instance under `name`.
    ///
    /// An existing handle keeps its identity and receives the new contents;
    /// an absent name gets a new handle wrapping the instance.
    pub(crate) fn install(&self, name: &str, core: LoggerCore) {
        match self.loggers.entry(name.to_string()) {
            Entry::Occupied(entry) => entry.get().replace(core),
            Entry::Vacant(entry) => {
                entry.insert(Logger::new(core));
            }
        }
    }

    /// Apply `config`, building each entry's instance through `factory`.
    ///
    /// See [`apply::apply`] for the per-entry pipeline and the
    /// partial-application semantics on error.
    pub fn apply(&self, config: &Config, factory: &dyn LoggerFactory) -> SetupResult<()> {
        apply::apply(self, config, factory)
    }

    /// Load the config file at `path` and apply it with the default factory.
    pub fn init(&self, path: impl AsRef<Path>) -> SetupResult<()> {
        apply::init(self, path.as_ref())
    }

    /// Run [`init`](Self::init) at most once for this registry.
    ///
    /// The first call executes the load; concurrent first callers block
    /// until it finishes. Every subsequent call is a no-op returning a clone
    /// of the first result, success or error.
    pub fn init_once(&self, path: impl AsRef<Path>) -> SetupResult<()> {
        self.init_result
            .get_or_init(|| self.init(path.as_ref()))
            .clone()
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    /// Whether no logger has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}
