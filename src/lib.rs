//! Named-logger registry with stable, live-updating handles.
//!
//! A configuration document maps logical names to a level, an output
//! destination and a color preference. Applying it creates or updates
//! process-wide logger handles that callers retrieve by name:
//!
//! ```no_run
//! let logger = logkeeper::get("svc");
//!
//! // Later, possibly from another thread:
//! logkeeper::init("loggers.json").unwrap();
//!
//! // The handle obtained above now reflects the applied configuration.
//! logger.in_scope(|| tracing::info!("hello"));
//! ```
//!
//! The handle is an indirection cell: configuration swaps its contents in
//! place, so every holder observes the update without re-fetching. All
//! formatting, filtering and color rendering is delegated to per-logger
//! `tracing-subscriber` fmt subscribers.
//!
//! The free functions below operate on a process-wide [`Registry`]; build
//! your own instance for isolation (tests do).

use std::path::Path;
use std::sync::OnceLock;

pub mod apply;
pub mod config;
pub mod error;
pub mod factory;
pub mod registry;

pub use config::watcher::ConfigWatcher;
pub use config::{Config, LoggerConfig};
pub use error::{SetupError, SetupResult};
pub use factory::{factory_fn, DefaultFactory, FactoryFn, LogTarget, LoggerFactory};
pub use registry::{Logger, LoggerCore, Registry};

// The level grammar and filter type are the subscriber library's; re-exported
// so callers don't need a direct tracing-subscriber dependency.
pub use tracing_subscriber::filter::LevelFilter;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry used by the free functions in this crate.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

/// Load and apply the config file at `path`, at most once per process.
///
/// Subsequent calls are no-ops returning the first call's result; concurrent
/// first callers block until the winning call completes.
pub fn init_once(path: impl AsRef<Path>) -> SetupResult<()> {
    global().init_once(path)
}

/// Load and apply the config file at `path` against the global registry.
pub fn init(path: impl AsRef<Path>) -> SetupResult<()> {
    global().init(path)
}

/// Apply an in-memory configuration to the global registry.
pub fn apply_config(config: &Config, factory: &dyn LoggerFactory) -> SetupResult<()> {
    global().apply(config, factory)
}

/// Handle for `name` in the global registry.
pub fn get(name: &str) -> Logger {
    global().get(name)
}

/// Handle for `name`, created at `level` if the name has not been seen yet.
pub fn get_with_level(name: &str, level: LevelFilter) -> Logger {
    global().get_with_level(name, level)
}
