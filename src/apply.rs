//! Configuration application.
//!
//! Turns a [`Config`] into installed logger instances. Level parsing is
//! delegated to the `tracing-subscriber` level grammar; everything this
//! module adds is destination resolution and the install pipeline.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::filter::LevelFilter;

use crate::config::loader::load_config;
use crate::config::Config;
use crate::error::{SetupError, SetupResult};
use crate::factory::{DefaultFactory, LogTarget, LoggerFactory};
use crate::registry::Registry;

/// Apply `config` to `registry`, building each entry's instance through
/// `factory`.
///
/// Entries are independent and processed in arbitrary map order. Per entry:
/// parse the level, resolve the destination (empty or absent file means
/// standard output; otherwise open for append, creating the file if absent),
/// build the instance, install it.
///
/// The call is not transactional: when an entry fails, entries already
/// processed stay installed and the remainder are skipped.
pub fn apply(
    registry: &Registry,
    config: &Config,
    factory: &dyn LoggerFactory,
) -> SetupResult<()> {
    for (name, logger_cfg) in &config.loggers {
        let level: LevelFilter =
            logger_cfg
                .level
                .parse()
                .map_err(|_| SetupError::InvalidLevel {
                    logger: name.clone(),
                    value: logger_cfg.level.clone(),
                })?;

        let target = match &logger_cfg.file {
            Some(path) if !path.as_os_str().is_empty() => {
                let file = OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(path)
                    .map_err(|e| SetupError::OpenLogFile {
                        logger: name.clone(),
                        path: path.clone(),
                        source: Arc::new(e),
                    })?;
                LogTarget::File(Arc::new(file))
            }
            _ => LogTarget::Stdout,
        };

        let core = factory
            .build(name, level, target, logger_cfg.color)
            .ok_or_else(|| SetupError::NilLogger {
                logger: name.clone(),
            })?;

        registry.install(name, core);
    }

    Ok(())
}

/// Load the config file at `path` and apply it with [`DefaultFactory`].
pub fn init(registry: &Registry, path: &Path) -> SetupResult<()> {
    let config = load_config(path)?;
    apply(registry, &config, &DefaultFactory)
}
