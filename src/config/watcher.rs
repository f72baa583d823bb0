//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config as NotifyConfig, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::registry::Registry;

/// A watcher that re-applies a config file to a registry whenever the file
/// changes.
///
/// Existing handles observe the new instances on their next use. A reload
/// that fails partway leaves the entries applied before the failure in
/// place, like any other [`apply`](crate::apply::apply) call.
pub struct ConfigWatcher {
    path: PathBuf,
    registry: Arc<Registry>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher over `path` feeding `registry`.
    pub fn new(path: &Path, registry: Arc<Registry>) -> Self {
        Self {
            path: path.to_path_buf(),
            registry,
        }
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();
        let registry = self.registry.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = ?path, "config file change detected, reloading");
                        if let Err(e) = registry.init(&path) {
                            tracing::error!(
                                "failed to reload config: {}; loggers applied before the failure remain in effect",
                                e
                            );
                        }
                    }
                }
                Err(e) => tracing::error!("watch error: {:?}", e),
            },
            NotifyConfig::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "config watcher started");
        Ok(watcher)
    }
}
