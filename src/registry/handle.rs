//! Stable logger handles.
//!
//! # Responsibilities
//! - Provide the indirection cell between a logical name and the logger
//!   instance currently configured for it
//! - Guarantee handle identity survives reconfiguration
//!
//! # Design Decisions
//! - `ArcSwap` for whole-instance swaps: a reader sees the old instance or
//!   the new one, never a mix of fields
//! - The instance owns a per-logger `Dispatch`; formatting, level filtering
//!   and color rendering belong to the fmt subscriber behind it

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::dispatcher::{self, Dispatch};
use tracing::Span;
use tracing_subscriber::filter::LevelFilter;

/// The logger instance currently installed behind a [`Logger`] handle.
///
/// Built by a [`LoggerFactory`](crate::factory::LoggerFactory) and replaced
/// as a unit when configuration is re-applied.
pub struct LoggerCore {
    name: String,
    level: LevelFilter,
    span: Option<Span>,
    dispatch: Dispatch,
}

impl LoggerCore {
    /// Assemble an instance from its parts.
    ///
    /// `span` carries the logical name as a structured field and is entered
    /// around every record emitted through the handle; pass `None` to omit it.
    pub fn new(
        name: impl Into<String>,
        level: LevelFilter,
        span: Option<Span>,
        dispatch: Dispatch,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            span,
            dispatch,
        }
    }

    /// Logical name this instance was built for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum severity this instance emits.
    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

/// A stable, cheaply cloneable handle to a named logger.
///
/// All clones share one cell. Re-applying configuration for the name swaps
/// the cell's contents in place, so a handle obtained before the swap
/// observes the new instance on its next use without being re-fetched.
#[derive(Clone)]
pub struct Logger {
    cell: Arc<ArcSwap<LoggerCore>>,
}

impl Logger {
    pub(crate) fn new(core: LoggerCore) -> Self {
        Self {
            cell: Arc::new(ArcSwap::from_pointee(core)),
        }
    }

    /// Replace the current instance. Handle identity is unchanged.
    pub(crate) fn replace(&self, core: LoggerCore) {
        self.cell.store(Arc::new(core));
    }

    /// Run `f` with this logger receiving the `tracing` events emitted
    /// inside it.
    ///
    /// The current instance's dispatcher becomes the thread default for the
    /// duration of `f`, with the logger-name span entered, so the ordinary
    /// event macros route through this logger:
    ///
    /// ```no_run
    /// let registry = logkeeper::Registry::new();
    /// let logger = registry.get("svc");
    /// logger.in_scope(|| tracing::info!("hello"));
    /// ```
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        let core = self.cell.load();
        dispatcher::with_default(&core.dispatch, || {
            let _guard = core.span.as_ref().map(|s| s.enter());
            f()
        })
    }

    /// Logical name of the current instance.
    pub fn name(&self) -> String {
        self.cell.load().name.clone()
    }

    /// Minimum severity of the current instance.
    pub fn level(&self) -> LevelFilter {
        self.cell.load().level
    }

    /// Whether `self` and `other` share the same registry cell.
    pub fn same_handle(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.cell.load();
        f.debug_struct("Logger")
            .field("name", &core.name)
            .field("level", &core.level)
            .finish_non_exhaustive()
    }
}
