//! Logger construction.
//!
//! # Responsibilities
//! - Define the capability through which the configurator obtains instances
//! - Provide the standard console-style factory
//!
//! # Design Decisions
//! - The factory is a trait with one method; the [`factory_fn`] adapter
//!   lifts plain closures into it, which keeps test doubles trivial
//! - Each instance carries its own `tracing` dispatcher; the crate never
//!   touches the global default subscriber

use std::fs::File;
use std::io;
use std::sync::Arc;

use tracing::dispatcher::{self, Dispatch};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::registry::handle::LoggerCore;

/// A resolved output destination, handed to factories by the configurator.
pub enum LogTarget {
    /// Standard output.
    Stdout,
    /// A file opened for append.
    File(Arc<File>),
    /// Any other writer source (buffers in tests, multi-writers).
    Custom(BoxMakeWriter),
}

impl LogTarget {
    /// Convert into the writer type the fmt subscriber consumes.
    pub fn into_make_writer(self) -> BoxMakeWriter {
        match self {
            LogTarget::Stdout => BoxMakeWriter::new(io::stdout),
            LogTarget::File(file) => BoxMakeWriter::new(file),
            LogTarget::Custom(writer) => writer,
        }
    }
}

/// Capability for turning a config entry into a logger instance.
pub trait LoggerFactory {
    /// Build an instance for `name` emitting records of severity `level` and
    /// above to `target`.
    ///
    /// Returning `None` makes the configurator fail with
    /// [`SetupError::NilLogger`](crate::error::SetupError::NilLogger).
    fn build(
        &self,
        name: &str,
        level: LevelFilter,
        target: LogTarget,
        color: bool,
    ) -> Option<LoggerCore>;
}

/// Adapter turning a plain closure into a [`LoggerFactory`].
///
/// Built with [`factory_fn`].
pub struct FactoryFn<F>(F);

/// Wrap a closure as a [`LoggerFactory`].
pub fn factory_fn<F>(f: F) -> FactoryFn<F>
where
    F: Fn(&str, LevelFilter, LogTarget, bool) -> Option<LoggerCore>,
{
    FactoryFn(f)
}

impl<F> LoggerFactory for FactoryFn<F>
where
    F: Fn(&str, LevelFilter, LogTarget, bool) -> Option<LoggerCore>,
{
    fn build(
        &self,
        name: &str,
        level: LevelFilter,
        target: LogTarget,
        color: bool,
    ) -> Option<LoggerCore> {
        (self.0)(name, level, target, color)
    }
}

/// The standard factory: a console-style fmt subscriber per logger.
///
/// The subscriber wraps the destination writer, colorized unless `color` is
/// false, records file/line call-site information, and filters below `level`.
/// The logical name rides along as a structured span field and is omitted
/// when the name is empty. One debug-level "logger created" record is emitted
/// through the new instance; it is subject to the instance's own filter and
/// never fails construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl DefaultFactory {
    /// Infallible construction path, shared with default-handle creation.
    pub(crate) fn build_core(
        &self,
        name: &str,
        level: LevelFilter,
        target: LogTarget,
        color: bool,
    ) -> LoggerCore {
        let subscriber = fmt::Subscriber::builder()
            .with_max_level(level)
            .with_ansi(color)
            .with_file(true)
            .with_line_number(true)
            .with_writer(target.into_make_writer())
            .finish();
        let dispatch = Dispatch::new(subscriber);

        // The span and the birth record must be created under the new
        // dispatcher so they belong to this logger, not the global default.
        // ERROR-level span: stays enabled under any filter except `off`.
        let span = dispatcher::with_default(&dispatch, || {
            let span = if name.is_empty() {
                None
            } else {
                Some(tracing::span!(
                    tracing::Level::ERROR,
                    "logger",
                    logger = %name
                ))
            };
            {
                let _guard = span.as_ref().map(|s| s.enter());
                tracing::debug!("logger created");
            }
            span
        });

        LoggerCore::new(name, level, span, dispatch)
    }
}

impl LoggerFactory for DefaultFactory {
    fn build(
        &self,
        name: &str,
        level: LevelFilter,
        target: LogTarget,
        color: bool,
    ) -> Option<LoggerCore> {
        Some(self.build_core(name, level, target, color))
    }
}
