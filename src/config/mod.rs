//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON/TOML)
//!     → loader.rs (parse & deserialize)
//!     → Config (typed, per-logger entries)
//!     → applied through the configurator into the registry
//!
//! On reload (optional):
//!     watcher.rs detects file change
//!     → loader.rs loads new config
//!     → re-applied to the shared registry
//!     → existing handles observe the new instances
//! ```
//!
//! # Design Decisions
//! - Entries are independent; the configurator visits them in any order
//! - Serde handles syntactic validation; level strings are validated when
//!   applied, not when decoded
//! - Absent fields default to the document's zero values (no file, no color)

pub mod loader;
pub mod schema;
pub mod watcher;

pub use schema::Config;
pub use schema::LoggerConfig;
