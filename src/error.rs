//! Error definitions for configuration loading and application.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while loading or applying a logger configuration.
///
/// The run-once gate hands the first call's result to every later caller, so
/// this type is `Clone`; non-cloneable sources are shared behind `Arc`.
#[derive(Debug, Clone, Error)]
pub enum SetupError {
    /// The config file could not be opened or read.
    #[error("could not open config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    /// The config file was read but is not valid JSON for the schema.
    #[error("could not decode config file {}: {source}", path.display())]
    ConfigDecode {
        path: PathBuf,
        #[source]
        source: Arc<serde_json::Error>,
    },

    /// The config file was read but is not valid TOML for the schema.
    #[error("could not decode config file {}: {source}", path.display())]
    ConfigDecodeToml {
        path: PathBuf,
        #[source]
        source: Arc<toml::de::Error>,
    },

    /// A logger entry names a severity the level grammar does not recognize.
    #[error("invalid level {value:?} for logger {logger:?}")]
    InvalidLevel { logger: String, value: String },

    /// A logger entry's output file could not be opened for append.
    #[error("failed to open log file {} for logger {logger:?}: {source}", path.display())]
    OpenLogFile {
        logger: String,
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    /// The factory produced no instance for a logger entry.
    #[error("factory returned no logger for {logger:?}")]
    NilLogger { logger: String },
}

/// Result type for setup operations.
pub type SetupResult<T> = Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SetupError::InvalidLevel {
            logger: "svc".to_string(),
            value: "verbose".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid level \"verbose\" for logger \"svc\""
        );

        let err = SetupError::NilLogger {
            logger: "svc".to_string(),
        };
        assert!(err.to_string().contains("svc"));
    }

    #[test]
    fn test_error_is_cloneable() {
        let err = SetupError::ConfigRead {
            path: PathBuf::from("/tmp/missing.json"),
            source: Arc::new(io::Error::new(io::ErrorKind::NotFound, "not found")),
        };
        let replayed = err.clone();
        assert_eq!(err.to_string(), replayed.to_string());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let err = SetupError::OpenLogFile {
            logger: "svc".to_string(),
            path: PathBuf::from("/var/log/svc.log"),
            source: Arc::new(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        };
        let source = err.source().expect("io source is chained");
        assert!(source.to_string().contains("denied"));
    }
}
