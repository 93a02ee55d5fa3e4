//! Error types.
//!
//! None of these ever escape `Logger::emit`; they surface from configuration,
//! initialization and from sinks (where the facade catches them).

use thiserror::Error;

/// Invalid logger configuration value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level {0:?} (expected off, error, warn, info, debug or trace)")]
    InvalidLevel(String),

    #[error("invalid log format {0:?} (expected json or pretty)")]
    InvalidFormat(String),

    #[error("invalid environment {0:?} (expected production, development or test)")]
    InvalidEnvironment(String),
}

/// Failure reported by a sink while writing a serialized record.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sink {0} is closed")]
    Closed(String),
}

/// Failure to install the process-wide root logger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("root logger already initialized")]
    AlreadyInitialized,
}
