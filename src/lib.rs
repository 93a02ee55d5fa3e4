//! ctxlog core - context-aware structured logging
//!
//! Emits structured log records to one or more sinks, with:
//!
//! 1. **Redaction** - sensitive top-level fields (`password`, `token`,
//!    `secret`, `creditCard`) are replaced with `[REDACTED]` before any sink
//!    sees the record
//! 2. **Context** - child loggers merge a fixed context (trace id, user id,
//!    ...) into every record without touching their parent
//! 3. **Safety** - a failing sink never fails or panics the caller
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `logger` - Logger facade, child loggers, process-wide root
//! - `redaction` - Sensitive-field redaction
//! - `record` - Log record and field maps
//! - `format` - JSON and colorized human-readable serialization
//! - `sink` - Console, writer and in-memory sinks
//! - `config` - Environment-driven configuration
//! - `hello` - Greeting utility logging through the root logger
//!
//! ## Example
//!
//! ```no_run
//! use ctxlog_core::{with_context, LogContext};
//!
//! let request = with_context(LogContext::new().with_trace("t1").with_user("u1"));
//! request.info_with("charge accepted", serde_json::json!({"token": "tok_123"}));
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod hello;
pub mod logger;
pub mod record;
pub mod redaction;
pub mod sink;

pub use log::{Level, LevelFilter};

pub use config::{Environment, LoggerConfig};
pub use error::{ConfigError, InitError, SinkError};
pub use format::Format;
pub use hello::Hello;
pub use logger::{init, logger, new_trace_id, with_context, LogContext, Logger};
pub use record::{Fields, IntoFields, LogRecord};
pub use redaction::{redact, Redactor, REDACTED, SENSITIVE_FIELDS};
pub use sink::{ConsoleSink, MemorySink, Sink, SinkId, WriterSink};

/// Environment variable holding the filter for the crate's own diagnostics.
pub const DIAGNOSTICS_ENV: &str = "CTXLOG_DIAGNOSTICS";

/// Install `env_logger` for the crate's internal diagnostics (sink failures,
/// configuration fallbacks) on stderr.
///
/// Safe to call more than once; only the first call installs a logger.
/// Defaults to `warn` unless `CTXLOG_DIAGNOSTICS` says otherwise.
pub fn init_diagnostics() {
    let env = env_logger::Env::new().filter_or(DIAGNOSTICS_ENV, "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
