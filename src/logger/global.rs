//! Process-wide root logger.
//!
//! Constructed once, either explicitly through [`init`] or from the
//! environment on the first call to [`logger`]. Code that needs a logger can
//! also take a `Logger` (or a child of the root) as an argument instead.

use std::sync::OnceLock;

use crate::config::LoggerConfig;
use crate::error::InitError;
use crate::record::IntoFields;

use super::facade::Logger;

static ROOT: OnceLock<Logger> = OnceLock::new();

/// Install the root logger. Fails if it already exists.
pub fn init(config: LoggerConfig) -> Result<&'static Logger, InitError> {
    let mut installed = false;
    let root = ROOT.get_or_init(|| {
        installed = true;
        build_root(config)
    });

    if installed {
        Ok(root)
    } else {
        log::warn!("LOGGER_INIT_REJECTED reason=already_initialized");
        Err(InitError::AlreadyInitialized)
    }
}

/// The root logger, built from the environment if [`init`] was never called.
pub fn logger() -> &'static Logger {
    ROOT.get_or_init(|| build_root(LoggerConfig::from_env_or_default()))
}

/// Child of the root logger carrying `context`.
pub fn with_context<C: IntoFields>(context: C) -> Logger {
    logger().with_context(context)
}

fn build_root(config: LoggerConfig) -> Logger {
    log::info!(
        "LOGGER_INIT service={} level={} format={} env={}",
        config.service,
        config.min_level,
        config.format,
        config.environment
    );
    Logger::new(config)
}
