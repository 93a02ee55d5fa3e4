//! Environment-driven logger settings.

use std::fmt;
use std::str::FromStr;

use log::LevelFilter;

use crate::error::ConfigError;
use crate::format::Format;

/// Minimum level variable.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Deployment environment variable (`production`, `development`, `test`).
pub const ENV_APP_ENV: &str = "APP_ENV";
/// Explicit output format override (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
/// Process-wide service identity.
pub const ENV_SERVICE_NAME: &str = "SERVICE_NAME";

/// Service identity used when `SERVICE_NAME` is unset.
pub const DEFAULT_SERVICE: &str = env!("CARGO_PKG_NAME");

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Development,
    Test,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
            Environment::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

/// Immutable configuration snapshot for a [`Logger`](crate::Logger).
#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    pub min_level: LevelFilter,
    pub environment: Environment,
    pub format: Format,
    pub service: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LevelFilter::Info,
            environment: Environment::Development,
            format: Format::for_environment(Environment::Development),
            service: DEFAULT_SERVICE.to_string(),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), but an invalid value is reported
    /// through the `log` facade and the defaults are used instead.
    pub fn from_env_or_default() -> Self {
        match Self::from_env() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("CONFIG_INVALID error={} fallback=defaults", e);
                Self::default()
            }
        }
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Unset or blank variables fall back to their defaults. `LOG_FORMAT`
    /// takes precedence over the format implied by `APP_ENV`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let min_level = match read(ENV_LOG_LEVEL) {
            Some(raw) => {
                LevelFilter::from_str(&raw).map_err(|_| ConfigError::InvalidLevel(raw))?
            }
            None => LevelFilter::Info,
        };

        let environment = match read(ENV_APP_ENV) {
            Some(raw) => raw.parse()?,
            None => Environment::default(),
        };

        let format = match read(ENV_LOG_FORMAT) {
            Some(raw) => raw.parse()?,
            None => Format::for_environment(environment),
        };

        let service = read(ENV_SERVICE_NAME).unwrap_or_else(|| DEFAULT_SERVICE.to_string());

        Ok(Self {
            min_level,
            environment,
            format,
            service,
        })
    }

    pub fn with_level(mut self, min_level: LevelFilter) -> Self {
        self.min_level = min_level;
        self
    }

    /// Set the environment and the format it implies.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self.format = Format::for_environment(environment);
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_service(mut self, service: &str) -> Self {
        self.service = service.to_string();
        self
    }

    /// Console output is suppressed in test mode.
    pub fn is_test_mode(&self) -> bool {
        self.environment == Environment::Test
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LoggerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.min_level, LevelFilter::Info);
        assert_eq!(config.format, Format::Pretty);
        assert_eq!(config.service, DEFAULT_SERVICE);
        assert!(!config.is_test_mode());
    }

    #[test]
    fn test_production_selects_json() {
        let config = LoggerConfig::from_lookup(lookup_from(&[
            ("APP_ENV", "production"),
            ("LOG_LEVEL", "warn"),
            ("SERVICE_NAME", "billing"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.min_level, LevelFilter::Warn);
        assert_eq!(config.service, "billing");
    }

    #[test]
    fn test_explicit_format_overrides_environment() {
        let config = LoggerConfig::from_lookup(lookup_from(&[
            ("APP_ENV", "production"),
            ("LOG_FORMAT", "pretty"),
        ]))
        .unwrap();
        assert_eq!(config.format, Format::Pretty);
    }

    #[test]
    fn test_test_mode() {
        let config = LoggerConfig::from_lookup(lookup_from(&[("APP_ENV", "test")])).unwrap();
        assert!(config.is_test_mode());
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config =
            LoggerConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "  "), ("SERVICE_NAME", "")]))
                .unwrap();
        assert_eq!(config.min_level, LevelFilter::Info);
        assert_eq!(config.service, DEFAULT_SERVICE);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            LoggerConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "loud")])),
            Err(ConfigError::InvalidLevel("loud".to_string()))
        );
        assert_eq!(
            LoggerConfig::from_lookup(lookup_from(&[("APP_ENV", "staging")])),
            Err(ConfigError::InvalidEnvironment("staging".to_string()))
        );
        assert_eq!(
            LoggerConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")])),
            Err(ConfigError::InvalidFormat("xml".to_string()))
        );
    }

    #[test]
    fn test_builder_setters() {
        let config = LoggerConfig::new()
            .with_environment(Environment::Production)
            .with_level(LevelFilter::Debug)
            .with_service("api");

        assert_eq!(config.format, Format::Json);
        assert_eq!(config.min_level, LevelFilter::Debug);
        assert_eq!(config.service, "api");
    }
}
