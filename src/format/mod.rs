//! Record serialization.
//!
//! Two formats: single-line JSON for machine consumption, and a colorized
//! human-readable line for interactive use. Neither fails; a record that
//! cannot be rendered normally is rendered best-effort instead of dropped.

pub mod json;
pub mod pretty;

use std::fmt;
use std::str::FromStr;

use crate::config::Environment;
use crate::error::ConfigError;
use crate::record::LogRecord;

pub use json::to_json_line;
pub use pretty::to_pretty_line;

/// Serialization used by a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Pretty,
}

impl Format {
    /// JSON in production, pretty everywhere else.
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Production => Format::Json,
            Environment::Development | Environment::Test => Format::Pretty,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Pretty => "pretty",
        }
    }

    /// Serialize a record in this format.
    pub fn render(&self, record: &LogRecord) -> String {
        match self {
            Format::Json => to_json_line(record),
            Format::Pretty => to_pretty_line(record),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "pretty" | "text" => Ok(Format::Pretty),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for_environment() {
        assert_eq!(Format::for_environment(Environment::Production), Format::Json);
        assert_eq!(Format::for_environment(Environment::Development), Format::Pretty);
        assert_eq!(Format::for_environment(Environment::Test), Format::Pretty);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<Format>(), Ok(Format::Json));
        assert_eq!("text".parse::<Format>(), Ok(Format::Pretty));
        assert!("yaml".parse::<Format>().is_err());
    }
}
