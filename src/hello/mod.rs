//! Greeting utility.

use crate::logger::{logger, Logger};

pub const GREETING: &str = "hello, world!";

/// Says hello, logging each call.
#[derive(Debug, Clone)]
pub struct Hello {
    logger: Logger,
}

impl Default for Hello {
    fn default() -> Self {
        Self::with_logger(logger().clone())
    }
}

impl Hello {
    /// Greeter logging through the process-wide logger.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn say_hello(&self) -> String {
        self.logger.info("sayHello called");
        GREETING.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;

    use crate::config::{Environment, LoggerConfig};
    use crate::format::Format;
    use crate::sink::MemorySink;

    #[test]
    fn test_say_hello() {
        let logger = Logger::without_sinks(LoggerConfig::new());
        let sink = MemorySink::new(Format::Json);
        logger.add_sink(Arc::new(sink.clone()));

        let greeting = Hello::with_logger(logger).say_hello();

        assert_eq!(greeting, "hello, world!");
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["message"], json!("sayHello called"));
        assert_eq!(records[0]["level"], json!("info"));
    }

    #[test]
    fn test_quiet_in_test_mode() {
        let logger = Logger::new(LoggerConfig::new().with_environment(Environment::Test));
        let sink = MemorySink::new(Format::Json);
        logger.add_sink(Arc::new(sink.clone()));

        assert_eq!(Hello::with_logger(logger).say_hello(), GREETING);
        assert_eq!(sink.len(), 1);
    }
}
