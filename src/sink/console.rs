//! Standard output sink.

use std::io::{self, Write};

use crate::error::SinkError;
use crate::format::Format;

use super::Sink;

/// Writes each record as a line on stdout. A silent console accepts
/// records and discards them (test mode).
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    format: Format,
    silent: bool,
}

impl ConsoleSink {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            silent: false,
        }
    }

    pub fn silent(format: Format) -> Self {
        Self {
            format,
            silent: true,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

impl Sink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn format(&self) -> Format {
        self.format
    }

    fn write(&self, serialized: &str) -> Result<(), SinkError> {
        if self.silent {
            return Ok(());
        }
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", serialized)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), SinkError> {
        if !self.silent {
            io::stdout().lock().flush()?;
        }
        Ok(())
    }
}
