//! In-memory capture sink.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::error::SinkError;
use crate::format::Format;

use super::Sink;

/// Captures serialized records. Clones share the same buffer, so a handle
/// can be kept after the sink is handed to a logger.
#[derive(Debug, Clone)]
pub struct MemorySink {
    format: Format,
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All captured output, one record per line.
    pub fn contents(&self) -> String {
        self.lines.lock().join("\n")
    }

    /// Captured lines parsed as JSON; lines that do not parse are skipped.
    pub fn records(&self) -> Vec<Value> {
        self.lines
            .lock()
            .iter()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn format(&self) -> Format {
        self.format
    }

    fn write(&self, serialized: &str) -> Result<(), SinkError> {
        self.lines.lock().push(serialized.to_string());
        Ok(())
    }
}
