//! Output sinks.
//!
//! A sink receives one serialized record per `write` call, in the format it
//! asks for. Writes are buffered handoffs; flushing happens separately. Errors it returns are caught by the facade and never reach the
//! caller of `emit`.

pub mod console;
pub mod memory;
pub mod writer;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::SinkError;
use crate::format::Format;

pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use writer::WriterSink;

/// Destination for serialized records.
pub trait Sink: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    fn format(&self) -> Format;

    /// Hand over one record. Must not wait for the record to be flushed.
    fn write(&self, serialized: &str) -> Result<(), SinkError>;

    /// Push buffered records to the destination.
    fn flush(&self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Handle returned by `Logger::add_sink`, used to remove the sink again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SinkId(u64);

impl SinkId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        SinkId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sink-{}", self.0)
    }
}
