//! The logger facade.
//!
//! Every emit runs the same pipeline over an immutable configuration
//! snapshot:
//! 1. Level gate
//! 2. Build record (timestamp, level, message, service)
//! 3. Merge context, then metadata (metadata wins)
//! 4. Redact
//! 5. Serialize once per sink format and hand the line to every sink
//!
//! Sinks buffer; `emit` never waits for a flush. Call [`Logger::flush`] to
//! push buffered records out.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::Level;
use parking_lot::RwLock;
use serde_json::Value;

use crate::config::LoggerConfig;
use crate::format::Format;
use crate::record::{Fields, IntoFields, LogRecord, FIELD_SERVICE};
use crate::redaction::Redactor;
use crate::sink::{ConsoleSink, Sink, SinkId};

/// State shared by a logger and every child derived from it.
struct Shared {
    config: LoggerConfig,
    redactor: Redactor,
    sinks: RwLock<Vec<(SinkId, Arc<dyn Sink>)>>,
}

/// Structured logger. Cloning is cheap; children share sinks but carry
/// their own context.
#[derive(Clone)]
pub struct Logger {
    shared: Arc<Shared>,
    context: Arc<Fields>,
}

impl Logger {
    /// Logger writing to the console in the configured format. In test mode
    /// the console is silent.
    pub fn new(config: LoggerConfig) -> Self {
        let console = if config.is_test_mode() {
            ConsoleSink::silent(config.format)
        } else {
            ConsoleSink::new(config.format)
        };
        let console: Arc<dyn Sink> = Arc::new(console);
        Self::from_parts(config, Redactor::default(), vec![console])
    }

    /// Logger with no sinks attached.
    pub fn without_sinks(config: LoggerConfig) -> Self {
        Self::from_parts(config, Redactor::default(), Vec::new())
    }

    pub fn from_parts(
        config: LoggerConfig,
        redactor: Redactor,
        sinks: Vec<Arc<dyn Sink>>,
    ) -> Self {
        let sinks: Vec<(SinkId, Arc<dyn Sink>)> =
            sinks.into_iter().map(|s| (SinkId::next(), s)).collect();
        Self {
            shared: Arc::new(Shared {
                config,
                redactor,
                sinks: RwLock::new(sinks),
            }),
            context: Arc::new(Fields::new()),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.shared.config
    }

    /// Context fields attached to this logger.
    pub fn context(&self) -> &Fields {
        &self.context
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level <= self.shared.config.min_level
    }

    pub fn add_sink(&self, sink: Arc<dyn Sink>) -> SinkId {
        let id = SinkId::next();
        log::debug!(
            "SINK_ADDED id={} name={} format={}",
            id,
            sink.name(),
            sink.format()
        );
        self.shared.sinks.write().push((id, sink));
        id
    }

    pub fn remove_sink(&self, id: SinkId) -> bool {
        let mut sinks = self.shared.sinks.write();
        let before = sinks.len();
        sinks.retain(|(sink_id, _)| *sink_id != id);
        let removed = sinks.len() != before;
        log::debug!("SINK_REMOVED id={} found={}", id, removed);
        removed
    }

    pub fn sink_count(&self) -> usize {
        self.shared.sinks.read().len()
    }

    /// Flush every sink. Failures are reported like write failures.
    pub fn flush(&self) {
        for sink in self.snapshot_sinks() {
            if let Err(e) = sink.flush() {
                log::warn!("SINK_FLUSH_FAILED sink={} error={}", sink.name(), e);
            }
        }
    }

    /// Derive a child whose records always include `context`.
    ///
    /// The child's context is this logger's context with `context` merged on
    /// top. The receiver is not modified.
    pub fn with_context<C: IntoFields>(&self, context: C) -> Logger {
        let mut merged = (*self.context).clone();
        merged.extend(context.into_fields());
        Logger {
            shared: Arc::clone(&self.shared),
            context: Arc::new(merged),
        }
    }

    /// Emit a record. Does nothing below the minimum level; never fails.
    pub fn emit<M: IntoFields>(&self, level: Level, message: &str, metadata: M) {
        if !self.is_enabled(level) {
            return;
        }

        let record = self.build_record(level, message, metadata.into_fields());
        let (record, report) = self.shared.redactor.redact_with_report(record);
        if report.has_redactions() {
            log::debug!(
                "RECORD_REDACTED count={} fields={:?}",
                report.count(),
                report.redacted_fields
            );
        }

        self.dispatch(&record);
    }

    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message, ());
    }

    pub fn warn(&self, message: &str) {
        self.emit(Level::Warn, message, ());
    }

    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message, ());
    }

    pub fn debug(&self, message: &str) {
        self.emit(Level::Debug, message, ());
    }

    pub fn trace(&self, message: &str) {
        self.emit(Level::Trace, message, ());
    }

    pub fn error_with<M: IntoFields>(&self, message: &str, metadata: M) {
        self.emit(Level::Error, message, metadata);
    }

    pub fn warn_with<M: IntoFields>(&self, message: &str, metadata: M) {
        self.emit(Level::Warn, message, metadata);
    }

    pub fn info_with<M: IntoFields>(&self, message: &str, metadata: M) {
        self.emit(Level::Info, message, metadata);
    }

    pub fn debug_with<M: IntoFields>(&self, message: &str, metadata: M) {
        self.emit(Level::Debug, message, metadata);
    }

    pub fn trace_with<M: IntoFields>(&self, message: &str, metadata: M) {
        self.emit(Level::Trace, message, metadata);
    }

    /// Unredacted record as it would be built for this logger.
    pub(crate) fn build_record(&self, level: Level, message: &str, metadata: Fields) -> LogRecord {
        let mut record = LogRecord::new(level, message);

        let service = &self.shared.config.service;
        if !service.is_empty() {
            record.insert(FIELD_SERVICE, Value::String(service.clone()));
        }

        let context = self.context.iter().map(|(k, v)| (k.clone(), v.clone()));
        let mut dropped = record.merge(context);
        dropped.extend(record.merge(metadata));
        if !dropped.is_empty() {
            log::debug!("RESERVED_FIELDS_DROPPED fields={:?}", dropped);
        }

        record
    }

    /// Snapshot so sinks can be added or removed while we write.
    fn snapshot_sinks(&self) -> Vec<Arc<dyn Sink>> {
        self.shared
            .sinks
            .read()
            .iter()
            .map(|(_, sink)| Arc::clone(sink))
            .collect()
    }

    fn dispatch(&self, record: &LogRecord) {
        let mut json: Option<String> = None;
        let mut pretty: Option<String> = None;

        for sink in self.snapshot_sinks() {
            let format = sink.format();
            let rendered = match format {
                Format::Json => &mut json,
                Format::Pretty => &mut pretty,
            };
            let line = rendered.get_or_insert_with(|| format.render(record));
            write_to_sink(sink.as_ref(), line);
        }
    }
}

/// Write to one sink. Failures go to the `log` facade, never back to the
/// sink and never to the caller.
fn write_to_sink(sink: &dyn Sink, line: &str) {
    match panic::catch_unwind(AssertUnwindSafe(|| sink.write(line))) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log::warn!("SINK_WRITE_FAILED sink={} error={}", sink.name(), e),
        Err(_) => log::error!("SINK_WRITE_PANICKED sink={}", sink.name()),
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("service", &self.shared.config.service)
            .field("min_level", &self.shared.config.min_level)
            .field("format", &self.shared.config.format)
            .field("context", &self.context)
            .field("sinks", &self.sink_count())
            .finish()
    }
}
