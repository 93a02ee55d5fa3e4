//! Redacting formatter.
//!
//! Only top-level fields are inspected. A sensitive field is replaced when its
//! value is truthy:
//! - `null`, `false`, `0` and `""` are left as-is
//! - any other string, number, `true`, array or object is replaced

use lazy_static::lazy_static;
use serde_json::Value;

use crate::record::LogRecord;

/// Marker written in place of a sensitive value.
pub const REDACTED: &str = "[REDACTED]";

/// Field names redacted by default.
pub const SENSITIVE_FIELDS: &[&str] = &["password", "token", "secret", "creditCard"];

lazy_static! {
    static ref DEFAULT_REDACTOR: Redactor = Redactor::default();
}

/// Truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Fields replaced by a redaction pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RedactionReport {
    pub redacted_fields: Vec<String>,
}

impl RedactionReport {
    pub fn count(&self) -> usize {
        self.redacted_fields.len()
    }

    pub fn has_redactions(&self) -> bool {
        !self.redacted_fields.is_empty()
    }
}

/// Redacts a fixed set of field names. The set cannot change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redactor {
    fields: Vec<String>,
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new(SENSITIVE_FIELDS.iter().copied())
    }
}

impl Redactor {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for field in fields.into_iter().map(Into::into) {
            if !unique.contains(&field) {
                unique.push(field);
            }
        }
        Self { fields: unique }
    }

    pub fn is_sensitive(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }

    pub fn redact(&self, record: LogRecord) -> LogRecord {
        self.redact_with_report(record).0
    }

    pub fn redact_with_report(&self, mut record: LogRecord) -> (LogRecord, RedactionReport) {
        let mut report = RedactionReport::default();

        for name in &self.fields {
            if let Some(value) = record.get_mut(name) {
                if is_truthy(value) {
                    *value = Value::String(REDACTED.to_string());
                    report.redacted_fields.push(name.clone());
                }
            }
        }

        (record, report)
    }
}

/// Redact with the default sensitive field set.
pub fn redact(record: LogRecord) -> LogRecord {
    DEFAULT_REDACTOR.redact(record)
}
