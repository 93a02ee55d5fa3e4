//! The structured log record.

use chrono::{DateTime, SecondsFormat, Utc};
use log::Level;
use serde::Serialize;
use serde_json::Value;

use super::fields::Fields;

pub const FIELD_TIMESTAMP: &str = "timestamp";
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_SERVICE: &str = "service";

/// Fields owned by the facade. Context and metadata cannot overwrite them.
pub const RESERVED_FIELDS: &[&str] = &[FIELD_TIMESTAMP, FIELD_LEVEL, FIELD_MESSAGE];

/// Lowercase level name as written into records.
pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warn",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED_FIELDS.contains(&name)
}

/// One logging event: an ordered map of field name to JSON value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LogRecord {
    fields: Fields,
}

impl LogRecord {
    /// Record stamped with the current time.
    pub fn new(level: Level, message: &str) -> Self {
        Self::at(Utc::now(), level, message)
    }

    pub fn at(timestamp: DateTime<Utc>, level: Level, message: &str) -> Self {
        let mut fields = Fields::new();
        fields.insert(
            FIELD_TIMESTAMP.to_string(),
            Value::String(timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        fields.insert(
            FIELD_LEVEL.to_string(),
            Value::String(level_name(level).to_string()),
        );
        fields.insert(FIELD_MESSAGE.to_string(), Value::String(message.to_string()));
        Self { fields }
    }

    /// Wrap an arbitrary field map, e.g. a record read back from a sink.
    pub fn from_fields(fields: Fields) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn into_fields(self) -> Fields {
        self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn insert(&mut self, name: &str, value: Value) -> Option<Value> {
        self.fields.insert(name.to_string(), value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Merge fields into the record, later values replacing earlier ones.
    ///
    /// Reserved fields are skipped; their names are returned.
    pub fn merge<I>(&mut self, fields: I) -> Vec<String>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut dropped = Vec::new();
        for (name, value) in fields {
            if is_reserved(&name) {
                dropped.push(name);
                continue;
            }
            self.fields.insert(name, value);
        }
        dropped
    }
}
