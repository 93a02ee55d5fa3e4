//! Typed context objects for child loggers.
//!
//! Provides the well-known correlation keys (`traceId`, `requestId`,
//! `userId`, `spanId`) plus arbitrary extra fields.

use std::fmt;

use serde_json::Value;
use uuid::Uuid;

use crate::record::{Fields, IntoFields};

/// Context merged into every record a child logger emits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogContext {
    pub trace_id: Option<String>,
    pub request_id: Option<String>,
    pub user_id: Option<String>,
    pub span_id: Option<String>,
    pub extra: Fields,
}

/// `trace-` followed by 8 hex chars of a v4 UUID.
pub fn new_trace_id() -> String {
    format!("trace-{}", &Uuid::new_v4().simple().to_string()[..8])
}

impl LogContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with a freshly generated trace id.
    pub fn generate() -> Self {
        Self {
            trace_id: Some(new_trace_id()),
            ..Self::default()
        }
    }

    pub fn with_trace(mut self, trace_id: &str) -> Self {
        self.trace_id = Some(trace_id.to_string());
        self
    }

    pub fn with_request(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }

    pub fn with_user(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }

    pub fn with_span(mut self, span_id: &str) -> Self {
        self.span_id = Some(span_id.to_string());
        self
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(name.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.trace_id.is_none()
            && self.request_id.is_none()
            && self.user_id.is_none()
            && self.span_id.is_none()
            && self.extra.is_empty()
    }
}

impl IntoFields for LogContext {
    fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        let known = [
            ("traceId", self.trace_id),
            ("requestId", self.request_id),
            ("userId", self.user_id),
            ("spanId", self.span_id),
        ];
        for (name, value) in known {
            if let Some(value) = value {
                fields.insert(name.to_string(), Value::String(value));
            }
        }
        fields.extend(self.extra);
        fields
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(id) = &self.trace_id {
            parts.push(format!("[trace={}]", id));
        }
        if let Some(id) = &self.request_id {
            parts.push(format!("[request={}]", id));
        }
        if let Some(id) = &self.user_id {
            parts.push(format!("[user={}]", id));
        }
        if let Some(id) = &self.span_id {
            parts.push(format!("[span={}]", id));
        }
        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_context_display() {
        let ctx = LogContext::new().with_trace("trace-123");
        assert_eq!(format!("{}", ctx), "[trace=trace-123]");

        let ctx = ctx.with_user("u1");
        assert_eq!(format!("{}", ctx), "[trace=trace-123] [user=u1]");
    }

    #[test]
    fn test_into_fields_uses_wire_names() {
        let fields = LogContext::new()
            .with_trace("t1")
            .with_request("r1")
            .with_span("s1")
            .with_field("tenant", "acme")
            .into_fields();

        assert_eq!(
            fields.keys().collect::<Vec<_>>(),
            vec!["traceId", "requestId", "spanId", "tenant"]
        );
        assert_eq!(fields.get("tenant"), Some(&json!("acme")));
        assert!(fields.get("userId").is_none());
    }

    #[test]
    fn test_generated_trace_id() {
        let ctx = LogContext::generate();
        let id = ctx.trace_id.unwrap();
        assert!(id.starts_with("trace-"));
        assert_eq!(id.len(), "trace-".len() + 8);
        assert_ne!(new_trace_id(), new_trace_id());
    }

    #[test]
    fn test_empty_context() {
        assert!(LogContext::new().is_empty());
        assert!(!LogContext::new().with_field("k", 1).is_empty());
    }
}
