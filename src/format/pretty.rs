//! Colorized human-readable output.
//!
//! `<timestamp> <LEVEL> [service] message {extra fields as JSON}`
//!
//! One record per line: control characters in the message are escaped.

use colored::{ColoredString, Colorize};

use crate::record::{
    Fields, LogRecord, FIELD_LEVEL, FIELD_MESSAGE, FIELD_SERVICE, FIELD_TIMESTAMP,
};

const HEADER_FIELDS: &[&str] = &[FIELD_TIMESTAMP, FIELD_LEVEL, FIELD_MESSAGE, FIELD_SERVICE];

pub fn to_pretty_line(record: &LogRecord) -> String {
    let timestamp = record.get_str(FIELD_TIMESTAMP).unwrap_or("-");
    let level = record.get_str(FIELD_LEVEL).unwrap_or("info");
    let message = match record.get(FIELD_MESSAGE) {
        Some(serde_json::Value::String(s)) => escape_control(s),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    let mut line = format!("{} {} ", timestamp.dimmed(), paint_level(level));
    if let Some(service) = record.get_str(FIELD_SERVICE) {
        line.push_str(&format!("[{}] ", service.cyan()));
    }
    line.push_str(&message);

    let extra: Fields = record
        .fields()
        .iter()
        .filter(|(name, _)| !HEADER_FIELDS.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    if !extra.is_empty() {
        line.push(' ');
        match serde_json::to_string(&extra) {
            Ok(json) => line.push_str(&json),
            Err(_) => line.push_str(&format!("{:?}", extra)),
        }
    }

    line
}

/// Escape `\n`, `\r`, `\t` and other control characters.
fn escape_control(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}

fn paint_level(level: &str) -> ColoredString {
    let label = format!("{:<5}", level.to_uppercase());
    let label = label.as_str();
    match level {
        "error" => label.red().bold(),
        "warn" => label.yellow(),
        "info" => label.green(),
        "debug" => label.blue(),
        _ => label.dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use serde_json::json;

    #[test]
    fn test_pretty_line_contents() {
        let mut record = LogRecord::new(Level::Warn, "disk low");
        record.insert("service", json!("api"));
        record.insert("freeBytes", json!(1024));

        let line = to_pretty_line(&record);

        assert!(line.contains("WARN"));
        assert!(line.contains("api"));
        assert!(line.contains("disk low"));
        assert!(line.ends_with(r#"{"freeBytes":1024}"#));
    }

    #[test]
    fn test_message_newlines_escaped() {
        let record = LogRecord::new(Level::Info, "user input\nINFO [svc] forged admin login\r");
        let line = to_pretty_line(&record);

        assert!(!line.contains('\n'));
        assert!(!line.contains('\r'));
        assert!(line.ends_with(r"user input\nINFO [svc] forged admin login\r"));
        assert_eq!(escape_control("tab\there é"), r"tab\there é");
    }

    #[test]
    fn test_pretty_line_without_extras() {
        let record = LogRecord::new(Level::Info, "ready");
        let line = to_pretty_line(&record);
        assert!(line.ends_with("ready"));
    }
}
