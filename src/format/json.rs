//! Single-line JSON output.

use crate::record::LogRecord;

/// Serialize a record as one line of JSON.
///
/// Falls back to the record's `Debug` form if serialization fails.
pub fn to_json_line(record: &LogRecord) -> String {
    match serde_json::to_string(record) {
        Ok(line) => line,
        Err(e) => {
            log::warn!("RECORD_SERIALIZE_FAILED format=json error={}", e);
            format!("{:?}", record.fields())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use serde_json::{json, Value};

    #[test]
    fn test_json_line_round_trips() {
        let mut record = LogRecord::new(Level::Info, "hello");
        record.insert("traceId", json!("t1"));
        record.insert("nested", json!({"depth": {"n": 1}}));

        let line = to_json_line(&record);
        assert!(!line.contains('\n'));
        assert!(line.contains(r#""traceId":"t1""#));

        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["nested"]["depth"]["n"], json!(1));
        assert_eq!(parsed["message"], json!("hello"));
    }
}
