//! Field maps: metadata and context objects.

use serde::Serialize;
use serde_json::{Map, Value};

/// String-keyed field map, in insertion order.
pub type Fields = Map<String, Value>;

/// Key used when a non-object value is supplied where a field map is expected.
pub const WRAPPED_VALUE_KEY: &str = "meta";

/// Conversion into a field map, accepted by `emit` and `with_context`.
pub trait IntoFields {
    fn into_fields(self) -> Fields;
}

impl IntoFields for Fields {
    fn into_fields(self) -> Fields {
        self
    }
}

impl IntoFields for () {
    fn into_fields(self) -> Fields {
        Fields::new()
    }
}

/// Objects become their fields; `null` is empty; any other value is kept
/// under [`WRAPPED_VALUE_KEY`] rather than dropped.
impl IntoFields for Value {
    fn into_fields(self) -> Fields {
        match self {
            Value::Object(map) => map,
            Value::Null => Fields::new(),
            other => {
                let mut fields = Fields::new();
                fields.insert(WRAPPED_VALUE_KEY.to_string(), other);
                fields
            }
        }
    }
}

impl<T: IntoFields> IntoFields for Option<T> {
    fn into_fields(self) -> Fields {
        self.map(IntoFields::into_fields).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<Value>> IntoFields for Vec<(K, V)> {
    fn into_fields(self) -> Fields {
        self.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
    }
}

/// Serialize any value into a field value.
///
/// Values that fail to serialize are kept as a descriptive string so the
/// surrounding record is still emitted.
pub fn field_value<T: Serialize>(value: T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|e| Value::String(format!("<unserializable: {}>", e)))
}
