//! `Bon8Value` — the dynamic value model the codec operates on.

use serde_json::Value as JsonValue;

/// A decoded BON8 value.
///
/// Objects keep their pairs in encounter order; the decoder guarantees the
/// keys are unique (first occurrence wins on duplicates).
#[derive(Debug, Clone, PartialEq)]
pub enum Bon8Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Bon8Value>),
    Object(Vec<(String, Bon8Value)>),
}

impl From<bool> for Bon8Value {
    fn from(v: bool) -> Self {
        Bon8Value::Bool(v)
    }
}

impl From<i32> for Bon8Value {
    fn from(v: i32) -> Self {
        Bon8Value::Int(v as i64)
    }
}

impl From<i64> for Bon8Value {
    fn from(v: i64) -> Self {
        Bon8Value::Int(v)
    }
}

impl From<u32> for Bon8Value {
    fn from(v: u32) -> Self {
        Bon8Value::Int(v as i64)
    }
}

impl From<f64> for Bon8Value {
    fn from(v: f64) -> Self {
        Bon8Value::Float(v)
    }
}

impl From<&str> for Bon8Value {
    fn from(v: &str) -> Self {
        Bon8Value::Str(v.to_string())
    }
}

impl From<String> for Bon8Value {
    fn from(v: String) -> Self {
        Bon8Value::Str(v)
    }
}

impl From<Vec<Bon8Value>> for Bon8Value {
    fn from(v: Vec<Bon8Value>) -> Self {
        Bon8Value::Array(v)
    }
}

impl From<JsonValue> for Bon8Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Bon8Value::Null,
            JsonValue::Bool(b) => Bon8Value::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Bon8Value::Int(i)
                } else {
                    // u64 above i64::MAX or a decimal; both go through f64.
                    Bon8Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            JsonValue::String(s) => Bon8Value::Str(s),
            JsonValue::Array(arr) => {
                Bon8Value::Array(arr.into_iter().map(Bon8Value::from).collect())
            }
            JsonValue::Object(obj) => Bon8Value::Object(
                obj.into_iter().map(|(k, v)| (k, Bon8Value::from(v))).collect(),
            ),
        }
    }
}

impl From<Bon8Value> for JsonValue {
    fn from(value: Bon8Value) -> Self {
        match value {
            Bon8Value::Null => JsonValue::Null,
            Bon8Value::Bool(b) => JsonValue::Bool(b),
            Bon8Value::Int(i) => JsonValue::Number(i.into()),
            Bon8Value::Float(f) => serde_json::Number::from_f64(f)
                .map_or(JsonValue::Null, JsonValue::Number),
            Bon8Value::Str(s) => JsonValue::String(s),
            Bon8Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            Bon8Value::Object(pairs) => JsonValue::Object(
                pairs.into_iter().map(|(k, v)| (k, JsonValue::from(v))).collect(),
            ),
        }
    }
}
