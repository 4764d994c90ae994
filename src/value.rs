//! Closed value model for a parsed JSON sample.
//!
//! `serde_json::Value` folds every number into one `Number` arm; inference
//! needs integer and float as separate kinds, so the parsed document is
//! converted once into this enum and never mutated afterwards.
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    /// Keys keep source order (`serde_json` is built with `preserve_order`).
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Parse JSON text into the value model.
    pub fn parse(src: &str) -> Result<Self, serde_json::Error> {
        let raw = serde_json::from_str::<serde_json::Value>(src)?;
        Ok(Self::from(raw))
    }

    /// Human-facing kind label, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if n.is_u64() {
                    // above i64::MAX: clamped, inference only looks at the kind
                    Value::Integer(i64::MAX)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(xs) => Value::Array(xs.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
