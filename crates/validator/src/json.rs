//! JSON interop for [`Value`].
//!
//! Converts `serde_json::Value` documents into validation values and back,
//! and pulls single fields out of a document by JSON pointer.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//! use serde_json::json;
//!
//! let doc = json!({"user": {"email": "john@example.com"}});
//! let email = Value::from_json_pointer(&doc, "/user/email");
//! assert!(email.satisfy_all(&[RegexRule::email()]).is_success());
//! ```

use serde_json::{Map, Number};

use crate::foundation::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => number_value(&n),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Self::from(json.clone())
    }
}

/// Integers that fit in `i64` become `Int`, everything else `Float`.
fn number_value(n: &Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Int(i),
        None => n.as_f64().map_or(Value::Null, Value::Float),
    }
}

impl Value {
    /// Extracts the field at `pointer` (RFC 6901) from `doc`.
    ///
    /// A missing field yields `Null`, which typed rules reject with
    /// `InvalidType`.
    pub fn from_json_pointer(doc: &serde_json::Value, pointer: &str) -> Self {
        doc.pointer(pointer).map_or(Self::Null, Self::from)
    }

    /// Converts back to JSON.
    ///
    /// Non-finite floats become `null`. Card categories serialize as their
    /// snake_case tag and date-times as RFC 3339 strings.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Int(i) => serde_json::Value::Number((*i).into()),
            Self::Float(f) => {
                Number::from_f64(*f).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Self::Text(s) => serde_json::Value::String(s.clone()),
            Self::List(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<_, _>>(),
            ),
            Self::Card(card) => {
                serde_json::to_value(card).unwrap_or(serde_json::Value::Null)
            }
            #[cfg(feature = "temporal")]
            Self::DateTime(dt) => serde_json::Value::String(dt.to_rfc3339()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
