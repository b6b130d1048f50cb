// src/health/document.rs
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A decoded JSON value, split into the shapes the evaluator cares about.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HealthValue {
    String(String),
    Object(BTreeMap<String, HealthValue>),
    Other(Value),
}

impl HealthValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HealthValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, HealthValue>> {
        match self {
            HealthValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// JSON type name, used in decode diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            HealthValue::String(_) => "string",
            HealthValue::Object(_) => "object",
            HealthValue::Other(Value::Array(_)) => "array",
            HealthValue::Other(Value::Number(_)) => "number",
            HealthValue::Other(Value::Bool(_)) => "boolean",
            HealthValue::Other(_) => "null",
        }
    }
}

impl From<Value> for HealthValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => HealthValue::String(s),
            Value::Object(map) => HealthValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, HealthValue::from(value)))
                    .collect(),
            ),
            other => HealthValue::Other(other),
        }
    }
}

/// Strings print bare, everything else prints as JSON text.
impl fmt::Display for HealthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthValue::String(s) => f.write_str(s),
            HealthValue::Other(value) => write!(f, "{}", value),
            HealthValue::Object(_) => {
                let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

/// The top-level object of a health endpoint response.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthDocument {
    fields: BTreeMap<String, HealthValue>,
}

impl HealthDocument {
    /// Wrap a decoded value, returning it back when it is not an object.
    pub fn from_value(value: Value) -> Result<Self, HealthValue> {
        match HealthValue::from(value) {
            HealthValue::Object(fields) => Ok(Self { fields }),
            other => Err(other),
        }
    }

    pub fn get(&self, key: &str) -> Option<&HealthValue> {
        self.fields.get(key)
    }
}

impl fmt::Display for HealthDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.fields).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
