//! Open field-to-value records and the [`Row`] abstraction used by tables.

use super::Value;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field holding a record's identifier
pub const ID_FIELD: &str = "id";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("record source must serialize to a JSON object")]
    NotAnObject,
}

/// Anything a table can display: an identifier plus named fields.
pub trait Row {
    fn id(&self) -> &str;
    fn field(&self, key: &str) -> Option<&Value>;
}

/// One row of domain data as an ordered mapping from field name to value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Convert a flat serde struct into a record; nested values are
    /// stringified as JSON.
    pub fn from_serialize<T: Serialize>(source: &T) -> Result<Self, RecordError> {
        match serde_json::to_value(source)? {
            serde_json::Value::Object(map) => Ok(Self {
                fields: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            }),
            _ => Err(RecordError::NotAnObject),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Text of a field, empty when missing
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(ToString::to_string).unwrap_or_default()
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }
}

impl Row for Record {
    fn id(&self) -> &str {
        self.get(ID_FIELD).and_then(Value::as_str).unwrap_or_default()
    }

    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}
