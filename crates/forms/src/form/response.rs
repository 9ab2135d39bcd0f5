//! Processed form responses.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::FormValue;

/// Validated values keyed by element label, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(IndexMap<String, FormValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Insert a value. A repeated label overwrites in place and keeps its
    /// original position; the previous value is returned.
    pub fn insert(&mut self, label: impl Into<String>, value: FormValue) -> Option<FormValue> {
        self.0.insert(label.into(), value)
    }

    pub fn get(&self, label: &str) -> Option<&FormValue> {
        self.0.get(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Convert to a JSON object, preserving order.
    pub fn into_json(self) -> Value {
        let map: Map<String, Value> = self.0.into_iter().map(|(k, v)| (k, v.into())).collect();
        Value::Object(map)
    }
}

/// Outcome of processing a client response.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResponse {
    /// The client closed the form without submitting.
    Closed,

    /// The client submitted values that passed validation.
    Submitted(FormValues),
}

impl FormResponse {
    /// Submitted values, if any.
    pub fn values(&self) -> Option<&FormValues> {
        match self {
            FormResponse::Closed => None,
            FormResponse::Submitted(values) => Some(values),
        }
    }

    pub fn into_values(self) -> Option<FormValues> {
        match self {
            FormResponse::Closed => None,
            FormResponse::Submitted(values) => Some(values),
        }
    }

    /// The payload handed to completion callbacks: `null` when closed,
    /// otherwise an object keyed by label.
    pub fn into_value(self) -> Value {
        match self {
            FormResponse::Closed => Value::Null,
            FormResponse::Submitted(values) => values.into_json(),
        }
    }
}
