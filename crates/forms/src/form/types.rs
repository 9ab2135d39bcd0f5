//! Element descriptors and the values a client submits for them.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validator::Validator;

/// A single UI element in a custom form, as sent to the client.
///
/// Serialized internally tagged by `type`. Optional display fields are
/// omitted when unset, except `input.default`, which is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// Static text.
    Label { text: String },

    /// On/off switch.
    Toggle {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<bool>,
    },

    /// Numeric slider between `min` and `max`.
    Slider {
        text: String,
        min: Numeric,
        max: Numeric,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<Numeric>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Numeric>,
    },

    /// Slider over a fixed list of named steps.
    StepSlider {
        text: String,
        steps: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<usize>,
    },

    /// Single choice from a list of options.
    Dropdown {
        text: String,
        options: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<usize>,
    },

    /// Free text input.
    Input {
        text: String,
        #[serde(default)]
        placeholder: String,
        #[serde(default)]
        default: Option<String>,
    },

    /// Section header.
    Header { text: String },

    /// Horizontal divider. Always carries empty text.
    Divider {
        #[serde(default)]
        text: String,
    },
}

impl Element {
    /// Get the type tag as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::Label { .. } => "label",
            Element::Toggle { .. } => "toggle",
            Element::Slider { .. } => "slider",
            Element::StepSlider { .. } => "step_slider",
            Element::Dropdown { .. } => "dropdown",
            Element::Input { .. } => "input",
            Element::Header { .. } => "header",
            Element::Divider { .. } => "divider",
        }
    }

    /// Readonly elements have no slot in the client's response.
    pub fn is_readonly(&self) -> bool {
        matches!(
            self,
            Element::Label { .. } | Element::Header { .. } | Element::Divider { .. }
        )
    }

    /// The check applied to this element's submitted value.
    pub fn validator(&self) -> Validator {
        match self {
            Element::Label { .. } | Element::Header { .. } | Element::Divider { .. } => {
                Validator::Null
            }
            Element::Toggle { .. } => Validator::Bool,
            Element::Slider { min, max, .. } => Validator::NumericRange {
                min: *min,
                max: *max,
            },
            Element::StepSlider { steps, .. } => Validator::IndexInRange(steps.len()),
            Element::Dropdown { options, .. } => Validator::IndexInRange(options.len()),
            Element::Input { .. } => Validator::String,
        }
    }
}

/// A value submitted for one element, or the absence of one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl FormValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FormValue::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FormValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of `Int` and `Float`.
    pub fn as_numeric(&self) -> Option<Numeric> {
        match self {
            FormValue::Int(i) => Some(Numeric::Int(*i)),
            FormValue::Float(f) => Some(Numeric::Float(*f)),
            _ => None,
        }
    }
}

/// A slider bound, step, or default, kept as the caller wrote it.
///
/// Integers stay integers on the wire (`100`, not `100.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

/// 2^63, the first float above every `i64`.
const I64_END: f64 = 9_223_372_036_854_775_808.0;

impl Numeric {
    /// Exact ordering across integers and floats. `None` when a NaN is
    /// involved.
    pub fn compare(&self, other: &Numeric) -> Option<Ordering> {
        match (*self, *other) {
            (Numeric::Int(a), Numeric::Int(b)) => Some(a.cmp(&b)),
            (Numeric::Float(a), Numeric::Float(b)) => a.partial_cmp(&b),
            (Numeric::Int(a), Numeric::Float(b)) => cmp_int_float(a, b),
            (Numeric::Float(a), Numeric::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

/// Compare without routing the integer through `f64`, which rounds above 2^53.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I64_END {
        return Some(Ordering::Less);
    }
    if f < -I64_END {
        return Some(Ordering::Greater);
    }

    // In range, so the truncated float converts to i64 exactly.
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&f),
        other => Some(other),
    }
}

impl From<i64> for Numeric {
    fn from(i: i64) -> Self {
        Numeric::Int(i)
    }
}

impl From<i32> for Numeric {
    fn from(i: i32) -> Self {
        Numeric::Int(i.into())
    }
}

impl From<f64> for Numeric {
    fn from(f: f64) -> Self {
        Numeric::Float(f)
    }
}

/// Name of a JSON value's kind, as reported in validation errors.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for FormValue {
    /// The kind of the value that has no `FormValue` counterpart.
    type Error = &'static str;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(FormValue::Null),
            Value::Bool(b) => Ok(FormValue::Bool(b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(FormValue::Int(i)),
                // u64 beyond i64 range and true floats both land here
                None => n.as_f64().map(FormValue::Float).ok_or("number"),
            },
            Value::String(s) => Ok(FormValue::String(s)),
            other => Err(json_kind(&other)),
        }
    }
}

impl From<FormValue> for Value {
    fn from(value: FormValue) -> Self {
        match value {
            FormValue::Null => Value::Null,
            FormValue::Bool(b) => Value::Bool(b),
            FormValue::Int(i) => Value::from(i),
            FormValue::Float(f) => Value::from(f),
            FormValue::String(s) => Value::String(s),
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::String(s.to_string())
    }
}
