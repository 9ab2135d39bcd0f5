//! Per-element checks applied to submitted values.

use std::cmp::Ordering;

use super::types::{FormValue, Numeric};

/// The check an element applies to the value the client submitted for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validator {
    /// Only the absence of a value.
    Null,

    /// Boolean values.
    Bool,

    /// Integer or float within `min..=max`.
    NumericRange { min: Numeric, max: Numeric },

    /// Integer index into a list of the given length.
    IndexInRange(usize),

    /// Any string, including the empty string.
    String,
}

impl Validator {
    /// Whether `value` passes this check.
    pub fn accepts(&self, value: &FormValue) -> bool {
        match self {
            Validator::Null => value.is_null(),
            Validator::Bool => matches!(value, FormValue::Bool(_)),
            Validator::NumericRange { min, max } => value.as_numeric().is_some_and(|v| {
                matches!(v.compare(min), Some(Ordering::Greater | Ordering::Equal))
                    && matches!(v.compare(max), Some(Ordering::Less | Ordering::Equal))
            }),
            Validator::IndexInRange(len) => value
                .as_i64()
                .and_then(|i| usize::try_from(i).ok())
                .is_some_and(|i| i < *len),
            Validator::String => matches!(value, FormValue::String(_)),
        }
    }
}
