//! Custom form builder and response processing.
//!
//! A custom form is an ordered list of elements. Readonly elements (labels,
//! headers, dividers) have no slot in the client's response array, so the
//! response is walked with two indices: one over all elements and one over
//! the response values.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{ValidationError, ValidationResult};

use super::response::{FormResponse, FormValues};
use super::types::{Element, FormValue, Numeric, json_kind};
use super::validator::Validator;

/// Wire tag of a custom form payload.
pub const CUSTOM_FORM_TYPE: &str = "custom_form";

/// Per-element metadata kept alongside the element content.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// Key the element's value is stored under in the output.
    pub label: String,

    /// Whether the element is absent from the client's response.
    pub readonly: bool,

    /// Check applied to the submitted value.
    pub validator: Validator,
}

/// Builds a custom form and validates responses to it.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    title: String,
    content: Vec<Element>,
    slots: Vec<Slot>,
}

impl FormBuilder {
    /// Create an empty form with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
            slots: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the form title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Elements in declaration order.
    pub fn content(&self) -> &[Element] {
        &self.content
    }

    /// Element metadata, index-aligned with [`content`](Self::content).
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Output labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of values a submitted response must contain.
    pub fn response_len(&self) -> usize {
        self.slots.iter().filter(|s| !s.readonly).count()
    }

    /// Add static text.
    pub fn add_label(&mut self, text: impl Into<String>, label: Option<&str>) -> &mut Self {
        self.push(Element::Label { text: text.into() }, label)
    }

    /// Add an on/off toggle.
    pub fn add_toggle(
        &mut self,
        text: impl Into<String>,
        default: Option<bool>,
        label: Option<&str>,
    ) -> &mut Self {
        self.push(
            Element::Toggle {
                text: text.into(),
                default,
            },
            label,
        )
    }

    /// Add a numeric slider. Submitted values must lie within `min..=max`.
    pub fn add_slider(
        &mut self,
        text: impl Into<String>,
        min: impl Into<Numeric>,
        max: impl Into<Numeric>,
        step: Option<Numeric>,
        default: Option<Numeric>,
        label: Option<&str>,
    ) -> &mut Self {
        self.push(
            Element::Slider {
                text: text.into(),
                min: min.into(),
                max: max.into(),
                step,
                default,
            },
            label,
        )
    }

    /// Add a slider over named steps. Submitted values are step indices.
    pub fn add_step_slider(
        &mut self,
        text: impl Into<String>,
        steps: Vec<String>,
        default: Option<usize>,
        label: Option<&str>,
    ) -> &mut Self {
        self.push(
            Element::StepSlider {
                text: text.into(),
                steps,
                default,
            },
            label,
        )
    }

    /// Add a dropdown. Submitted values are option indices.
    pub fn add_dropdown(
        &mut self,
        text: impl Into<String>,
        options: Vec<String>,
        default: Option<usize>,
        label: Option<&str>,
    ) -> &mut Self {
        self.push(
            Element::Dropdown {
                text: text.into(),
                options,
                default,
            },
            label,
        )
    }

    /// Add a text input.
    pub fn add_input(
        &mut self,
        text: impl Into<String>,
        placeholder: impl Into<String>,
        default: Option<&str>,
        label: Option<&str>,
    ) -> &mut Self {
        self.push(
            Element::Input {
                text: text.into(),
                placeholder: placeholder.into(),
                default: default.map(str::to_string),
            },
            label,
        )
    }

    /// Add a divider. Dividers are always labelled by position.
    pub fn add_divider(&mut self) -> &mut Self {
        self.push(
            Element::Divider {
                text: String::new(),
            },
            None,
        )
    }

    /// Add a section header.
    pub fn add_header(&mut self, text: impl Into<String>, label: Option<&str>) -> &mut Self {
        self.push(Element::Header { text: text.into() }, label)
    }

    /// Append an element together with its metadata.
    fn push(&mut self, element: Element, label: Option<&str>) -> &mut Self {
        let label = label.map_or_else(|| self.content.len().to_string(), str::to_string);
        debug!(
            form = %self.title,
            element = element.type_name(),
            label = %label,
            "form element added"
        );

        self.slots.push(Slot {
            label,
            readonly: element.is_readonly(),
            validator: element.validator(),
        });
        self.content.push(element);
        self
    }

    /// Validate a raw client response and map it onto element labels.
    ///
    /// `null` means the client closed the form and yields
    /// [`FormResponse::Closed`]. Otherwise the response must be an array with
    /// exactly one value per non-readonly element, in declaration order.
    /// Readonly elements map to [`FormValue::Null`].
    pub fn process_data(&self, raw: Value) -> ValidationResult<FormResponse> {
        let items = match raw {
            Value::Null => {
                debug!(form = %self.title, "form closed without response");
                return Ok(FormResponse::Closed);
            }
            Value::Array(items) => items,
            other => {
                return Err(ValidationError::NotASequence {
                    kind: json_kind(&other),
                });
            }
        };

        let expected = self.response_len();
        if items.len() != expected {
            return Err(ValidationError::SizeMismatch {
                expected,
                actual: items.len(),
            });
        }

        let mut values = FormValues::with_capacity(self.slots.len());
        let mut cursor = items.into_iter();
        for slot in &self.slots {
            let value = if slot.readonly {
                FormValue::Null
            } else {
                // Length was checked above, so the cursor cannot run dry.
                let raw_value = cursor.next().unwrap_or(Value::Null);
                match FormValue::try_from(raw_value) {
                    Ok(value) if slot.validator.accepts(&value) => value,
                    _ => {
                        return Err(ValidationError::InvalidValue {
                            label: slot.label.clone(),
                        });
                    }
                }
            };

            if values.insert(slot.label.as_str(), value).is_some() {
                debug!(form = %self.title, label = %slot.label, "duplicate label overwritten");
            }
        }

        debug!(form = %self.title, fields = values.len(), "form response processed");
        Ok(FormResponse::Submitted(values))
    }

    /// Like [`process_data`](Self::process_data), but replaces `raw` with the
    /// output object on success. On failure `raw` is left untouched.
    pub fn process_data_in_place(&self, raw: &mut Value) -> ValidationResult<()> {
        if raw.is_null() {
            return Ok(());
        }
        let response = self.process_data(raw.clone())?;
        *raw = response.into_value();
        Ok(())
    }

    /// The `title`/`content` data container for the base form layer.
    pub fn data(&self) -> Value {
        json!({
            "title": self.title,
            "content": self.content,
        })
    }

    /// The payload sent to the client.
    pub fn to_payload(&self) -> Value {
        json!({
            "type": CUSTOM_FORM_TYPE,
            "title": self.title,
            "content": self.content,
        })
    }
}

impl Serialize for FormBuilder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CustomForm", 3)?;
        state.serialize_field("type", CUSTOM_FORM_TYPE)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("content", &self.content)?;
        state.end()
    }
}
