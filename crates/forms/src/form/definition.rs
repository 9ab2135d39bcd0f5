//! Parser for `.toml` custom form definitions.
//!
//! A definition declares the form title and its elements in order:
//!
//! ```toml
//! title = "Survey"
//!
//! [[element]]
//! type = "toggle"
//! text = "Subscribe"
//! label = "subscribe"
//! ```
//!
//! Optional fields (`step`, `default`, `placeholder`, `label`) are unset by
//! leaving the key out. There is no `-1` sentinel: a negative slider
//! `default` is an ordinary value, and a negative dropdown or step slider
//! `default` is a parse error.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::builder::FormBuilder;
use super::types::Element;

/// A custom form declared in a definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct FormDefinition {
    /// Form title.
    pub title: String,

    /// Elements in display order.
    #[serde(default, rename = "element")]
    pub elements: Vec<ElementDefinition>,
}

/// One `[[element]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementDefinition {
    #[serde(flatten)]
    pub element: Element,

    /// Output label; defaults to the element's position.
    #[serde(default)]
    pub label: Option<String>,
}

impl FormDefinition {
    /// Parse a definition from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("failed to parse form definition")
    }

    /// Load a definition file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("in {}", path.display()))
    }

    /// Build the form through the builder's add operations.
    pub fn build(&self) -> FormBuilder {
        let mut form = FormBuilder::new(self.title.clone());
        for def in &self.elements {
            let label = def.label.as_deref();
            match def.element.clone() {
                Element::Label { text } => form.add_label(text, label),
                Element::Toggle { text, default } => form.add_toggle(text, default, label),
                Element::Slider {
                    text,
                    min,
                    max,
                    step,
                    default,
                } => form.add_slider(text, min, max, step, default, label),
                Element::StepSlider {
                    text,
                    steps,
                    default,
                } => form.add_step_slider(text, steps, default, label),
                Element::Dropdown {
                    text,
                    options,
                    default,
                } => form.add_dropdown(text, options, default, label),
                Element::Input {
                    text,
                    placeholder,
                    default,
                } => form.add_input(text, placeholder, default.as_deref(), label),
                Element::Header { text } => form.add_header(text, label),
                Element::Divider { .. } => form.add_divider(),
            };
        }
        form
    }
}
