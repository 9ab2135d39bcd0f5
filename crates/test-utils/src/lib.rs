#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Custom form test utilities.
//!
//! Helpers for integration testing: form fixtures, definition files on disk,
//! and assertion utilities for processed responses.

use std::path::PathBuf;

use customform::{FormBuilder, Numeric};
use uuid::Uuid;

/// The label / toggle / slider form used throughout the response tests.
///
/// Labels default to element positions, so a valid response such as
/// `[true, 42]` maps to `{"0": null, "1": true, "2": 42}`.
pub fn survey_form() -> FormBuilder {
    let mut form = FormBuilder::new("Survey");
    form.add_label("info", None)
        .add_toggle("agree", None, None)
        .add_slider("age", 0.0, 100.0, None, None, None);
    form
}

/// A form containing one element of every type, each with an explicit label
/// (except the divider, which is labelled by position).
///
/// Expected response order: toggle, slider, step slider, dropdown, input.
pub fn every_element_form() -> FormBuilder {
    let mut form = FormBuilder::new("Everything");
    form.add_header("Settings", Some("header"))
        .add_label("Pick your options below.", Some("intro"))
        .add_toggle("Notifications", Some(true), Some("notify"))
        .add_slider(
            "Volume",
            0.0,
            1.0,
            Some(Numeric::Float(0.1)),
            Some(Numeric::Float(0.5)),
            Some("volume"),
        )
        .add_divider()
        .add_step_slider(
            "Difficulty",
            strings(&["easy", "normal", "hard"]),
            Some(1),
            Some("difficulty"),
        )
        .add_dropdown(
            "Colour",
            strings(&["red", "green", "blue"]),
            None,
            Some("colour"),
        )
        .add_input("Nickname", "type here", Some("anon"), Some("nickname"));
    form
}

/// Owned strings from string slices.
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A definition file written to the system temp directory.
///
/// Removed when dropped.
#[derive(Debug)]
pub struct TempDefinition {
    pub path: PathBuf,
}

impl TempDefinition {
    /// Write `source` to a uniquely named `.toml` file.
    pub fn new(source: &str) -> Self {
        let path = std::env::temp_dir().join(format!("customform-{}.toml", Uuid::now_v7()));
        std::fs::write(&path, source).expect("failed to write temp definition");
        Self { path }
    }

    /// Path as a CLI argument.
    pub fn arg(&self) -> String {
        self.path.display().to_string()
    }
}

impl Drop for TempDefinition {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Assertion helpers for processed responses.
pub mod assert {
    use customform::{FormBuilder, ValidationError};
    use serde_json::Value;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert that a JSON value equals expected.
    pub fn json_eq(actual: &Value, expected: &Value) {
        assert_eq!(
            actual,
            expected,
            "JSON mismatch:\nactual: {}\nexpected: {}",
            serde_json::to_string_pretty(actual).unwrap(),
            serde_json::to_string_pretty(expected).unwrap()
        );
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that `form` accepts `raw` and produces `expected`.
    pub fn accepts(form: &FormBuilder, raw: Value, expected: &Value) {
        let response = form
            .process_data(raw.clone())
            .unwrap_or_else(|e| panic!("Expected {raw} to be accepted, got error: {e}"));
        json_eq(&response.into_value(), expected);
    }

    /// Assert that `form` rejects `raw` with `expected`.
    pub fn rejects(form: &FormBuilder, raw: Value, expected: &ValidationError) {
        match form.process_data(raw.clone()) {
            Ok(response) => panic!("Expected {raw} to be rejected, got: {response:?}"),
            Err(e) => assert_eq!(&e, expected, "Wrong validation error for {raw}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_consistent() {
        let survey = survey_form();
        assert_eq!(survey.len(), 3);
        assert_eq!(survey.response_len(), 2);

        let every = every_element_form();
        assert_eq!(every.len(), 8);
        assert_eq!(every.response_len(), 5);
    }

    #[test]
    fn test_temp_definition_removed_on_drop() {
        let path = {
            let def = TempDefinition::new("title = \"t\"\n");
            assert!(def.path.exists());
            def.path.clone()
        };
        assert!(!path.exists());
    }
}
