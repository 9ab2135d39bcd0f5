#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Custom form building and response processing tests.

use serde_json::{Value, json};

use customform::form::Validator;
use customform::{CustomForm, Element, FormResponse, FormValue, ValidationError};
use customform_test_utils::{assert, every_element_form, strings, survey_form};

#[test]
fn test_survey_scenario() {
    let form = survey_form();

    assert::accepts(&form, json!([true, 42]), &json!({"0": null, "1": true, "2": 42}));
    assert::rejects(
        &form,
        json!([true, 42, 1]),
        &ValidationError::SizeMismatch {
            expected: 2,
            actual: 3,
        },
    );
    assert::rejects(
        &form,
        json!([true, 101]),
        &ValidationError::InvalidValue {
            label: "2".to_string(),
        },
    );
}

#[test]
fn test_response_length_must_match_writable_count() {
    let form = every_element_form();
    assert_eq!(form.response_len(), 5);

    for len in [0, 4, 6, 8] {
        let raw = Value::Array(vec![Value::Null; len]);
        assert::rejects(
            &form,
            raw,
            &ValidationError::SizeMismatch {
                expected: 5,
                actual: len,
            },
        );
    }
}

#[test]
fn test_every_element_accepts_valid_response() {
    let form = every_element_form();
    let values = form
        .process_data(json!([false, 0.3, 2, 0, ""]))
        .unwrap()
        .into_values()
        .unwrap();

    // One entry per element, readonly or not.
    assert_eq!(values.len(), form.len());
    let labels: Vec<_> = values.labels().collect();
    assert_eq!(
        labels,
        vec![
            "header",
            "intro",
            "notify",
            "volume",
            "4",
            "difficulty",
            "colour",
            "nickname"
        ]
    );

    assert_eq!(values.get("header"), Some(&FormValue::Null));
    assert_eq!(values.get("intro"), Some(&FormValue::Null));
    assert_eq!(values.get("4"), Some(&FormValue::Null));
    assert_eq!(values.get("notify"), Some(&FormValue::Bool(false)));
    assert_eq!(values.get("volume"), Some(&FormValue::Float(0.3)));
    assert_eq!(values.get("difficulty"), Some(&FormValue::Int(2)));
    assert_eq!(values.get("colour"), Some(&FormValue::Int(0)));
    assert_eq!(values.get("nickname"), Some(&FormValue::from("")));
}

#[test]
fn test_readonly_elements_never_consume_response_values() {
    let mut form = customform::FormBuilder::new("Spacing");
    form.add_divider()
        .add_toggle("a", None, Some("a"))
        .add_divider()
        .add_header("h", None)
        .add_toggle("b", None, Some("b"));

    assert::accepts(
        &form,
        json!([true, false]),
        &json!({"0": null, "a": true, "2": null, "3": null, "b": false}),
    );
}

#[test]
fn test_slider_validation() {
    let mut form = customform::FormBuilder::new("Slider");
    form.add_slider("v", 0.0, 10.0, None, None, Some("v"));

    assert::accepts(&form, json!([10]), &json!({"v": 10}));
    assert::accepts(&form, json!([0]), &json!({"v": 0}));
    assert::accepts(&form, json!([2.5]), &json!({"v": 2.5}));

    let invalid = ValidationError::InvalidValue {
        label: "v".to_string(),
    };
    assert::rejects(&form, json!([11]), &invalid);
    assert::rejects(&form, json!(["5"]), &invalid);
    assert::rejects(&form, json!([null]), &invalid);
}

#[test]
fn test_slider_negative_integer_bounds() {
    let mut form = customform::FormBuilder::new("Temperature");
    form.add_slider("t", -50_i64, 50_i64, None, None, Some("t"));

    assert::json_eq(
        &form.to_payload()["content"][0],
        &json!({"type": "slider", "text": "t", "min": -50, "max": 50}),
    );
    assert::accepts(&form, json!([-50]), &json!({"t": -50}));
    assert::accepts(&form, json!([-0.5]), &json!({"t": -0.5}));
    assert::rejects(
        &form,
        json!([-51]),
        &ValidationError::InvalidValue {
            label: "t".to_string(),
        },
    );
}

#[test]
fn test_index_validation() {
    let mut form = customform::FormBuilder::new("Indices");
    form.add_dropdown("d", strings(&["a", "b"]), None, Some("d"))
        .add_step_slider("s", strings(&["a", "b"]), None, Some("s"));

    assert::accepts(&form, json!([1, 0]), &json!({"d": 1, "s": 0}));

    let dropdown = ValidationError::InvalidValue {
        label: "d".to_string(),
    };
    assert::rejects(&form, json!([2, 0]), &dropdown);
    assert::rejects(&form, json!([-1, 0]), &dropdown);
    assert::rejects(&form, json!([1.0, 0]), &dropdown);

    let step = ValidationError::InvalidValue {
        label: "s".to_string(),
    };
    assert::rejects(&form, json!([0, 2]), &step);
}

#[test]
fn test_input_validation() {
    let mut form = customform::FormBuilder::new("Input");
    form.add_input("name", "", None, Some("name"));

    assert::accepts(&form, json!([""]), &json!({"name": ""}));
    assert::accepts(&form, json!(["Ada"]), &json!({"name": "Ada"}));

    let invalid = ValidationError::InvalidValue {
        label: "name".to_string(),
    };
    assert::rejects(&form, json!([3]), &invalid);
    assert::rejects(&form, json!([true]), &invalid);
}

#[test]
fn test_non_sequence_response() {
    let form = survey_form();
    assert::rejects(
        &form,
        json!(true),
        &ValidationError::NotASequence { kind: "boolean" },
    );
    assert::rejects(
        &form,
        json!(7),
        &ValidationError::NotASequence { kind: "integer" },
    );
}

#[test]
fn test_closed_response_passes_through() {
    let form = survey_form();
    assert_eq!(form.process_data(Value::Null).unwrap(), FormResponse::Closed);

    let mut raw = Value::Null;
    form.process_data_in_place(&mut raw).unwrap();
    assert_eq!(raw, Value::Null);
}

#[test]
fn test_failed_processing_leaves_raw_untouched() {
    let form = survey_form();
    let mut raw = json!([true, 500]);
    let err = form.process_data_in_place(&mut raw).unwrap_err();
    assert_eq!(err.field(), Some("2"));
    assert_eq!(raw, json!([true, 500]));
}

#[test]
fn test_payload_matches_wire_shape() {
    let form = every_element_form();
    let payload = form.to_payload();

    assert::has_key(&payload, "type");
    assert::json_eq(
        &payload,
        &json!({
            "type": "custom_form",
            "title": "Everything",
            "content": [
                {"type": "header", "text": "Settings"},
                {"type": "label", "text": "Pick your options below."},
                {"type": "toggle", "text": "Notifications", "default": true},
                {"type": "slider", "text": "Volume", "min": 0.0, "max": 1.0, "step": 0.1, "default": 0.5},
                {"type": "divider", "text": ""},
                {"type": "step_slider", "text": "Difficulty", "steps": ["easy", "normal", "hard"], "default": 1},
                {"type": "dropdown", "text": "Colour", "options": ["red", "green", "blue"]},
                {"type": "input", "text": "Nickname", "placeholder": "type here", "default": "anon"},
            ],
        }),
    );
}

#[test]
fn test_element_metadata() {
    let form = every_element_form();
    let readonly: Vec<_> = form.slots().iter().map(|s| s.readonly).collect();
    assert_eq!(
        readonly,
        vec![true, true, false, false, true, false, false, false]
    );
    assert!(matches!(form.content()[4], Element::Divider { .. }));
    assert_eq!(form.slots()[6].validator, Validator::IndexInRange(3));
}

#[test]
fn test_custom_form_round_trip() {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut form = CustomForm::from_builder(survey_form(), move |response| {
        tx.send(response.into_value()).unwrap();
    });

    assert_eq!(form.payload()["type"], "custom_form");
    assert!(form.respond(json!([true])).is_err());
    form.respond(json!([false, 18])).unwrap();

    assert_eq!(rx.recv().unwrap(), json!({"0": null, "1": false, "2": 18}));
}
