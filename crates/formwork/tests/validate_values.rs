//! Tests for snapshot validation: required/empty precedence, declared
//! evaluation order, array element semantics, and idempotence.

mod common;
use common::*;

use formwork::EMPTY_FIELD_MESSAGE;
use serde_json::json;

#[test]
fn required_empty_string_fails_with_fixed_message() {
    let table = compile(
        r#"{
            "name": {
                "type": "string",
                "message": "Custom message.",
                "validators": ["required", { "min": 2 }]
            }
        }"#,
    );

    let checked = table.validate(&table.project());
    let name = input_named(&checked, "name");
    assert!(!name.is_valid);
    // The required check always uses the fixed text, not the field's
    // custom message, and no other validator runs.
    assert_eq!(name.error_message, EMPTY_FIELD_MESSAGE);
}

#[test]
fn required_empty_array_fails() {
    let table = compile(r#"{ "tags": { "type": "array", "validators": "required" } }"#);
    let checked = table.validate(&table.project());
    assert!(!checked[0].is_valid);
    assert_eq!(checked[0].error_message, EMPTY_FIELD_MESSAGE);
}

#[test]
fn required_null_value_fails() {
    let table = compile(r#"{ "name": { "type": "string", "validators": "required" } }"#);
    let inputs = with_value(table.project(), "name", json!(null));
    let checked = table.validate(&inputs);
    assert!(!checked[0].is_valid);
    assert_eq!(checked[0].error_message, EMPTY_FIELD_MESSAGE);
}

#[test]
fn required_with_value_passes() {
    let table = compile(r#"{ "name": { "type": "string", "validators": "required" } }"#);
    let inputs = with_value(table.project(), "name", json!("Ada"));
    let checked = table.validate(&inputs);
    assert!(checked[0].is_valid);
    assert_eq!(checked[0].error_message, "");
}

#[test]
fn optional_empty_skips_validators() {
    let table = compile(r#"{ "email": { "type": "string", "validators": "email" } }"#);

    // The default empty string would fail the email preset, but empty and
    // optional is always acceptable.
    let checked = table.validate(&table.project());
    assert!(checked[0].is_valid);
    assert_eq!(checked[0].error_message, "");
}

#[test]
fn optional_empty_array_is_valid() {
    let table = compile(r#"{ "tags": { "type": "array", "validators": "url" } }"#);
    let checked = table.validate(&table.project());
    assert!(checked[0].is_valid);
}

#[test]
fn numeric_zero_is_not_empty() {
    let table = compile(
        r#"{ "age": { "type": "numeric", "validators": ["required", { "min": 18 }] } }"#,
    );

    // Zero is a real number, not a missing value: the required check lets
    // it through and the min validator is the one that rejects it.
    let inputs = with_value(table.project(), "age", json!(0));
    let checked = table.validate(&inputs);
    assert!(!checked[0].is_valid);
    assert_eq!(checked[0].error_message, "Value must be at least 18.");
}

#[test]
fn numeric_zero_passes_without_bounds() {
    let table = compile(r#"{ "count": { "type": "numeric", "validators": "required" } }"#);
    let inputs = with_value(table.project(), "count", json!(0));
    let checked = table.validate(&inputs);
    assert!(checked[0].is_valid);
}

#[test]
fn first_failing_validator_wins() {
    let table = compile(
        r#"{ "nick": { "type": "string", "validators": [{ "min": 2 }, { "max": 3 }] } }"#,
    );

    let too_long = with_value(table.project(), "nick", json!("abcd"));
    let checked = table.validate(&too_long);
    assert_eq!(checked[0].error_message, "Value must be at most 3.");

    let too_short = with_value(table.project(), "nick", json!("a"));
    let checked = table.validate(&too_short);
    assert_eq!(checked[0].error_message, "Value must be at least 2.");
}

#[test]
fn passing_all_validators_clears_stale_errors() {
    let table = compile(
        r#"{ "nick": { "type": "string", "validators": [{ "min": 2 }, { "max": 8 }] } }"#,
    );

    let inputs = with_value(table.project(), "nick", json!("a"));
    let failed = table.validate(&inputs);
    assert!(!failed[0].is_valid);

    let fixed = with_value(failed, "nick", json!("ada"));
    let checked = table.validate(&fixed);
    assert!(checked[0].is_valid);
    assert_eq!(checked[0].error_message, "");
}

#[test]
fn array_elements_all_checked_with_short_circuit() {
    let table = compile(
        r#"{ "links": { "type": "array", "validators": ["required", "url"] } }"#,
    );

    let inputs = with_value(
        table.project(),
        "links",
        json!(["https://example.com", "not-a-url"]),
    );
    let checked = table.validate(&inputs);
    assert!(!checked[0].is_valid);
    assert_eq!(checked[0].error_message, "Enter a valid URL.");

    let inputs = with_value(
        table.project(),
        "links",
        json!(["https://example.com", "https://leakix.net"]),
    );
    let checked = table.validate(&inputs);
    assert!(checked[0].is_valid);
}

#[test]
fn validation_is_idempotent() {
    let table = compile(
        r#"{
            "age": { "type": "numeric", "validators": ["required", { "min": 18 }] },
            "email": { "type": "string", "validators": "email" }
        }"#,
    );

    let mut inputs = with_value(table.project(), "age", json!(21));
    inputs = with_value(inputs, "email", json!("user@example.com"));

    let once = table.validate(&inputs);
    let twice = table.validate(&once);
    assert_eq!(once, twice);

    let invalid = with_value(table.project(), "age", json!(15));
    let once = table.validate(&invalid);
    let twice = table.validate(&once);
    assert_eq!(once, twice);
}

#[test]
fn snapshot_order_and_length_carry_over() {
    let table = compile(
        r#"{
            "a": { "type": "string" },
            "b": { "type": "numeric" },
            "c": { "type": "array" }
        }"#,
    );

    let inputs = table.project();
    let checked = table.validate(&inputs);
    assert_eq!(checked.len(), inputs.len());
    for (input, output) in inputs.iter().zip(&checked) {
        assert_eq!(input.name, output.name);
        assert_eq!(input.id, output.id);
    }
}

#[test]
fn age_schema_end_to_end() {
    let table = compile(
        r#"{ "age": { "type": "numeric", "validators": ["required", { "min": 18 }] } }"#,
    );

    let rule = table.rule("age").unwrap();
    assert!(rule.is_required());
    assert_eq!(rule.validators().len(), 1);

    let projected = table.project();
    assert_eq!(projected[0].name, "age");
    assert_eq!(projected[0].value, json!(0));
    assert!(projected[0].required);
    assert!(projected[0].is_valid);

    let minor = table.validate(&with_value(projected.clone(), "age", json!(16)));
    assert!(!minor[0].is_valid);
    assert_eq!(minor[0].error_message, "Value must be at least 18.");

    let adult = table.validate(&with_value(projected.clone(), "age", json!(21)));
    assert!(adult[0].is_valid);
    assert_eq!(adult[0].error_message, "");

    let unset = table.validate(&with_value(projected, "age", json!(null)));
    assert!(!unset[0].is_valid);
    assert_eq!(unset[0].error_message, EMPTY_FIELD_MESSAGE);
}

#[test]
fn tags_schema_end_to_end() {
    let table = compile(r#"{ "tags": { "type": "array", "validators": "url" } }"#);

    let empty = table.validate(&table.project());
    assert!(empty[0].is_valid);

    let mixed = with_value(
        table.project(),
        "tags",
        json!(["https://example.com", "bad-url"]),
    );
    let checked = table.validate(&mixed);
    assert!(!checked[0].is_valid);
    assert_eq!(checked[0].error_message, "Enter a valid URL.");
}

#[test]
fn custom_message_reported_on_preset_failure() {
    let table = compile(
        r#"{
            "email": {
                "type": "string",
                "message": "Check the address.",
                "validators": "email"
            }
        }"#,
    );

    let inputs = with_value(table.project(), "email", json!("not-an-email"));
    let checked = table.validate(&inputs);
    assert!(!checked[0].is_valid);
    assert_eq!(checked[0].error_message, "Check the address.");
}

#[test]
fn phone_and_password_presets_end_to_end() {
    let table = compile(
        r#"{
            "phone": { "type": "string", "validators": ["required", "phone"] },
            "password": { "type": "string", "validators": ["required", "password"] }
        }"#,
    );

    let mut inputs = with_value(table.project(), "phone", json!("+33 6 12 34 56 78"));
    inputs = with_value(inputs, "password", json!("hunter42well"));
    let checked = table.validate(&inputs);
    assert!(checked.iter().all(|input| input.is_valid));

    let mut inputs = with_value(table.project(), "phone", json!("12345"));
    inputs = with_value(inputs, "password", json!("short1"));
    let checked = table.validate(&inputs);
    assert_eq!(
        input_named(&checked, "phone").error_message,
        "Enter a valid phone number."
    );
    assert!(!input_named(&checked, "password").is_valid);
}
