#![allow(dead_code)]

use formwork::{InputDescriptor, RuleTable, Schema, SchemaError, ValidatorRegistry};
use serde_json::Value;

pub fn compile(raw: &str) -> RuleTable {
    let schema = Schema::from_json(raw)
        .unwrap_or_else(|e| panic!("Failed to parse schema: {raw}\nError: {e:?}"));
    RuleTable::compile(&schema, &ValidatorRegistry::new())
        .unwrap_or_else(|e| panic!("Failed to compile schema: {raw}\nError: {e:?}"))
}

pub fn compile_err(raw: &str) -> SchemaError {
    let schema = Schema::from_json(raw)
        .unwrap_or_else(|e| panic!("Failed to parse schema: {raw}\nError: {e:?}"));
    RuleTable::compile(&schema, &ValidatorRegistry::new())
        .expect_err(&format!("Expected compile error for: {raw}"))
}

pub fn schema_err(raw: &str) -> SchemaError {
    Schema::from_json(raw).expect_err(&format!("Expected schema error for: {raw}"))
}

/// Replaces the value of the input named `name`, panicking when the
/// snapshot holds no such input.
pub fn with_value(inputs: Vec<InputDescriptor>, name: &str, value: Value) -> Vec<InputDescriptor> {
    let mut found = false;
    let inputs: Vec<InputDescriptor> = inputs
        .into_iter()
        .map(|input| {
            if input.name == name {
                found = true;
                input.with_value(value.clone())
            } else {
                input
            }
        })
        .collect();
    assert!(found, "No input named {name}");
    inputs
}

pub fn input_named<'a>(inputs: &'a [InputDescriptor], name: &str) -> &'a InputDescriptor {
    inputs
        .iter()
        .find(|input| input.name == name)
        .unwrap_or_else(|| panic!("No input named {name}"))
}
