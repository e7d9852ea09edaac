//! Compiled validators and value emptiness.

use serde_json::Value;

/// Message used when a required field holds an empty value.
///
/// This text is fixed; a field's custom message never applies to the
/// required check.
pub const EMPTY_FIELD_MESSAGE: &str = "This field must not be empty.";

/// A predicate plus the message reported when it fails.
///
/// Compiled validators are built exactly once, when a schema is compiled:
/// preset factories bake their parameter payload (and any custom message)
/// into the closure and the message string, so the validation pass itself
/// never inspects configuration.
pub struct CompiledValidator {
    predicate: Box<dyn Fn(&Value) -> bool + Send + Sync>,
    message: String,
}

impl CompiledValidator {
    /// Creates a validator from a predicate and its failure message.
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    /// Runs the predicate against a single value.
    pub fn validate(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    /// Returns the message reported when this validator fails.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Debug for CompiledValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledValidator")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Returns whether a submitted value counts as empty.
///
/// Empty means: never set (`null`), the empty string, or the empty array.
/// Numbers are never empty; `0` is a real value and flows to the configured
/// validators rather than tripping the required check.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => false,
    }
}

/// Returns the JSON kind of a value, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
