//! Renderable input descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::FieldType;

/// The rendered kind of an input, as a presentation layer understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Plain text entry.
    Text,
    /// Masked text entry.
    Password,
    /// Numeric entry.
    Number,
    /// Repeated entry, one value per element.
    Array,
}

impl InputType {
    /// Derives the rendered kind from a field's declared type and name.
    ///
    /// String fields whose name contains "password" (in any case) render
    /// masked; everything else maps one-to-one.
    pub fn derive(field_type: FieldType, name: &str) -> Self {
        match field_type {
            FieldType::String if name.to_ascii_lowercase().contains("password") => Self::Password,
            FieldType::String => Self::Text,
            FieldType::Numeric => Self::Number,
            FieldType::Array => Self::Array,
        }
    }

    /// Returns the initial value for a freshly projected input of this kind.
    pub fn default_value(self) -> Value {
        match self {
            Self::Text | Self::Password => Value::String(String::new()),
            Self::Number => Value::from(0),
            Self::Array => Value::Array(Vec::new()),
        }
    }

    /// Returns the lowercase name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Number => "number",
            Self::Array => "array",
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field's renderable, validatable state.
///
/// Descriptors are produced by projecting a rule table and replaced wholesale
/// by each validation pass; nothing mutates them in place. The serialized
/// form uses camelCase keys (`errorMessage`, `isValid`, `type`) so a
/// presentation layer can consume the list directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    /// Process-unique identifier, stable for the descriptor's lifetime and
    /// independent of the field name.
    pub id: String,
    /// Field key, linking back to the compiled rule.
    pub name: String,
    /// Human-readable label derived from the name.
    pub label: String,
    /// Rendered input kind.
    #[serde(rename = "type")]
    pub input_type: InputType,
    /// Current submitted value.
    pub value: Value,
    /// Whether the field must hold a non-empty value.
    pub required: bool,
    /// Message for the failing validator, empty when valid.
    pub error_message: String,
    /// Outcome of the last validation pass.
    pub is_valid: bool,
}

impl InputDescriptor {
    /// Returns a copy of this descriptor holding a new value.
    #[must_use]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }
}

/// Generates a process-unique input identifier.
pub fn generate_input_id() -> String {
    use rand::RngExt;
    let mut rng = rand::rng();
    let mut bytes = [0u8; 8];
    rng.fill(&mut bytes);
    hex::encode(&bytes)
}

/// Helper module for hex encoding (avoiding external dependency).
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}
