//! Schema model and parsing.
//!
//! A schema is an ordered set of field specs. It can be assembled through
//! the builder methods on [`Schema`] and [`FieldSpec`], or parsed from the
//! loosely-structured JSON document format:
//!
//! ```json
//! {
//!     "age": { "type": "numeric", "validators": ["required", { "min": 18 }] },
//!     "email": { "type": "string", "message": "Check the address.", "validators": "email" }
//! }
//! ```
//!
//! Validator descriptors come in three shapes and are classified exactly once
//! here, at load time: plain strings (`"required"` case-insensitively marks
//! the field required, anything else is lowercased and treated as a preset
//! name), single-key objects (the exact key `"required"` marks the field
//! required, any other key names a preset and carries its parameter
//! payload), and caller-supplied factory functions (builder path only).

use std::sync::Arc;

use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::validation::{value_kind, CompiledValidator};

/// A caller-supplied validator factory.
///
/// Invoked at compile time with the descriptor's parameter payload and the
/// field's custom message; returns the finished validator directly,
/// bypassing the preset registry.
pub type CustomFactory =
    Arc<dyn Fn(Option<&Value>, Option<&str>) -> CompiledValidator + Send + Sync>;

/// The declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Free-form text.
    String,
    /// A number.
    Numeric,
    /// A sequence of values validated element by element.
    Array,
}

impl FieldType {
    /// Parses a raw type string from a schema document.
    ///
    /// `"string"` and `"numeric"` match exactly; any type containing
    /// `"array"` (case-insensitive) is an array. Everything else is
    /// unrecognized and fails compilation.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "string" => Some(Self::String),
            "numeric" => Some(Self::Numeric),
            _ if raw.to_ascii_lowercase().contains("array") => Some(Self::Array),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Numeric => "numeric",
            Self::Array => "array",
        }
    }
}

/// One validator descriptor, classified at schema-load time.
#[derive(Clone)]
pub enum ValidatorSpec {
    /// The field must hold a non-empty value.
    Required,
    /// A preset looked up in the registry by name, with an optional
    /// parameter payload.
    Named {
        /// Registry key.
        name: String,
        /// Parameter payload handed to the preset factory.
        params: Option<Value>,
    },
    /// A caller-supplied factory invoked directly at compile time.
    Custom {
        /// The factory.
        factory: CustomFactory,
        /// Parameter payload handed to the factory.
        params: Option<Value>,
    },
}

impl ValidatorSpec {
    /// Creates a named preset descriptor with no parameters.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            params: None,
        }
    }

    /// Creates a named preset descriptor carrying a parameter payload.
    pub fn with_params(name: impl Into<String>, params: Value) -> Self {
        Self::Named {
            name: name.into(),
            params: Some(params),
        }
    }

    /// Creates a descriptor around a caller-supplied factory.
    pub fn custom<F>(factory: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&str>) -> CompiledValidator + Send + Sync + 'static,
    {
        Self::Custom {
            factory: Arc::new(factory),
            params: None,
        }
    }

    /// Creates a descriptor around a caller-supplied factory, handing it a
    /// parameter payload at compile time.
    pub fn custom_with_params<F>(factory: F, params: Value) -> Self
    where
        F: Fn(Option<&Value>, Option<&str>) -> CompiledValidator + Send + Sync + 'static,
    {
        Self::Custom {
            factory: Arc::new(factory),
            params: Some(params),
        }
    }
}

impl std::fmt::Debug for ValidatorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => f.write_str("Required"),
            Self::Named { name, params } => f
                .debug_struct("Named")
                .field("name", name)
                .field("params", params)
                .finish(),
            Self::Custom { params, .. } => f
                .debug_struct("Custom")
                .field("params", params)
                .finish_non_exhaustive(),
        }
    }
}

/// One schema entry: a field's type, default message, and validators.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name, unique within the schema.
    pub name: String,
    /// Declared type.
    pub field_type: FieldType,
    /// Custom error text applied to every validator on this field. Presets
    /// fall back to their own default message when this is `None`.
    pub message: Option<String>,
    /// Ordered validator descriptors.
    pub validators: Vec<ValidatorSpec>,
}

impl FieldSpec {
    /// Creates a field spec with no validators.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            message: None,
            validators: Vec::new(),
        }
    }

    /// Sets the custom error message for this field.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Marks the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.validators.push(ValidatorSpec::Required);
        self
    }

    /// Appends a validator descriptor.
    #[must_use]
    pub fn validator(mut self, spec: ValidatorSpec) -> Self {
        self.validators.push(spec);
        self
    }
}

/// An ordered collection of field specs.
///
/// Field order is meaningful: it is the order inputs are projected in.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field spec.
    #[must_use]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Returns the field specs in declared order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses a schema from its JSON text form.
    pub fn from_json(raw: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(raw)?;
        Self::from_value(&document)
    }

    /// Parses a schema from an already-decoded JSON document.
    ///
    /// The document must be an object mapping field names to field specs;
    /// key order is preserved as the schema's declared order.
    pub fn from_value(document: &Value) -> Result<Self> {
        let Some(map) = document.as_object() else {
            return Err(SchemaError::InvalidDocument(value_kind(document)));
        };

        let mut schema = Self::new();
        for (name, spec) in map {
            schema.fields.push(parse_field(name, spec)?);
        }
        Ok(schema)
    }
}

/// Parses one field spec entry.
fn parse_field(name: &str, spec: &Value) -> Result<FieldSpec> {
    if name.is_empty() {
        return Err(SchemaError::EmptyFieldName);
    }

    let Some(map) = spec.as_object() else {
        return Err(SchemaError::InvalidFieldSpec {
            field: name.to_string(),
            detail: format!("expected an object, got {}", value_kind(spec)),
        });
    };

    let field_type = match map.get("type") {
        None | Some(Value::Null) => {
            return Err(SchemaError::MissingFieldType {
                field: name.to_string(),
            });
        }
        Some(Value::String(raw)) => {
            FieldType::parse(raw).ok_or_else(|| SchemaError::UnknownFieldType {
                field: name.to_string(),
                type_name: raw.clone(),
            })?
        }
        Some(other) => {
            return Err(SchemaError::InvalidFieldSpec {
                field: name.to_string(),
                detail: format!("type must be a string, got {}", value_kind(other)),
            });
        }
    };

    let message = match map.get("message") {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            return Err(SchemaError::InvalidFieldSpec {
                field: name.to_string(),
                detail: format!("message must be a string, got {}", value_kind(other)),
            });
        }
    };

    // A bare descriptor is shorthand for a one-element list.
    let validators = match map.get("validators") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| parse_descriptor(name, item))
            .collect::<Result<Vec<_>>>()?,
        Some(single) => vec![parse_descriptor(name, single)?],
    };

    Ok(FieldSpec {
        name: name.to_string(),
        field_type,
        message,
        validators,
    })
}

/// Classifies one validator descriptor.
fn parse_descriptor(field: &str, descriptor: &Value) -> Result<ValidatorSpec> {
    match descriptor {
        Value::String(text) => {
            if text.eq_ignore_ascii_case("required") {
                Ok(ValidatorSpec::Required)
            } else {
                Ok(ValidatorSpec::Named {
                    name: text.to_ascii_lowercase(),
                    params: None,
                })
            }
        }
        Value::Object(map) => match map.iter().next() {
            Some((key, payload)) if map.len() == 1 => {
                // Object keys are matched as written; only the exact key
                // "required" sets the flag, and its payload is not consulted.
                if key == "required" {
                    Ok(ValidatorSpec::Required)
                } else {
                    Ok(ValidatorSpec::Named {
                        name: key.clone(),
                        params: Some(payload.clone()),
                    })
                }
            }
            _ => Err(SchemaError::UnsupportedDescriptor {
                field: field.to_string(),
                detail: format!("expected an object with exactly one key, got {}", map.len()),
            }),
        },
        other => Err(SchemaError::UnsupportedDescriptor {
            field: field.to_string(),
            detail: format!("{} is not a validator descriptor", value_kind(other)),
        }),
    }
}
