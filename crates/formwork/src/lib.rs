//! # formwork
//!
//! Declarative form schemas with compiled validation rules and input
//! projection.
//!
//! This crate provides:
//! - Schema parsing from loosely-structured JSON documents
//! - One-time compilation of validator descriptors into a rule table
//! - Projection of the rule table into renderable input descriptors
//! - Snapshot validation with per-field pass/fail and messages
//!
//! ## Quick Start
//!
//! ```rust
//! use formwork::{RuleTable, Schema, ValidatorRegistry};
//! use serde_json::json;
//!
//! let schema = Schema::from_json(
//!     r#"{
//!         "age": { "type": "numeric", "validators": ["required", { "min": 18 }] },
//!         "email": { "type": "string", "validators": "email" }
//!     }"#,
//! )
//! .unwrap();
//!
//! let table = RuleTable::compile(&schema, &ValidatorRegistry::new()).unwrap();
//!
//! // Project the initial inputs, then re-check them after edits.
//! let mut inputs = table.project();
//! inputs[0] = inputs[0].clone().with_value(json!(16));
//! inputs[1] = inputs[1].clone().with_value(json!("user@example.com"));
//!
//! let checked = table.validate(&inputs);
//! assert!(!checked[0].is_valid);
//! assert_eq!(checked[0].error_message, "Value must be at least 18.");
//! assert!(checked[1].is_valid);
//! ```
//!
//! ## Building Schemas in Code
//!
//! ```rust
//! use formwork::{FieldSpec, FieldType, Schema, ValidatorSpec};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field(
//!         FieldSpec::new("age", FieldType::Numeric)
//!             .required()
//!             .validator(ValidatorSpec::with_params("min", json!(18))),
//!     )
//!     .field(FieldSpec::new("bio", FieldType::String).message("Tell us more."));
//! assert_eq!(schema.len(), 2);
//! ```
//!
//! ## Custom Validators
//!
//! Register a preset under your own name, or attach a factory to a single
//! field with [`ValidatorSpec::custom`]:
//!
//! ```rust
//! use formwork::{
//!     CompiledValidator, FieldSpec, FieldType, RuleTable, Schema,
//!     ValidatorRegistry, ValidatorSpec,
//! };
//!
//! let mut registry = ValidatorRegistry::new();
//! registry.register("even", |_, message| {
//!     Ok(CompiledValidator::new(
//!         |value| value.as_i64().is_some_and(|n| n % 2 == 0),
//!         message.unwrap_or("Value must be even."),
//!     ))
//! });
//!
//! let schema = Schema::new().field(
//!     FieldSpec::new("seats", FieldType::Numeric).validator(ValidatorSpec::named("even")),
//! );
//! let table = RuleTable::compile(&schema, &registry).unwrap();
//! assert!(table.rule("seats").is_some());
//! ```

mod error;
mod inputs;
mod label;
pub mod presets;
mod registry;
mod rules;
mod schema;
mod validation;

pub use error::{Result, SchemaError};
pub use inputs::{generate_input_id, InputDescriptor, InputType};
pub use label::create_label;
pub use registry::{PresetFactory, ValidatorRegistry};
pub use rules::{CompiledRule, RuleTable};
pub use schema::{CustomFactory, FieldSpec, FieldType, Schema, ValidatorSpec};
pub use validation::{is_empty_value, CompiledValidator, EMPTY_FIELD_MESSAGE};
