//! Rule compilation, input projection and snapshot validation.
//!
//! [`RuleTable::compile`] turns a [`Schema`] into a frozen table of
//! [`CompiledRule`]s, resolving every named descriptor against the registry
//! up front. Compilation is all-or-nothing: the first malformed field aborts
//! it and no partial table is returned. The table is then read-only and can
//! be shared freely; [`RuleTable::project`] derives a fresh input list from
//! it and [`RuleTable::validate`] checks an edited snapshot against it,
//! returning a new snapshot each time.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::inputs::{generate_input_id, InputDescriptor, InputType};
use crate::label::create_label;
use crate::registry::ValidatorRegistry;
use crate::schema::{FieldType, Schema, ValidatorSpec};
use crate::validation::{is_empty_value, CompiledValidator, EMPTY_FIELD_MESSAGE};

/// One field's compiled validation requirements.
#[derive(Debug)]
pub struct CompiledRule {
    name: String,
    field_type: FieldType,
    required: bool,
    validators: Vec<CompiledValidator>,
}

impl CompiledRule {
    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field's declared type.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns whether the field must hold a non-empty value.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the compiled validators in evaluation order.
    pub fn validators(&self) -> &[CompiledValidator] {
        &self.validators
    }
}

/// A compiled schema: one rule per field, in declared order.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<CompiledRule>,
    index: HashMap<String, usize>,
}

impl RuleTable {
    /// Compiles a schema against a preset registry.
    ///
    /// Any number of `required` markers on a field collapse into the rule's
    /// single flag; the remaining descriptors compile into validators in
    /// declared order. Fails on the first field with an empty or duplicate
    /// name, an unknown preset, or a parameter payload its preset rejects.
    pub fn compile(schema: &Schema, registry: &ValidatorRegistry) -> Result<Self> {
        let mut rules: Vec<CompiledRule> = Vec::with_capacity(schema.len());
        let mut index = HashMap::with_capacity(schema.len());

        for spec in schema.fields() {
            if spec.name.is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if index.contains_key(&spec.name) {
                return Err(SchemaError::DuplicateField(spec.name.clone()));
            }

            let message = spec.message.as_deref();
            let mut required = false;
            let mut validators = Vec::new();

            for descriptor in &spec.validators {
                match descriptor {
                    ValidatorSpec::Required => required = true,
                    ValidatorSpec::Named { name, params } => {
                        let factory =
                            registry
                                .get(name)
                                .ok_or_else(|| SchemaError::UnknownPreset {
                                    field: spec.name.clone(),
                                    name: name.clone(),
                                })?;
                        let validator = factory(params.as_ref(), message).map_err(|reason| {
                            SchemaError::InvalidParams {
                                field: spec.name.clone(),
                                name: name.clone(),
                                reason,
                            }
                        })?;
                        validators.push(validator);
                    }
                    ValidatorSpec::Custom { factory, params } => {
                        validators.push(factory(params.as_ref(), message));
                    }
                }
            }

            index.insert(spec.name.clone(), rules.len());
            rules.push(CompiledRule {
                name: spec.name.clone(),
                field_type: spec.field_type,
                required,
                validators,
            });
        }

        debug!(fields = rules.len(), "Compiled schema into rule table");
        Ok(Self { rules, index })
    }

    /// Looks up a rule by field name.
    pub fn rule(&self, name: &str) -> Option<&CompiledRule> {
        self.index.get(name).map(|&position| &self.rules[position])
    }

    /// Returns the rules in declared order.
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Projects the table into a fresh input list, one descriptor per rule
    /// in declared order.
    ///
    /// Every descriptor starts optimistic: default value for its rendered
    /// type, `is_valid` true, empty error message, and a newly generated id.
    pub fn project(&self) -> Vec<InputDescriptor> {
        self.rules.iter().map(project_rule).collect()
    }

    /// Validates an input snapshot, returning a new snapshot with
    /// `is_valid` and `error_message` recomputed per descriptor.
    ///
    /// The input snapshot is left untouched; order and length carry over.
    pub fn validate(&self, inputs: &[InputDescriptor]) -> Vec<InputDescriptor> {
        let outputs: Vec<InputDescriptor> = inputs
            .iter()
            .map(|input| self.validate_input(input))
            .collect();

        let invalid = outputs.iter().filter(|input| !input.is_valid).count();
        debug!(inputs = outputs.len(), invalid, "Validated input snapshot");
        outputs
    }

    /// Recomputes one descriptor's validity.
    ///
    /// Precedence: a required field with an empty value fails with
    /// [`EMPTY_FIELD_MESSAGE`] before any validator runs; an optional field
    /// with an empty value passes unconditionally. Otherwise validators run
    /// in declared order and the first failure wins; array values run each
    /// validator over every element and fail on the first failing element.
    fn validate_input(&self, input: &InputDescriptor) -> InputDescriptor {
        let mut output = input.clone();
        output.is_valid = true;
        output.error_message.clear();

        // A descriptor naming no rule has nothing to check.
        let Some(rule) = self.rule(&input.name) else {
            return output;
        };

        if is_empty_value(&output.value) {
            if rule.required {
                output.is_valid = false;
                output.error_message = EMPTY_FIELD_MESSAGE.to_string();
            }
            return output;
        }

        for validator in &rule.validators {
            let passed = match &output.value {
                Value::Array(items) => items.iter().all(|item| validator.validate(item)),
                value => validator.validate(value),
            };
            if !passed {
                output.is_valid = false;
                output.error_message = validator.message().to_string();
                break;
            }
        }

        output
    }
}

fn project_rule(rule: &CompiledRule) -> InputDescriptor {
    let input_type = InputType::derive(rule.field_type, &rule.name);
    InputDescriptor {
        id: generate_input_id(),
        name: rule.name.clone(),
        label: create_label(&rule.name),
        input_type,
        value: input_type.default_value(),
        required: rule.required,
        error_message: String::new(),
        is_valid: true,
    }
}
