//! Error types for schema compilation.

/// Errors raised while turning a raw schema into a rule table.
///
/// All of these are configuration errors: they describe a malformed schema,
/// not a failed validation. Validation outcomes are returned as data on the
/// input descriptors and never as an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema document is not a JSON object.
    #[error("Schema must be an object mapping field names to specs, got {0}")]
    InvalidDocument(&'static str),

    /// A field was declared with an empty name.
    #[error("Field names must be non-empty strings")]
    EmptyFieldName,

    /// The same field name appears more than once.
    #[error("Duplicate field '{0}' in schema")]
    DuplicateField(String),

    /// A field spec has no `type` entry.
    #[error("Field '{field}' is missing a type")]
    MissingFieldType {
        /// The offending field.
        field: String,
    },

    /// A field spec declares a type outside the recognized set.
    #[error("Field '{field}' has unrecognized type '{type_name}'")]
    UnknownFieldType {
        /// The offending field.
        field: String,
        /// The raw type string as written in the schema.
        type_name: String,
    },

    /// A field spec is not shaped like a field spec.
    #[error("Field '{field}' has an invalid spec: {detail}")]
    InvalidFieldSpec {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        detail: String,
    },

    /// A validator descriptor has a shape the compiler does not accept.
    #[error("Field '{field}' has an unsupported validator descriptor: {detail}")]
    UnsupportedDescriptor {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        detail: String,
    },

    /// A validator name has no entry in the registry.
    #[error("Field '{field}' references unknown validator '{name}'")]
    UnknownPreset {
        /// The offending field.
        field: String,
        /// The validator name as looked up.
        name: String,
    },

    /// A preset factory rejected its parameter payload.
    #[error("Validator '{name}' on field '{field}' rejected its parameters: {reason}")]
    InvalidParams {
        /// The offending field.
        field: String,
        /// The validator whose factory failed.
        name: String,
        /// The factory's explanation.
        reason: String,
    },

    /// The schema document could not be parsed as JSON.
    #[error("Failed to parse schema JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
