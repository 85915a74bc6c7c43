//! Validation of decoded documents against draft-03 style schemas
//!
//! The engine is a pair of mutually recursive pieces:
//!
//! - **Type dispatch** ([`types`]): picks the first declared type the value
//!   matches and hands it to that type's checker.
//! - **Constraint checks** ([`constraints`]): range, length, pattern,
//!   cardinality, uniqueness and enum rules; object checks recurse back into
//!   type dispatch for every declared property.
//!
//! Validation is fail-fast: the first violation found (depth-first, in
//! declared property order) is returned and nothing else is collected.
//!
//! Copyright (c) 2025 Draft3 Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod constraints;
pub mod error;
pub mod path;
pub mod types;

pub use base::ValidationHelpers;
pub use error::{SchemaError, ValidationError, ValidationErrors, ValidationResult};
pub use path::{EntityPath, DEFAULT_ROOT_NAME};
pub use types::{check_type, declared_types, DeclaredType};

use crate::loader::load_document;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Validates documents against one immutable schema.
///
/// Construction is the only fallible step that concerns the schema itself.
/// A validator holds no per-call state, so it can be reused and shared
/// across threads freely.
///
/// # Examples
///
/// ```rust
/// use draft3_schema::Validator;
/// use serde_json::json;
///
/// let validator = Validator::new(json!({
///     "type": "object",
///     "properties": {
///         "name": {"type": "string", "minLength": 2, "required": true}
///     }
/// })).unwrap();
///
/// assert!(validator.validate(&json!({"name": "Ada"})).is_ok());
///
/// let err = validator.validate(&json!({})).unwrap_err();
/// assert_eq!(err.to_string(), "Missing required property [name] for [root]");
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Arc<Value>,
}

impl Validator {
    /// Create a validator from an already decoded schema document.
    ///
    /// Fails when the document is `null`, an empty object, or not an object.
    pub fn new(schema: Value) -> Result<Self, SchemaError> {
        match &schema {
            Value::Null => return Err(SchemaError::Empty),
            Value::Object(map) if map.is_empty() => return Err(SchemaError::Empty),
            Value::Object(_) => {}
            other => {
                return Err(SchemaError::NotAnObject {
                    found: value_kind(other),
                })
            }
        }

        debug!(types = ?declared_types(&schema), "Schema accepted");
        Ok(Self {
            schema: Arc::new(schema),
        })
    }

    /// Load a schema document from a JSON or YAML file
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let schema = load_document(path)?;
        info!(path = %path.display(), "Loaded schema document");
        Self::new(schema)
    }

    /// Get the loaded schema
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Validate `value` with the default root name `root`
    pub fn validate(&self, value: &Value) -> ValidationResult<()> {
        self.validate_named(value, DEFAULT_ROOT_NAME)
    }

    /// Validate `value`, naming its root `root_name` in error paths
    pub fn validate_named(&self, value: &Value, root_name: &str) -> ValidationResult<()> {
        self.validate_at(value, &EntityPath::root(root_name))
    }

    /// Validate `value` located at `path`
    pub fn validate_at(&self, value: &Value, path: &EntityPath) -> ValidationResult<()> {
        let result = check_type(value, &self.schema, path);
        match &result {
            Ok(()) => debug!(path = %path, "Document is valid"),
            Err(error) => debug!(path = %path, kind = error.kind(), %error, "Document is invalid"),
        }
        result
    }

    /// Validate several documents, collecting at most one error per document.
    ///
    /// Document `i` is rooted at `{root_name}[i]`. Collection stops after the
    /// first failure in fail-fast mode, or once `max_errors` is reached.
    pub fn validate_batch(
        &self,
        values: &[Value],
        config: &ValidationConfig,
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let root = EntityPath::root(config.root_name.as_str());

        for (i, value) in values.iter().enumerate() {
            match self.validate_at(value, &root.index(i)) {
                Ok(()) => continue,
                Err(error) => {
                    errors.add(error);

                    if config.fail_fast {
                        break;
                    }

                    if config.max_errors > 0 && errors.len() >= config.max_errors {
                        break;
                    }
                }
            }
        }

        info!(
            documents = values.len(),
            failures = errors.len(),
            "Batch validation finished"
        );
        errors.into_result()
    }
}

/// Validation configuration for batch operations
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Whether to stop on the first failing document
    pub fail_fast: bool,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
    /// Name used as the root of every entity path
    pub root_name: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            max_errors: 0,
            root_name: DEFAULT_ROOT_NAME.to_string(),
        }
    }
}

impl ValidationConfig {
    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Set the root name used in entity paths
    pub fn with_root_name(mut self, root_name: impl Into<String>) -> Self {
        self.root_name = root_name.into();
        self
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
