//! Error types for schema construction and document validation
//!
//! Copyright (c) 2025 Draft3 Team
//! Licensed under the Apache-2.0 license

use crate::loader::LoaderError;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use thiserror::Error;

/// Errors raised while building a [`Validator`](crate::Validator).
///
/// These are fatal: the schema has to be fixed and the validator rebuilt.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema document was `null` or an empty object
    #[error("Schema document is empty")]
    Empty,

    /// The schema document root is not a JSON object
    #[error("Schema document must be an object, found {found}")]
    NotAnObject { found: &'static str },

    /// The schema document could not be read or decoded
    #[error("Failed to load schema document: {0}")]
    Load(#[from] LoaderError),
}

/// A single constraint violation found while validating a document.
///
/// Every variant carries the entity path of the failing value plus the data
/// needed to render its message. Validation stops at the first violation, so
/// a call produces at most one of these.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// The value matched none of the declared types
    #[error("Property [{path}] must be one of the following types: [{}]", .declared_types.join(", "))]
    TypeMismatch {
        path: String,
        declared_types: Vec<String>,
    },

    /// A property whose schema declares `required: true` is absent
    #[error("Missing required property [{property}] for [{path}]")]
    MissingRequired { path: String, property: String },

    /// Undeclared keys on an object with `additionalProperties: false`
    #[error("Additional properties [{}] not allowed for property [{path}]", .extra_keys.join(", "))]
    AdditionalProperties {
        path: String,
        extra_keys: Vec<String>,
    },

    #[error("Invalid value for [{path}], minimum is [{minimum}]")]
    BelowMinimum { path: String, minimum: Number },

    #[error("Invalid value for [{path}], maximum is [{maximum}]")]
    AboveMaximum { path: String, maximum: Number },

    #[error("String does not match pattern for [{path}]")]
    PatternMismatch { path: String, pattern: String },

    /// The schema's `pattern` is not a valid regular expression
    #[error("Invalid pattern [{pattern}] for [{path}]: {reason}")]
    InvalidPattern {
        path: String,
        pattern: String,
        reason: String,
    },

    #[error("String too short for [{path}], minimum length is [{min_length}]")]
    TooShort { path: String, min_length: Number },

    #[error("String too long for [{path}], maximum length is [{max_length}]")]
    TooLong { path: String, max_length: Number },

    #[error("Array too short for [{path}], minimum items is [{min_items}]")]
    TooFewItems { path: String, min_items: Number },

    #[error("Array too long for [{path}], maximum items is [{max_items}]")]
    TooManyItems { path: String, max_items: Number },

    #[error("All items in array [{path}] must be unique")]
    DuplicateItems { path: String },

    /// An array element is not a member of the schema's `enum`
    #[error("Invalid value(s) for [{path}], allowable values are [{}]", join_values(.allowed))]
    EnumMismatch {
        path: String,
        value: Value,
        allowed: Vec<Value>,
    },
}

impl ValidationError {
    /// Entity path of the value that failed
    pub fn path(&self) -> &str {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::MissingRequired { path, .. }
            | Self::AdditionalProperties { path, .. }
            | Self::BelowMinimum { path, .. }
            | Self::AboveMaximum { path, .. }
            | Self::PatternMismatch { path, .. }
            | Self::InvalidPattern { path, .. }
            | Self::TooShort { path, .. }
            | Self::TooLong { path, .. }
            | Self::TooFewItems { path, .. }
            | Self::TooManyItems { path, .. }
            | Self::DuplicateItems { path }
            | Self::EnumMismatch { path, .. } => path,
        }
    }

    /// Machine-readable kind, identical to the serialized `kind` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::MissingRequired { .. } => "missing_required",
            Self::AdditionalProperties { .. } => "additional_properties",
            Self::BelowMinimum { .. } => "below_minimum",
            Self::AboveMaximum { .. } => "above_maximum",
            Self::PatternMismatch { .. } => "pattern_mismatch",
            Self::InvalidPattern { .. } => "invalid_pattern",
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::TooFewItems { .. } => "too_few_items",
            Self::TooManyItems { .. } => "too_many_items",
            Self::DuplicateItems { .. } => "duplicate_items",
            Self::EnumMismatch { .. } => "enum_mismatch",
        }
    }
}

/// Render values the way they appear in messages: strings unquoted,
/// everything else as compact JSON.
pub(crate) fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation errors collected across a batch of documents
#[derive(Debug, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// One entry per failing document
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiple validation errors occurred:")?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over the collected errors
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Convert to result - Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}
