//! Declared-type dispatch
//!
//! A schema's `type` keyword is normalised into an ordered list. The first
//! declared type the value matches decides which constraint checker runs;
//! later entries are never consulted once one matches.
//!
//! Copyright (c) 2025 Draft3 Team
//! Licensed under the Apache-2.0 license

use crate::validation::constraints;
use crate::validation::error::{ValidationError, ValidationResult};
use crate::validation::path::EntityPath;
use serde_json::Value;
use tracing::{debug, trace};

/// One entry of a schema's `type` keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    Object,
    String,
    Array,
    Number,
    Integer,
    Boolean,
    Null,
    /// `any`, or a name this engine does not recognise
    Any,
}

impl DeclaredType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "object" => Self::Object,
            "string" => Self::String,
            "array" => Self::Array,
            "number" => Self::Number,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "null" => Self::Null,
            _ => Self::Any,
        }
    }

    /// Whether `value` is of this type
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Object => value.is_object(),
            Self::String => value.is_string(),
            Self::Array => value.is_array(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Null => value.is_null(),
            Self::Any => true,
        }
    }
}

/// Normalise the `type` keyword into the ordered list of declared names.
///
/// A single string becomes a one-element list. Non-string entries of a type
/// array are skipped. A missing or malformed keyword yields an empty list.
pub fn declared_types(schema: &Value) -> Vec<&str> {
    match schema.get("type") {
        Some(Value::String(name)) => vec![name.as_str()],
        Some(Value::Array(names)) => names.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Check `value` against `schema`, recursing into nested structure.
///
/// A schema with no usable `type` accepts any value.
pub fn check_type(value: &Value, schema: &Value, path: &EntityPath) -> ValidationResult<()> {
    let names = declared_types(schema);
    trace!(path = %path, types = ?names, "Checking declared types");

    if names.is_empty() {
        return Ok(());
    }

    for name in &names {
        let declared = DeclaredType::from_name(name);
        if !declared.matches(value) {
            continue;
        }

        trace!(path = %path, matched = name, "Declared type matched");
        return match declared {
            DeclaredType::Object => constraints::check_object(value, schema, path),
            DeclaredType::String => constraints::check_string(value, schema, path),
            DeclaredType::Array => constraints::check_array(value, schema, path),
            DeclaredType::Number | DeclaredType::Integer => {
                constraints::check_number(value, schema, path)
            }
            DeclaredType::Boolean | DeclaredType::Null | DeclaredType::Any => Ok(()),
        };
    }

    debug!(path = %path, types = ?names, "No declared type matched");
    Err(ValidationError::TypeMismatch {
        path: path.to_string(),
        declared_types: names.into_iter().map(str::to_string).collect(),
    })
}
