//! Draft3 Schema - recursive JSON Schema (draft-03 subset) validation
//!
//! This crate validates decoded JSON values against a draft-03 style schema
//! and reports the first violation it finds as a structured error.
//!
//! ## Supported keywords
//!
//! - **`type`**: a name or an ordered list of names among `object`, `string`,
//!   `array`, `number`, `integer`, `boolean`, `null` and `any`. The first
//!   declared type the value matches decides which rules apply.
//! - **Objects**: `properties` (checked in declared order), `required` on the
//!   property's own schema, `additionalProperties: false`
//! - **Numbers**: inclusive `minimum` / `maximum`
//! - **Strings**: `pattern` (unanchored search), `minLength`, `maxLength`
//! - **Arrays**: `minItems`, `maxItems`, `uniqueItems`, and `enum`, which is
//!   checked against every element of the array
//!
//! Bounds equal to zero are treated as unset.
//!
//! ## Quick Start
//!
//! ```rust
//! use draft3_schema::{Validator, ValidationError};
//! use serde_json::json;
//!
//! let validator = Validator::new(json!({
//!     "type": "object",
//!     "properties": {
//!         "name": {"type": "string", "minLength": 2, "maxLength": 3, "required": true}
//!     },
//!     "additionalProperties": false
//! })).unwrap();
//!
//! assert!(validator.validate(&json!({"name": "AB"})).is_ok());
//!
//! match validator.validate(&json!({"name": "AB", "extra": 1})) {
//!     Err(ValidationError::AdditionalProperties { extra_keys, .. }) => {
//!         assert_eq!(extra_keys, ["extra"]);
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! Copyright (c) 2025 Draft3 Team
//! Licensed under the Apache-2.0 license

pub mod loader;
pub mod validation;

// Re-export commonly used types for convenience
pub use loader::{load_document, DocumentParser, Format, LoaderError, LoaderResult};
pub use validation::{
    EntityPath, SchemaError, ValidationConfig, ValidationError, ValidationErrors,
    ValidationHelpers, ValidationResult, Validator, DEFAULT_ROOT_NAME,
};
