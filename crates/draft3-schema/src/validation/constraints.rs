//! Per-type constraint checks
//!
//! Each checker runs only after [`check_type`] has matched the value to the
//! corresponding declared type. Checks run in a fixed order and the first
//! violation is returned.
//!
//! Copyright (c) 2025 Draft3 Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::ValidationHelpers;
use crate::validation::error::{ValidationError, ValidationResult};
use crate::validation::path::EntityPath;
use crate::validation::types::check_type;
use fancy_regex::Regex;
use serde_json::{Number, Value};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Walk the declared `properties` in schema order, then apply
/// `additionalProperties: false`.
pub fn check_object(value: &Value, schema: &Value, path: &EntityPath) -> ValidationResult<()> {
    let Some(object) = value.as_object() else {
        return Ok(());
    };
    let properties = schema.get("properties").and_then(Value::as_object);

    if let Some(properties) = properties {
        for (name, property_schema) in properties {
            match object.get(name) {
                Some(child) => check_type(child, property_schema, &path.child(name))?,
                None if ValidationHelpers::flag(property_schema, "required") => {
                    debug!(path = %path, property = %name, "Required property missing");
                    return Err(ValidationError::MissingRequired {
                        path: path.to_string(),
                        property: name.clone(),
                    });
                }
                None => trace!(path = %path, property = %name, "Optional property absent"),
            }
        }
    }

    if matches!(schema.get("additionalProperties"), Some(Value::Bool(false))) {
        let extra_keys: Vec<String> = object
            .keys()
            .filter(|key| !properties.is_some_and(|declared| declared.contains_key(*key)))
            .cloned()
            .collect();

        if !extra_keys.is_empty() {
            return Err(ValidationError::AdditionalProperties {
                path: path.to_string(),
                extra_keys,
            });
        }
    }

    Ok(())
}

/// `minimum` then `maximum`, both inclusive. Shared by `number` and `integer`.
pub fn check_number(value: &Value, schema: &Value, path: &EntityPath) -> ValidationResult<()> {
    let Value::Number(actual) = value else {
        return Ok(());
    };

    if let Some(minimum) = ValidationHelpers::nonzero_bound(schema, "minimum") {
        if compare_numbers(actual, minimum) == Some(Ordering::Less) {
            return Err(ValidationError::BelowMinimum {
                path: path.to_string(),
                minimum: minimum.clone(),
            });
        }
    }

    if let Some(maximum) = ValidationHelpers::nonzero_bound(schema, "maximum") {
        if compare_numbers(actual, maximum) == Some(Ordering::Greater) {
            return Err(ValidationError::AboveMaximum {
                path: path.to_string(),
                maximum: maximum.clone(),
            });
        }
    }

    Ok(())
}

/// `pattern`, then `minLength`, then `maxLength`. Lengths count characters.
pub fn check_string(value: &Value, schema: &Value, path: &EntityPath) -> ValidationResult<()> {
    let Some(text) = value.as_str() else {
        return Ok(());
    };

    if let Some(pattern) = schema.get("pattern").and_then(Value::as_str) {
        if !pattern.is_empty() {
            let invalid = |reason: String| ValidationError::InvalidPattern {
                path: path.to_string(),
                pattern: pattern.to_string(),
                reason,
            };

            // Look-around and backreferences are allowed, so matching can fail at runtime
            let regex = Regex::new(pattern).map_err(|e| invalid(e.to_string()))?;
            if !regex.is_match(text).map_err(|e| invalid(e.to_string()))? {
                return Err(ValidationError::PatternMismatch {
                    path: path.to_string(),
                    pattern: pattern.to_string(),
                });
            }
        }
    }

    let length = text.chars().count();

    if let Some(min_length) = ValidationHelpers::nonzero_bound(schema, "minLength") {
        if below(length, min_length) {
            return Err(ValidationError::TooShort {
                path: path.to_string(),
                min_length: min_length.clone(),
            });
        }
    }

    if let Some(max_length) = ValidationHelpers::nonzero_bound(schema, "maxLength") {
        if above(length, max_length) {
            return Err(ValidationError::TooLong {
                path: path.to_string(),
                max_length: max_length.clone(),
            });
        }
    }

    Ok(())
}

/// `minItems`, `maxItems`, `uniqueItems`, then `enum` applied to each element.
///
/// Elements are not type-checked; there is no `items` support.
pub fn check_array(value: &Value, schema: &Value, path: &EntityPath) -> ValidationResult<()> {
    let Some(items) = value.as_array() else {
        return Ok(());
    };

    if let Some(min_items) = ValidationHelpers::nonzero_bound(schema, "minItems") {
        if below(items.len(), min_items) {
            return Err(ValidationError::TooFewItems {
                path: path.to_string(),
                min_items: min_items.clone(),
            });
        }
    }

    if let Some(max_items) = ValidationHelpers::nonzero_bound(schema, "maxItems") {
        if above(items.len(), max_items) {
            return Err(ValidationError::TooManyItems {
                path: path.to_string(),
                max_items: max_items.clone(),
            });
        }
    }

    if ValidationHelpers::flag(schema, "uniqueItems") && ValidationHelpers::has_duplicates(items) {
        return Err(ValidationError::DuplicateItems {
            path: path.to_string(),
        });
    }

    if let Some(allowed) = schema.get("enum").and_then(Value::as_array) {
        if !allowed.is_empty() {
            if let Some(item) = items
                .iter()
                .find(|item| !ValidationHelpers::is_member(item, allowed))
            {
                return Err(ValidationError::EnumMismatch {
                    path: path.to_string(),
                    value: item.clone(),
                    allowed: allowed.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Exact for integers of the same sign class, `f64` otherwise
fn compare_numbers(a: &Number, b: &Number) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return Some(x.cmp(&y));
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return Some(x.cmp(&y));
    }
    a.as_f64()?.partial_cmp(&b.as_f64()?)
}

fn below(count: usize, bound: &Number) -> bool {
    bound.as_f64().is_some_and(|b| (count as f64) < b)
}

fn above(count: usize, bound: &Number) -> bool {
    bound.as_f64().is_some_and(|b| (count as f64) > b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root() -> EntityPath {
        EntityPath::default()
    }

    #[test]
    fn test_number_bounds_inclusive() {
        let schema = json!({"type": "number", "minimum": 2, "maximum": 4.5});
        assert!(check_number(&json!(2), &schema, &root()).is_ok());
        assert!(check_number(&json!(4.5), &schema, &root()).is_ok());
        assert_eq!(
            check_number(&json!(1.99), &schema, &root()).unwrap_err().kind(),
            "below_minimum"
        );
        assert_eq!(
            check_number(&json!(5), &schema, &root()).unwrap_err().kind(),
            "above_maximum"
        );
    }

    #[test]
    fn test_minimum_checked_before_maximum() {
        // Inverted bounds: every value violates one of them, minimum is reported
        let schema = json!({"minimum": 10, "maximum": 1});
        assert_eq!(
            check_number(&json!(5), &schema, &root()).unwrap_err().kind(),
            "below_minimum"
        );
    }

    #[test]
    fn test_zero_bounds_are_not_enforced() {
        let schema = json!({"minimum": 0, "maximum": 0});
        assert!(check_number(&json!(-7), &schema, &root()).is_ok());
        assert!(check_number(&json!(7), &schema, &root()).is_ok());
        assert!(check_number(&json!(0), &schema, &root()).is_ok());

        let schema = json!({"minLength": 0, "maxLength": 0});
        assert!(check_string(&json!("anything"), &schema, &root()).is_ok());

        let schema = json!({"minItems": 0, "maxItems": 0});
        assert!(check_array(&json!([1, 2, 3]), &schema, &root()).is_ok());
    }

    #[test]
    fn test_large_integers_compare_exactly() {
        let schema = json!({"maximum": 9007199254740993u64});
        assert!(check_number(&json!(9007199254740993u64), &schema, &root()).is_ok());
        assert!(check_number(&json!(9007199254740994u64), &schema, &root()).is_err());
    }

    #[test]
    fn test_pattern_is_unanchored() {
        let schema = json!({"pattern": "[0-9]+"});
        assert!(check_string(&json!("abc123def"), &schema, &root()).is_ok());
        let err = check_string(&json!("abcdef"), &schema, &root()).unwrap_err();
        assert_eq!(err.to_string(), "String does not match pattern for [root]");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let schema = json!({"pattern": "(unclosed"});
        let err = check_string(&json!("x"), &schema, &root()).unwrap_err();
        assert_eq!(err.kind(), "invalid_pattern");
    }

    #[test]
    fn test_lookahead_pattern() {
        let schema = json!({"pattern": "^(?=a)"});
        assert!(check_string(&json!("abc"), &schema, &root()).is_ok());
        let err = check_string(&json!("bca"), &schema, &root()).unwrap_err();
        assert_eq!(err.kind(), "pattern_mismatch");
    }

    #[test]
    fn test_backreference_pattern() {
        let schema = json!({"pattern": "(\\w)\\1"});
        assert!(check_string(&json!("book"), &schema, &root()).is_ok());
        assert!(check_string(&json!("bike"), &schema, &root()).is_err());
    }

    #[test]
    fn test_string_checks_order() {
        let schema = json!({"pattern": "^z", "minLength": 5});
        assert_eq!(
            check_string(&json!("ab"), &schema, &root()).unwrap_err().kind(),
            "pattern_mismatch"
        );

        let schema = json!({"minLength": 3, "maxLength": 1});
        assert_eq!(
            check_string(&json!("ab"), &schema, &root()).unwrap_err().kind(),
            "too_short"
        );
    }

    #[test]
    fn test_string_length_counts_characters() {
        let schema = json!({"maxLength": 3});
        assert!(check_string(&json!("äöü"), &schema, &root()).is_ok());
        let err = check_string(&json!("äöüß"), &schema, &root()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "String too long for [root], maximum length is [3]"
        );
    }

    #[test]
    fn test_array_checks_order() {
        let schema = json!({"minItems": 3, "uniqueItems": true});
        assert_eq!(
            check_array(&json!(["a", "a"]), &schema, &root()).unwrap_err().kind(),
            "too_few_items"
        );

        let schema = json!({"uniqueItems": true, "enum": ["a"]});
        assert_eq!(
            check_array(&json!(["b", "b"]), &schema, &root()).unwrap_err().kind(),
            "duplicate_items"
        );
    }

    #[test]
    fn test_enum_applies_to_each_element() {
        let schema = json!({"enum": ["foo", "bar"]});
        assert!(check_array(&json!([]), &schema, &root()).is_ok());
        assert!(check_array(&json!(["bar", "bar", "foo"]), &schema, &root()).is_ok());

        let err = check_array(&json!(["foo", "blah", "nope"]), &schema, &root()).unwrap_err();
        match err {
            ValidationError::EnumMismatch { value, .. } => assert_eq!(value, json!("blah")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_enum_is_ignored() {
        let schema = json!({"enum": []});
        assert!(check_array(&json!(["anything"]), &schema, &root()).is_ok());
    }

    #[test]
    fn test_additional_properties_listed_in_value_order() {
        let schema = json!({
            "properties": {"a": {"type": "string"}},
            "additionalProperties": false
        });
        let err = check_object(&json!({"z": 1, "a": "x", "b": 2}), &schema, &root()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::AdditionalProperties {
                path: "root".to_string(),
                extra_keys: vec!["z".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn test_additional_properties_without_declared_properties() {
        let schema = json!({"additionalProperties": false});
        assert!(check_object(&json!({}), &schema, &root()).is_ok());
        assert!(check_object(&json!({"x": 1}), &schema, &root()).is_err());
    }

    #[test]
    fn test_declared_property_errors_precede_additional_properties() {
        let schema = json!({
            "properties": {"name": {"type": "string", "required": true}},
            "additionalProperties": false
        });
        let err = check_object(&json!({"extra": 1}), &schema, &root()).unwrap_err();
        assert_eq!(err.kind(), "missing_required");
    }
}
