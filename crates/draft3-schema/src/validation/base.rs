//! Keyword lookup and value comparison helpers shared by the checkers
//!
//! Copyright (c) 2025 Draft3 Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Number, Value};

/// Helper functions for common validation patterns
pub struct ValidationHelpers;

impl ValidationHelpers {
    /// Look up a numeric bound keyword.
    ///
    /// A bound of zero is reported as unset, the same as a missing or
    /// non-numeric keyword. `minimum: 0` and `maxLength: 0` are therefore
    /// never enforced.
    pub fn nonzero_bound<'a>(schema: &'a Value, keyword: &str) -> Option<&'a Number> {
        match schema.get(keyword) {
            Some(Value::Number(bound)) if bound.as_f64().is_some_and(|b| b != 0.0) => Some(bound),
            _ => None,
        }
    }

    /// True only when the keyword is present and literally `true`
    pub fn flag(schema: &Value, keyword: &str) -> bool {
        matches!(schema.get(keyword), Some(Value::Bool(true)))
    }

    /// Structural equality where numbers compare by numeric value,
    /// so `1` and `1.0` are the same enum member.
    pub fn values_equal(left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Self::numbers_equal(a, b),
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Self::values_equal(x, y))
            }
            (Value::Object(a), Value::Object(b)) => Self::objects_equal(a, b),
            _ => left == right,
        }
    }

    /// True if `value` equals any member of `allowed`
    pub fn is_member(value: &Value, allowed: &[Value]) -> bool {
        allowed.iter().any(|candidate| Self::values_equal(value, candidate))
    }

    /// True if any two items are equal
    pub fn has_duplicates(items: &[Value]) -> bool {
        items
            .iter()
            .enumerate()
            .any(|(i, item)| Self::is_member(item, &items[i + 1..]))
    }

    fn numbers_equal(a: &Number, b: &Number) -> bool {
        if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
            return x == y;
        }
        if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
            return x == y;
        }
        match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    fn objects_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
        a.len() == b.len()
            && a
                .iter()
                .all(|(key, x)| b.get(key).is_some_and(|y| Self::values_equal(x, y)))
    }
}
