//! Entity paths used to locate failures inside a document
//!
//! Copyright (c) 2025 Draft3 Team
//! Licensed under the Apache-2.0 license

use std::fmt;

/// Root name used when the caller does not supply one
pub const DEFAULT_ROOT_NAME: &str = "root";

/// Dotted path to a value in the document, e.g. `root.address.city`.
///
/// Paths are diagnostic only. Each recursive step builds its own child path
/// and hands it down by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityPath(String);

impl EntityPath {
    /// Create a root path with the given name
    pub fn root<N: Into<String>>(name: N) -> Self {
        Self(name.into())
    }

    /// Path of a named property below this one
    pub fn child<P: AsRef<str>>(&self, property: P) -> Self {
        Self(format!("{}.{}", self.0, property.as_ref()))
    }

    /// Path of a positional entry below this one
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for EntityPath {
    fn default() -> Self {
        Self::root(DEFAULT_ROOT_NAME)
    }
}

impl fmt::Display for EntityPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_paths() {
        let root = EntityPath::default();
        assert_eq!(root.as_str(), "root");

        let child = root.child("address");
        assert_eq!(child.as_str(), "root.address");

        let grandchild = child.child("city");
        assert_eq!(grandchild.to_string(), "root.address.city");
    }

    #[test]
    fn test_index_paths() {
        let batch = EntityPath::root("doc").index(2);
        assert_eq!(batch.as_str(), "doc[2]");
        assert_eq!(batch.child("name").into_string(), "doc[2].name");
    }
}
