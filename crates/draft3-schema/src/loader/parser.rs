//! Document parsing for JSON and YAML sources
//!
//! Copyright (c) 2025 Draft3 Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Supported file formats for document parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        [Format::Yaml, Format::Json]
            .into_iter()
            .find(|format| format.extensions().contains(&extension.as_str()))
            .ok_or_else(|| LoaderError::unsupported_format(path.to_path_buf()))
    }

    /// Get file extensions for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Yaml => &["yaml", "yml"],
            Format::Json => &["json"],
        }
    }
}

/// Decodes schema and data documents into [`serde_json::Value`] trees.
///
/// Object key order is preserved, which keeps declared property order
/// stable for the validator.
#[derive(Debug, Default)]
pub struct DocumentParser;

impl DocumentParser {
    /// Create a new document parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a file, detecting format from extension
    pub fn parse_file(&self, path: &Path) -> LoaderResult<Value> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;
        debug!(path = %path.display(), bytes = content.len(), ?format, "Read document");

        self.parse_content(&content, format, path)
    }

    /// Parse content with explicit format
    pub fn parse_content(&self, content: &str, format: Format, path: &Path) -> LoaderResult<Value> {
        match format {
            Format::Yaml => self.parse_yaml(content, path),
            Format::Json => self.parse_json(content, path),
        }
    }

    /// Parse YAML content
    pub fn parse_yaml(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| LoaderError::yaml_parse_error(path.to_path_buf(), e))?;

        // Convert to JSON Value for consistent handling
        serde_json::to_value(yaml_value)
            .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        serde_json::from_str(content).map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }

    /// Parse content of unknown format: the extension's format first, then
    /// JSON, then YAML.
    pub fn parse_with_fallback(&self, content: &str, path: &Path) -> LoaderResult<(Value, Format)> {
        if let Ok(format) = Format::from_path(path) {
            if let Ok(value) = self.parse_content(content, format, path) {
                return Ok((value, format));
            }
        }

        // Try JSON first (stricter format)
        if let Ok(value) = self.parse_json(content, path) {
            return Ok((value, Format::Json));
        }

        if let Ok(value) = self.parse_yaml(content, path) {
            return Ok((value, Format::Yaml));
        }

        Err(LoaderError::unsupported_format(path.to_path_buf()))
    }
}

/// Read and decode a document from disk
pub fn load_document(path: &Path) -> LoaderResult<Value> {
    DocumentParser::new().parse_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(Path::new("s.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("s.YAML")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("s.yml")).unwrap(), Format::Yaml);
        assert!(Format::from_path(Path::new("s.txt")).is_err());
        assert!(Format::from_path(Path::new("schema")).is_err());
        assert_eq!(Format::Yaml.extensions(), &["yaml", "yml"]);
    }

    #[test]
    fn test_parse_json_preserves_key_order() {
        let parser = DocumentParser::new();
        let value = parser
            .parse_json(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#, Path::new("x.json"))
            .unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_yaml() {
        let parser = DocumentParser::new();
        let value = parser
            .parse_yaml("type: object\nproperties:\n  name:\n    type: string\n", Path::new("x.yaml"))
            .unwrap();
        assert_eq!(
            value,
            json!({"type": "object", "properties": {"name": {"type": "string"}}})
        );
    }

    #[test]
    fn test_parse_with_fallback() {
        let parser = DocumentParser::new();
        let (value, format) = parser
            .parse_with_fallback(r#"{"a": 1}"#, Path::new("noext"))
            .unwrap();
        assert_eq!(format, Format::Json);
        assert_eq!(value, json!({"a": 1}));

        let (_, format) = parser.parse_with_fallback("a: 1", Path::new("noext")).unwrap();
        assert_eq!(format, Format::Yaml);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"type": "string"}}"#).unwrap();

        let value = load_document(file.path()).unwrap();
        assert_eq!(value, json!({"type": "string"}));
    }

    #[test]
    fn test_parse_file_reports_decode_errors() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{not json").unwrap();

        let err = load_document(file.path()).unwrap_err();
        assert!(err.is_parse_error());
        assert_eq!(err.path(), file.path());
    }
}
