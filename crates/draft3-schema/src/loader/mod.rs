//! Loading of schema and data documents from disk
//!
//! The validator itself works on already-decoded [`serde_json::Value`]
//! trees. This module is the collaborator that reads files and decodes
//! JSON or YAML into those trees.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use draft3_schema::loader::load_document;
//! use std::path::Path;
//!
//! let schema = load_document(Path::new("person.schema.json"))?;
//! println!("Loaded schema: {}", serde_json::to_string_pretty(&schema)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Draft3 Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;

pub use error::{LoaderError, LoaderResult};
pub use parser::{load_document, DocumentParser, Format};
