//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod check_schema;
mod completions;
mod validate;

pub use check_schema::handle_check_schema;
pub use completions::handle_completions;
pub use validate::handle_validate;

use crate::error::{Error, Result};
use std::path::Path;

/// Fail with `FileNotFound` before handing a path to the loader
fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        tracing::error!("File not found: {}", path.display());
        Err(Error::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}
