//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//! - Command-line arguments, which take precedence over both

use crate::cli::{OutputFormat, ValidateArgs};
use crate::error::{Error, Result};
use clap::ValueEnum;
use draft3_schema::{ValidationConfig, DEFAULT_ROOT_NAME};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validation defaults
    pub validation: ValidationSettings,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Validation defaults applied when the command line does not override them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Name of the document root in error paths
    pub root_name: String,

    /// Stop after the first invalid document
    pub fail_fast: bool,

    /// Stop after this many invalid documents (0 = unlimited)
    pub max_errors: usize,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, json-pretty, yaml)
    pub format: Option<String>,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,

    /// Per-module log levels, e.g. `draft3_schema: trace`
    pub modules: HashMap<String, String>,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            fail_fast: false,
            max_errors: 0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in &Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory
        for name in [".draft3.yaml", ".draft3.json", ".draft3.toml"] {
            paths.push(PathBuf::from(name));
        }

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let draft3_dir = config_dir.join("draft3");
            for name in ["config.yaml", "config.json", "config.toml"] {
                paths.push(draft3_dir.join(name));
            }
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".draft3.yaml"));
            paths.push(home_dir.join(".draft3.json"));
        }

        paths
    }

    /// Resolve the output format: command line first, then config, then human
    pub fn output_format(&self, cli_format: Option<OutputFormat>) -> Result<OutputFormat> {
        if let Some(format) = cli_format {
            return Ok(format);
        }

        match &self.output.format {
            Some(name) => OutputFormat::from_str(name, true)
                .map_err(|_| Error::config(format!("Unknown output format '{}'", name))),
            None => Ok(OutputFormat::Human),
        }
    }

    /// Build the validation settings for a run, letting arguments win
    pub fn validation_config(&self, args: &ValidateArgs) -> ValidationConfig {
        let mut config = ValidationConfig::default().with_root_name(
            args.root_name
                .clone()
                .unwrap_or_else(|| self.validation.root_name.clone()),
        );

        if args.fail_fast || self.validation.fail_fast {
            config = config.with_fail_fast();
        }

        config.with_max_errors(args.max_errors.unwrap_or(self.validation.max_errors))
    }
}
