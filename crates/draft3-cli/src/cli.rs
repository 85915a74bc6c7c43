//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Draft3 CLI - Validate JSON and YAML documents against draft-03 schemas
///
/// Loads a schema document and checks one or more data documents against
/// it, reporting the first violation found in each document.
#[derive(Parser, Debug)]
#[command(
    name = "draft3",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DRAFT3_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results [default: human]
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one or more documents against a schema
    Validate(ValidateArgs),

    /// Check that a schema document can be loaded into a validator
    CheckSchema(CheckSchemaArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Paths to the documents to validate (JSON or YAML)
    #[arg(value_name = "DOCUMENT", required = true, num_args = 1..)]
    pub documents: Vec<PathBuf>,

    /// Name of the document root in error paths [default: root]
    #[arg(long)]
    pub root_name: Option<String>,

    /// Stop after the first invalid document
    #[arg(long)]
    pub fail_fast: bool,

    /// Stop after this many invalid documents
    #[arg(long, value_name = "N")]
    pub max_errors: Option<usize>,
}

/// Arguments for the check-schema command
#[derive(Parser, Debug)]
pub struct CheckSchemaArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Print the loaded schema
    #[arg(long)]
    pub show: bool,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
