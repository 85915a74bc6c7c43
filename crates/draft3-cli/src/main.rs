//! Draft3 CLI - Command-line interface for draft-03 schema validation
//!
//! This is the main entry point for the Draft3 CLI application, providing
//! commands for validating JSON and YAML documents against a schema and
//! for checking schema documents.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Load configuration before logging so the file can set the log level
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", error::format_error(&e, cli.use_color()));
            process::exit(e.exit_code());
        }
    };

    // Set up colored output
    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli, &config, use_color) {
        Ok(()) => process::exit(0),
        Err(e) => {
            if !e.already_reported() {
                eprintln!("{}", error::format_error(&e, use_color));
            }
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip_all, fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config, use_color: bool) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = config.output_format(cli.output)?;
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(
        verbosity = cli.verbosity_level(),
        format = ?output.format(),
        "Executing command"
    );

    // Handle the subcommand
    match cli.command {
        Commands::Validate(args) => handlers::handle_validate(args, config, &mut output),
        Commands::CheckSchema(args) => handlers::handle_check_schema(args, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();

    // Verbosity flags first, then the config file, then the environment
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);
    logging_config.merge_with_file(&config.logging, verbosity);
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["draft3", "validate", "schema.json", "doc.json"]);
        assert_eq!(cli.verbosity_level(), 0);

        // Test verbose flag
        let cli = Cli::parse_from(["draft3", "-vv", "validate", "schema.json", "doc.json"]);
        assert_eq!(cli.verbosity_level(), 2);

        // Test quiet flag
        let cli = Cli::parse_from(["draft3", "--quiet", "check-schema", "schema.json"]);
        assert_eq!(cli.verbosity_level(), 0);
        assert!(cli.quiet);
    }

    #[test]
    fn test_output_flag_overrides_config() {
        let cli = Cli::parse_from(["draft3", "-o", "yaml", "check-schema", "schema.json"]);
        let mut config = Config::default();
        config.output.format = Some("json".to_string());

        assert_eq!(
            config.output_format(cli.output).unwrap(),
            cli::OutputFormat::Yaml
        );
    }
}
