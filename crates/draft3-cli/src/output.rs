//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with specialized
//! support for validation reports and progress indicators.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use draft3_schema::ValidationError;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, trace};

/// Outcome of validating one document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    /// Path of the validated document
    pub document: PathBuf,
    /// Whether the document satisfied the schema
    pub valid: bool,
    /// Rendered error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Structured error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl DocumentOutcome {
    pub fn valid(document: PathBuf) -> Self {
        Self {
            document,
            valid: true,
            message: None,
            error: None,
        }
    }

    pub fn invalid(document: PathBuf, error: ValidationError) -> Self {
        Self {
            document,
            valid: false,
            message: Some(error.to_string()),
            error: Some(error),
        }
    }
}

/// Results of a `validate` run
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub schema: PathBuf,
    pub documents: Vec<DocumentOutcome>,
}

impl ValidationReport {
    pub fn new(schema: PathBuf) -> Self {
        Self {
            schema,
            documents: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: DocumentOutcome) {
        self.documents.push(outcome);
    }

    /// Number of documents that failed validation
    pub fn failures(&self) -> usize {
        self.documents.iter().filter(|d| !d.valid).count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }
}

/// Summary of a schema document reported by `check-schema`
#[derive(Debug, Clone, Serialize)]
pub struct SchemaSummary {
    pub schema: PathBuf,
    /// Declared root types, empty when the root accepts any type
    pub types: Vec<String>,
    pub properties: Vec<String>,
    pub required: Vec<String>,
    pub closed: bool,
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a validation report for machine consumption
    fn format_report(&self, report: &ValidationReport) -> Result<String>;

    /// Format a schema summary
    fn format_schema_summary(&self, summary: &SchemaSummary) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_report(&self, report: &ValidationReport) -> Result<String> {
        self.format(report)
    }

    fn format_schema_summary(&self, summary: &SchemaSummary) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_schema_summary_human(summary)),
            _ => self.format(summary),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: !quiet && io::stderr().is_terminal(),
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            show_progress: false, // No progress bars with custom writers
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");
        self.emit(&formatted)
    }

    /// Write a validation report.
    ///
    /// Machine formats are always written, even in quiet mode, so that
    /// scripts get a result. Human output only lists failures when quiet.
    pub fn report(&mut self, report: &ValidationReport) -> Result<()> {
        if self.format != OutputFormat::Human {
            let formatted = self.format.format_report(report)?;
            return self.emit(&formatted);
        }

        for outcome in &report.documents {
            let line = outcome_line(outcome);
            if outcome.valid {
                self.success(&line)?;
            } else if self.use_color {
                self.writeln(&line.red().to_string())?;
            } else {
                self.writeln(&line)?;
            }
        }

        if !self.quiet {
            self.writeln(&summary_line(report))?;
        }
        Ok(())
    }

    /// Write a schema summary
    pub fn schema_summary(&mut self, summary: &SchemaSummary) -> Result<()> {
        if self.quiet && self.format == OutputFormat::Human {
            return Ok(());
        }
        let formatted = self.format.format_schema_summary(summary)?;
        self.emit(&formatted)
    }

    /// Create a progress bar for long operations
    pub fn progress_bar(&self, length: u64, message: &str) -> Option<ProgressBar> {
        if !self.show_progress || length < 2 {
            return None;
        }

        let pb = ProgressBar::new(length);
        pb.set_style(default_progress_style());
        pb.set_message(message.to_string());
        Some(pb)
    }

    fn emit(&mut self, formatted: &str) -> Result<()> {
        if formatted.ends_with('\n') {
            self.write(formatted)
        } else {
            self.writeln(formatted)
        }
    }
}

/// Helper function to create a progress bar style
pub fn default_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
}

fn summary_line(report: &ValidationReport) -> String {
    let total = report.documents.len();
    format!(
        "{} of {} document(s) valid against {}",
        total - report.failures(),
        total,
        report.schema.display()
    )
}

/// One human-readable line for a document outcome
fn outcome_line(outcome: &DocumentOutcome) -> String {
    match &outcome.message {
        Some(message) => format!("✗ {}: {}", outcome.document.display(), message),
        None => format!("✓ {}", outcome.document.display()),
    }
}

fn format_schema_summary_human(summary: &SchemaSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("✓ {} is a usable schema\n", summary.schema.display()));
    if summary.types.is_empty() {
        output.push_str("  Type: any\n");
    } else {
        output.push_str(&format!("  Type: {}\n", summary.types.join(", ")));
    }

    if !summary.properties.is_empty() {
        output.push_str(&format!("  Properties: {}\n", summary.properties.join(", ")));
    }
    if !summary.required.is_empty() {
        output.push_str(&format!("  Required: {}\n", summary.required.join(", ")));
    }
    if summary.closed {
        output.push_str("  Additional properties: rejected\n");
    }

    output
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
