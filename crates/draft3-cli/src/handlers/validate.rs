//! Validation command handler

use super::ensure_exists;
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{DocumentOutcome, OutputWriter, ValidationReport};
use draft3_schema::{load_document, ValidationConfig, Validator};
use tracing::{debug, info, instrument, warn};

/// Handle the validate command
#[instrument(skip_all, fields(schema = %args.schema.display(), documents = args.documents.len()))]
pub fn handle_validate(
    args: ValidateArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::with_details(
        "validate_command",
        &format!("schema: {}", args.schema.display()),
    );
    let settings = config.validation_config(&args);
    debug!(?settings, "Resolved validation settings");

    output.info(&format!("Loading schema: {}", args.schema.display()))?;
    ensure_exists(&args.schema)?;
    let validator = Validator::from_path(&args.schema)?;

    let report = validate_documents(&validator, &args, &settings, output)?;
    output.report(&report)?;

    if !report.is_success() {
        let failures = report.failures();
        warn!(failures, "Validation failed");
        return Err(Error::ValidationFailed {
            failures,
            documents: report.documents.len(),
        });
    }

    info!("All documents are valid");
    Ok(())
}

/// Validate each document in order, stopping early when the settings ask to
fn validate_documents(
    validator: &Validator,
    args: &ValidateArgs,
    settings: &ValidationConfig,
    output: &OutputWriter,
) -> Result<ValidationReport> {
    let mut report = ValidationReport::new(args.schema.clone());
    let progress = output.progress_bar(args.documents.len() as u64, "validating");

    for document in &args.documents {
        let _timer = Timer::with_details("validate_document", &document.display().to_string());
        ensure_exists(document)?;
        let value = load_document(document)?;

        let outcome = match validator.validate_named(&value, &settings.root_name) {
            Ok(()) => {
                debug!(document = %document.display(), "Document is valid");
                DocumentOutcome::valid(document.clone())
            }
            Err(error) => {
                info!(document = %document.display(), kind = error.kind(), "Document is invalid");
                DocumentOutcome::invalid(document.clone(), error)
            }
        };
        report.push(outcome);

        if let Some(pb) = &progress {
            pb.inc(1);
        }

        if should_stop(&report, settings) {
            debug!(failures = report.failures(), "Stopping early");
            break;
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(report)
}

fn should_stop(report: &ValidationReport, settings: &ValidationConfig) -> bool {
    let failures = report.failures();
    if failures == 0 {
        return false;
    }
    settings.fail_fast || (settings.max_errors > 0 && failures >= settings.max_errors)
}
