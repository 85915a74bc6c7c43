//! Schema check command handler

use super::ensure_exists;
use crate::cli::CheckSchemaArgs;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{OutputWriter, SchemaSummary};
use draft3_schema::validation::declared_types;
use draft3_schema::{ValidationHelpers, Validator};
use serde_json::Value;
use tracing::{info, instrument};

/// Handle the check-schema command
#[instrument(skip_all, fields(schema = %args.schema.display()))]
pub fn handle_check_schema(args: CheckSchemaArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("check_schema_command");

    ensure_exists(&args.schema)?;
    let validator = Validator::from_path(&args.schema)?;
    info!("Schema accepted");

    output.schema_summary(&summarize(&args, validator.schema()))?;

    if args.show {
        output.section("Schema")?;
        output.data(validator.schema())?;
    }

    Ok(())
}

fn summarize(args: &CheckSchemaArgs, schema: &Value) -> SchemaSummary {
    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .map(|props| props.iter().collect::<Vec<_>>())
        .unwrap_or_default();

    SchemaSummary {
        schema: args.schema.clone(),
        types: declared_types(schema).into_iter().map(String::from).collect(),
        properties: properties.iter().map(|(name, _)| name.to_string()).collect(),
        required: properties
            .iter()
            .filter(|(_, sub)| ValidationHelpers::flag(sub, "required"))
            .map(|(name, _)| name.to_string())
            .collect(),
        closed: schema.get("additionalProperties") == Some(&Value::Bool(false)),
    }
}
