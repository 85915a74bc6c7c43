// Tests for report formatting and the output writer
//
// These tests capture writer output in memory and check the human and
// machine renderings of validation reports and schema summaries.

use super::*;
use draft3_schema::EntityPath;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory sink shared between the writer and the test
#[derive(Clone, Default)]
struct Captured(Rc<RefCell<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn writer(format: OutputFormat, quiet: bool) -> (OutputWriter, Captured) {
    let captured = Captured::default();
    let writer = OutputWriter::with_writer(format, false, quiet, Box::new(captured.clone()));
    (writer, captured)
}

fn sample_report() -> ValidationReport {
    let mut report = ValidationReport::new(PathBuf::from("schema.json"));
    report.push(DocumentOutcome::valid(PathBuf::from("good.json")));
    report.push(DocumentOutcome::invalid(
        PathBuf::from("bad.json"),
        ValidationError::MissingRequired {
            path: EntityPath::root("root").into_string(),
            property: "name".to_string(),
        },
    ));
    report
}

#[test]
fn test_report_counts() {
    let report = sample_report();
    assert_eq!(report.failures(), 1);
    assert!(!report.is_success());

    let mut clean = ValidationReport::new(PathBuf::from("schema.json"));
    clean.push(DocumentOutcome::valid(PathBuf::from("good.json")));
    assert!(clean.is_success());
}

#[test]
fn test_report_human() {
    let (mut output, captured) = writer(OutputFormat::Human, false);
    output.report(&sample_report()).unwrap();

    assert_eq!(
        captured.text(),
        "✓ good.json\n\
         ✗ bad.json: Missing required property [name] for [root]\n\
         1 of 2 document(s) valid against schema.json\n"
    );
}

#[test]
fn test_report_human_quiet_lists_only_failures() {
    let (mut output, captured) = writer(OutputFormat::Human, true);
    output.report(&sample_report()).unwrap();

    assert_eq!(
        captured.text(),
        "✗ bad.json: Missing required property [name] for [root]\n"
    );
}

#[test]
fn test_report_json() {
    let (mut output, captured) = writer(OutputFormat::Json, true);
    output.report(&sample_report()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(captured.text().trim()).unwrap();
    assert_eq!(parsed["schema"], "schema.json");
    assert_eq!(parsed["documents"][0]["valid"], true);
    assert!(parsed["documents"][0].get("error").is_none());
    assert_eq!(parsed["documents"][1]["valid"], false);
    assert_eq!(parsed["documents"][1]["error"]["kind"], "missing_required");
    assert_eq!(parsed["documents"][1]["error"]["property"], "name");
    assert_eq!(
        parsed["documents"][1]["message"],
        "Missing required property [name] for [root]"
    );
}

#[test]
fn test_report_yaml() {
    let formatted = OutputFormat::Yaml.format_report(&sample_report()).unwrap();
    assert!(formatted.contains("schema: schema.json"));
    assert!(formatted.contains("kind: missing_required"));
}

#[test]
fn test_report_json_pretty_ignores_quiet() {
    let (mut output, captured) = writer(OutputFormat::JsonPretty, true);
    output.report(&sample_report()).unwrap();

    let text = captured.text();
    assert!(text.contains("\n  \"documents\": ["));
    assert!(text.ends_with("}\n"));
}

#[test]
fn test_outcome_lines() {
    let report = sample_report();
    assert_eq!(outcome_line(&report.documents[0]), "✓ good.json");
    assert_eq!(
        outcome_line(&report.documents[1]),
        "✗ bad.json: Missing required property [name] for [root]"
    );
}

#[test]
fn test_schema_summary_human() {
    let summary = SchemaSummary {
        schema: PathBuf::from("schema.yaml"),
        types: vec!["object".to_string()],
        properties: vec!["name".to_string(), "age".to_string()],
        required: vec!["name".to_string()],
        closed: true,
    };

    let formatted = OutputFormat::Human.format_schema_summary(&summary).unwrap();
    assert_eq!(
        formatted,
        "✓ schema.yaml is a usable schema\n  \
         Type: object\n  \
         Properties: name, age\n  \
         Required: name\n  \
         Additional properties: rejected\n"
    );
}

#[test]
fn test_schema_summary_untyped_root() {
    let summary = SchemaSummary {
        schema: PathBuf::from("any.json"),
        types: Vec::new(),
        properties: Vec::new(),
        required: Vec::new(),
        closed: false,
    };

    let formatted = OutputFormat::Human.format_schema_summary(&summary).unwrap();
    assert!(formatted.contains("Type: any"));
    assert!(!formatted.contains("Required"));
}

#[test]
fn test_messages_suppressed_for_machine_formats() {
    let (mut output, captured) = writer(OutputFormat::Json, false);
    output.info("loading").unwrap();
    output.success("done").unwrap();
    output.section("Schema").unwrap();
    assert_eq!(captured.text(), "");
}

#[test]
fn test_plain_messages() {
    let (mut output, captured) = writer(OutputFormat::Human, false);
    output.info("loading").unwrap();
    output.section("Schema").unwrap();
    assert_eq!(captured.text(), "INFO: loading\n\n=== Schema ===\n");
}

#[test]
fn test_no_progress_bar_with_custom_writer() {
    let (output, _) = writer(OutputFormat::Human, false);
    assert!(output.progress_bar(10, "validating").is_none());
}
