//! # Validate Subcommand
//!
//! Reads each document, runs it through the engine, and prints either a
//! human-readable per-file report or one JSON object per file.
//!
//! All named files are processed even after failures so a batch run reports
//! every defective document in one invocation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{json, Value};

use sdj_engine::{ValidationReport, Validator};

/// Arguments for the `sdj validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON documents to validate.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Emit one machine-readable JSON object per file instead of text.
    #[arg(long)]
    pub json: bool,

    /// Maximum permitted nesting depth.
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when all documents are clean, 1 when any document
/// has findings, 2 on operational errors.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let mut validator = Validator::default();
    if let Some(max_depth) = args.max_depth {
        validator = validator.with_max_depth(max_depth);
    }

    let mut had_findings = false;
    let mut had_errors = false;

    for path in &args.files {
        match validate_file(&validator, path) {
            Ok(report) => {
                had_findings |= !report.ok();
                if args.json {
                    print_json(path, &report);
                } else {
                    print_text(path, &report);
                }
            }
            Err(e) => {
                had_errors = true;
                if args.json {
                    println!(
                        "{}",
                        json!({
                            "file": path.display().to_string(),
                            "ok": false,
                            "error": format!("{e:#}"),
                        })
                    );
                } else {
                    println!("ERROR: {} — {e:#}", path.display());
                }
            }
        }
    }

    if had_errors {
        Ok(2)
    } else if had_findings {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn validate_file(validator: &Validator, path: &Path) -> Result<ValidationReport> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    tracing::debug!(file = %path.display(), "validating document");

    let report = validator
        .validate(&document)
        .with_context(|| format!("failed to walk {}", path.display()))?;
    Ok(report)
}

fn print_text(path: &Path, report: &ValidationReport) {
    if report.ok() {
        println!("OK: {}", path.display());
    } else {
        println!(
            "FAIL: {} — {} finding(s)",
            path.display(),
            report.findings().len()
        );
        print!("{report}");
    }
}

fn print_json(path: &Path, report: &ValidationReport) {
    println!("{}", report_payload(path, report));
}

/// The machine-readable per-file payload: `{ file, ok, errors }`. The
/// `errors` key is the wire name consumers rely on; the library's own
/// `Finding` naming stays internal.
fn report_payload(path: &Path, report: &ValidationReport) -> Value {
    json!({
        "file": path.display().to_string(),
        "ok": report.ok(),
        "errors": report.findings(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdj_engine::Validator;

    #[test]
    fn json_payload_keeps_the_errors_key() {
        let doc = json!({
            "title": 42,
            "title_pfsch": {"type": "string"}
        });
        let report = Validator::default().validate(&doc).unwrap();
        let payload = report_payload(Path::new("doc.json"), &report);

        assert_eq!(payload["file"], json!("doc.json"));
        assert_eq!(payload["ok"], json!(false));
        let errors = payload["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["kind"], json!("TypeMismatch"));
        assert_eq!(errors[0]["property"], json!("title"));

        // No stray alias for the wire key.
        assert!(payload.get("findings").is_none());
    }

    #[test]
    fn clean_document_payload_has_empty_errors() {
        let report = Validator::default().validate(&json!({"a": 1})).unwrap();
        let payload = report_payload(Path::new("ok.json"), &report);
        assert_eq!(payload["ok"], json!(true));
        assert_eq!(payload["errors"], json!([]));
    }
}
