use crate::error::{Error, Result};
use archtally_types::{CountReport, LanguageCount, Totals};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// One row of the tool's JSON output. Every field defaults to zero so a
/// sparse row still deserializes; `nFiles` keeps the tool's spelling.
#[derive(Debug, Deserialize)]
struct CountRow {
    #[serde(rename = "nFiles", default)]
    n_files: u64,
    #[serde(default)]
    blank: u64,
    #[serde(default)]
    comment: u64,
    #[serde(default)]
    code: u64,
}

impl From<CountRow> for Totals {
    fn from(row: CountRow) -> Self {
        Totals {
            files: row.n_files,
            blank: row.blank,
            comment: row.comment,
            code: row.code,
        }
    }
}

/// Parse one tool invocation's JSON output into a validated report.
///
/// The top-level object maps language names to count rows, plus two
/// bookkeeping keys: `header` (tool metadata) and `SUM` (the overall
/// summary). `SUM` is required; without it the target contributes nothing
/// and the run must not pretend otherwise. Rows that are not objects, or
/// objects without a `code` field, are skipped the same way the tool's own
/// consumers skip them. Language order follows the object's key order,
/// which serde_json keeps sorted.
pub fn parse_report(path: &Path, raw: &str) -> Result<CountReport> {
    let value: Value = serde_json::from_str(raw)?;
    let Some(object) = value.as_object() else {
        return Err(Error::MissingSummary {
            path: path.to_path_buf(),
        });
    };

    let summary = object.get("SUM").ok_or_else(|| Error::MissingSummary {
        path: path.to_path_buf(),
    })?;
    let summary: CountRow = serde_json::from_value(summary.clone())?;

    let mut report = CountReport::new(summary.into());
    for (key, row) in object {
        if key == "header" || key == "SUM" {
            continue;
        }
        if !row.is_object() || row.get("code").is_none() {
            continue;
        }
        let row: CountRow = serde_json::from_value(row.clone())?;
        report.languages.push(LanguageCount {
            language: key.clone(),
            totals: row.into(),
        });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn target() -> PathBuf {
        PathBuf::from("services/api")
    }

    #[test]
    fn test_parse_report_reads_summary_and_languages() {
        let raw = r#"{
            "header": {"cloc_version": "1.98", "elapsed_seconds": 0.04},
            "Python": {"nFiles": 3, "blank": 10, "comment": 5, "code": 50},
            "SQL": {"nFiles": 1, "blank": 2, "comment": 0, "code": 30},
            "SUM": {"nFiles": 4, "blank": 12, "comment": 5, "code": 80}
        }"#;
        let report = parse_report(&target(), raw).unwrap();
        assert_eq!(report.summary, Totals::new(4, 12, 5, 80));
        assert_eq!(report.languages.len(), 2);
        assert_eq!(report.languages[0].language, "Python");
        assert_eq!(report.languages[0].totals.code, 50);
        assert_eq!(report.languages[1].language, "SQL");
    }

    #[test]
    fn test_parse_report_requires_summary() {
        let raw = r#"{"header": {}, "Python": {"nFiles": 1, "code": 5}}"#;
        let err = parse_report(&target(), raw).unwrap_err();
        assert!(matches!(err, Error::MissingSummary { .. }));
        assert!(err.to_string().contains("services/api"));
    }

    #[test]
    fn test_parse_report_rejects_non_object_output() {
        let err = parse_report(&target(), "[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::MissingSummary { .. }));
    }

    #[test]
    fn test_parse_report_rejects_invalid_json() {
        let err = parse_report(&target(), "not json at all").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_report_skips_rows_without_code() {
        let raw = r#"{
            "note": "free text",
            "partial": {"nFiles": 9},
            "Rust": {"nFiles": 2, "blank": 4, "comment": 1, "code": 20},
            "SUM": {"nFiles": 2, "blank": 4, "comment": 1, "code": 20}
        }"#;
        let report = parse_report(&target(), raw).unwrap();
        assert_eq!(report.languages.len(), 1);
        assert_eq!(report.languages[0].language, "Rust");
    }

    #[test]
    fn test_parse_report_defaults_missing_fields_to_zero() {
        let raw = r#"{
            "Make": {"code": 7},
            "SUM": {"code": 7}
        }"#;
        let report = parse_report(&target(), raw).unwrap();
        assert_eq!(report.summary, Totals::new(0, 0, 0, 7));
        assert_eq!(report.languages[0].totals.files, 0);
    }

    #[test]
    fn test_parse_report_empty_summary_is_valid() {
        let raw = r#"{"SUM": {"nFiles": 0, "blank": 0, "comment": 0, "code": 0}}"#;
        let report = parse_report(&target(), raw).unwrap();
        assert!(report.summary.is_zero());
        assert!(report.languages.is_empty());
    }
}
