//! Rendering of replay records and summaries.

use std::io::Write;

use serde_json::json;

use crate::config::ReportFormat;
use crate::runner::{ReplayOutcome, ReplayRecord, ReplaySummary};
use crate::ReplayError;

/// Write one record as a single line.
///
/// # Errors
/// Returns [`ReplayError::Report`] if JSON encoding fails or
/// [`ReplayError::Output`] if the sink rejects the write.
pub fn write_record(
    out: &mut dyn Write,
    record: &ReplayRecord,
    format: ReportFormat,
) -> Result<(), ReplayError> {
    match format {
        ReportFormat::Json => writeln!(out, "{}", serde_json::to_string(record)?)?,
        ReportFormat::Text => {
            let detail = match &record.outcome {
                ReplayOutcome::Hit { message } | ReplayOutcome::Crashed { message } => {
                    format!(": {message}")
                }
                _ => String::new(),
            };
            writeln!(
                out,
                "{} {}{} ({} bytes, sha256 {}, {}us)",
                record.path.display(),
                record.outcome.label(),
                detail,
                record.len,
                record.sha256,
                record.elapsed_us,
            )?;
        }
    }
    Ok(())
}

/// Write the closing summary line.
///
/// # Errors
/// Same as [`write_record`].
pub fn write_summary(
    out: &mut dyn Write,
    summary: &ReplaySummary,
    format: ReportFormat,
) -> Result<(), ReplayError> {
    match format {
        ReportFormat::Json => writeln!(out, "{}", json!({ "summary": summary }))?,
        ReportFormat::Text => writeln!(
            out,
            "{} inputs: {} hit, {} parsed, {} no match, {} crashed",
            summary.total, summary.hits, summary.parsed, summary.no_match, summary.crashed
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn record(outcome: ReplayOutcome) -> ReplayRecord {
        ReplayRecord {
            path: PathBuf::from("corpus/a"),
            len: 4,
            sha256: "ab".repeat(32),
            outcome,
            elapsed_us: 7,
        }
    }

    fn render(record: &ReplayRecord, format: ReportFormat) -> String {
        let mut out = Vec::new();
        write_record(&mut out, record, format).expect("write to Vec must succeed");
        String::from_utf8(out).expect("report must be UTF-8")
    }

    #[test]
    fn text_record_shows_outcome_and_message() {
        let line = render(&record(ReplayOutcome::Hit { message: "found int".to_owned() }), ReportFormat::Text);
        assert!(line.starts_with("corpus/a hit: found int (4 bytes"), "got {line}");
        assert!(line.ends_with("7us)\n"), "got {line}");
    }

    #[test]
    fn text_record_without_message_has_no_detail() {
        let line = render(&record(ReplayOutcome::NoMatch), ReportFormat::Text);
        assert!(line.starts_with("corpus/a no_match (4 bytes"), "got {line}");
    }

    #[test]
    fn json_record_is_flat_object() {
        let line = render(&record(ReplayOutcome::Parsed), ReportFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).expect("line must be JSON");
        assert_eq!(value["outcome"], "parsed");
        assert_eq!(value["len"], 4);
        assert_eq!(value["path"], "corpus/a");
        assert_eq!(value["elapsed_us"], 7);
    }

    #[test]
    fn summary_renders_in_both_formats() {
        let summary = ReplaySummary { total: 3, no_match: 1, parsed: 1, hits: 1, crashed: 0 };

        let mut text = Vec::new();
        write_summary(&mut text, &summary, ReportFormat::Text).expect("write must succeed");
        assert_eq!(
            String::from_utf8_lossy(&text),
            "3 inputs: 1 hit, 1 parsed, 1 no match, 0 crashed\n"
        );

        let mut json = Vec::new();
        write_summary(&mut json, &summary, ReportFormat::Json).expect("write must succeed");
        let value: serde_json::Value = serde_json::from_slice(&json).expect("summary must be JSON");
        assert_eq!(value["summary"]["hits"], 1);
        assert_eq!(value["summary"]["total"], 3);
    }
}
