//! Reconciliation report output
//!
//! The report is a CSV table, one row per outcome record in input order,
//! written as UTF-8 with a byte-order mark so spreadsheet tools detect the
//! encoding (Greek-letter substrate names are common).

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::resolution::OutcomeRecord;

/// Fixed report columns
pub const REPORT_COLUMNS: [&str; 5] = [
    "Biolog name",
    "normalized",
    "BiGG base_id",
    "Metabolite ID",
    "Exchange or status",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode report row: {0}")]
    Csv(#[from] csv::Error),
}

/// Write the report to `path`, replacing any existing file
pub fn write_csv(records: &[OutcomeRecord], path: impl AsRef<Path>) -> Result<(), ReportError> {
    let file = File::create(path.as_ref())?;
    write_csv_to(records, BufWriter::new(file))
}

/// Write the report to any writer
pub fn write_csv_to<W: Write>(records: &[OutcomeRecord], mut out: W) -> Result<(), ReportError> {
    out.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(REPORT_COLUMNS)?;
    for record in records {
        writer.write_record([
            record.original_name.as_str(),
            record.normalized_key.as_str(),
            record.resolved_identifier.as_deref().unwrap_or(""),
            record.metabolite_reference.as_deref().unwrap_or(""),
            record.exchange_or_status().as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Tally of outcomes by terminal status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,
    pub resolved: usize,
    /// status kind -> count, `search failed` causes folded together
    pub unresolved: BTreeMap<&'static str, usize>,
}

impl StatusSummary {
    pub fn from_records(records: &[OutcomeRecord]) -> Self {
        let mut summary = StatusSummary {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.status() {
                None => summary.resolved += 1,
                Some(status) => *summary.unresolved.entry(status.kind()).or_default() += 1,
            }
        }
        summary
    }

    pub fn count(&self, kind: &str) -> usize {
        self.unresolved.get(kind).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::ResolutionStatus;

    fn records() -> Vec<OutcomeRecord> {
        vec![
            OutcomeRecord {
                original_name: "D-Glucose".to_string(),
                normalized_key: "d_glucose".to_string(),
                resolved_identifier: Some("glc".to_string()),
                metabolite_reference: Some("glc_e".to_string()),
                exchange: Ok("EX_glc_e".to_string()),
            },
            OutcomeRecord {
                original_name: "Unknown Compound X".to_string(),
                normalized_key: "unknown_compound_x".to_string(),
                resolved_identifier: None,
                metabolite_reference: None,
                exchange: Err(ResolutionStatus::NotFound),
            },
            OutcomeRecord {
                original_name: "Tween 20, mixed".to_string(),
                normalized_key: "tween_20_mixed".to_string(),
                resolved_identifier: None,
                metabolite_reference: None,
                exchange: Err(ResolutionStatus::SearchFailed("timeout".to_string())),
            },
        ]
    }

    #[test]
    fn test_report_has_bom_header_and_rows() {
        let mut buf = Vec::new();
        write_csv_to(&records(), &mut buf).unwrap();

        assert!(buf.starts_with(UTF8_BOM));
        let text = String::from_utf8(buf[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Biolog name,normalized,BiGG base_id,Metabolite ID,Exchange or status",
                "D-Glucose,d_glucose,glc,glc_e,EX_glc_e",
                "Unknown Compound X,unknown_compound_x,,,not found",
                "\"Tween 20, mixed\",tween_20_mixed,,,search failed: timeout",
            ]
        );
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pm1_mapping_results.csv");
        write_csv(&records(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));

        let mut reader = csv::Reader::from_reader(&bytes[UTF8_BOM.len()..]);
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(headers, REPORT_COLUMNS);
        assert_eq!(reader.records().count(), 3);
    }

    #[test]
    fn test_status_summary() {
        let summary = StatusSummary::from_records(&records());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.resolved, 1);
        assert_eq!(summary.count("not found"), 1);
        assert_eq!(summary.count("search failed"), 1);
        assert_eq!(summary.count("exchange missing"), 0);
    }
}
