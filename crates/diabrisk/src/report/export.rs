//! CSV export of patient reports.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DiabriskError, Result};
use crate::indicator::{Indicator, IndicatorValue};

use super::table::{Report, ReportRow};

/// Column headers of the exported CSV.
pub const CSV_HEADERS: [&str; 3] = ["Feature", "Your Value", "Normal Range"];

/// Suffix appended to the patient name to form the download file name.
pub const FILENAME_SUFFIX: &str = "_diabetes_report.csv";

/// Characters that cannot appear in a file name on common platforms.
static UNSAFE_FILENAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[/\\:*?"<>|\p{Cc}]"#).unwrap());

impl Report {
    /// Encode the report as UTF-8 CSV: a header row, then one row per
    /// indicator, each terminated by `\n`.
    ///
    /// "Your Value" is a single numeric column, so every value is written in
    /// float form (`33.0`, `0.627`).
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADERS)?;
        for row in &self.rows {
            writer.write_record([
                row.feature.as_str(),
                row.value.float_text().as_str(),
                row.normal_range.as_str(),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| DiabriskError::Report(format!("Failed to flush CSV: {}", e)))
    }

    /// Read the rows back from a CSV produced by [`Report::to_csv`].
    ///
    /// Values are typed by the indicator each row names.
    pub fn parse_csv(bytes: &[u8]) -> Result<Vec<ReportRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);

        let headers: Vec<&str> = reader.headers()?.iter().collect();
        if headers != CSV_HEADERS {
            return Err(DiabriskError::Report(format!(
                "Unexpected CSV headers {:?}, expected {:?}",
                headers, CSV_HEADERS
            )));
        }

        let mut rows = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record?;
            let (Some(feature), Some(value), Some(normal_range)) =
                (record.get(0), record.get(1), record.get(2))
            else {
                return Err(DiabriskError::Report(format!(
                    "Row {} has {} fields, expected 3",
                    line + 1,
                    record.len()
                )));
            };
            let indicator = Indicator::from_name(feature).ok_or_else(|| {
                DiabriskError::Report(format!("Row {}: unknown feature '{}'", line + 1, feature))
            })?;
            let value = IndicatorValue::parse_as(indicator.kind(), value)
                .map_err(|e| DiabriskError::Report(format!("Row {} ({}): {}", line + 1, feature, e)))?;

            rows.push(ReportRow {
                feature: feature.to_string(),
                value,
                normal_range: normal_range.to_string(),
            });
        }
        Ok(rows)
    }

    /// Download file name for this report.
    pub fn filename(&self) -> String {
        export_filename(&self.patient_name)
    }
}

/// Build the export file name `{name}_diabetes_report.csv`.
///
/// An empty name is accepted and yields `_diabetes_report.csv`. Path
/// separators and other characters that are invalid in file names are
/// replaced with `_`; every other character is kept as typed.
pub fn export_filename(name: &str) -> String {
    let safe = UNSAFE_FILENAME_CHARS.replace_all(name, "_");
    format!("{}{}", safe, FILENAME_SUFFIX)
}
