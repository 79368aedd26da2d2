//! Report assembly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::indicator::{DISPLAY_ORDER, Indicator, IndicatorValue};
use crate::input::PatientInput;
use crate::reference::ReferenceTable;

/// One line of the patient report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Display label of the indicator.
    #[serde(rename = "Feature")]
    pub feature: String,
    /// The patient's value.
    #[serde(rename = "Your Value")]
    pub value: IndicatorValue,
    /// Normal reference range.
    #[serde(rename = "Normal Range")]
    pub normal_range: String,
}

impl ReportRow {
    /// The indicator this row describes, if the label is recognised.
    pub fn indicator(&self) -> Option<Indicator> {
        Indicator::from_name(&self.feature)
    }
}

/// Summary table pairing patient values with normal ranges.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Name typed by the user; may be empty.
    pub patient_name: String,
    /// One row per indicator, in display order.
    pub rows: Vec<ReportRow>,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Build a report, one row per indicator in [`DISPLAY_ORDER`].
    pub fn assemble(
        input: &PatientInput,
        reference: &ReferenceTable,
        name: impl Into<String>,
    ) -> Self {
        let rows = DISPLAY_ORDER
            .iter()
            .map(|indicator| ReportRow {
                feature: indicator.label().to_string(),
                value: input.value(*indicator),
                normal_range: reference.range(*indicator).to_string(),
            })
            .collect();

        Self {
            patient_name: name.into(),
            rows,
            generated_at: Utc::now(),
        }
    }

    /// Row for a given indicator.
    pub fn row(&self, indicator: Indicator) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.indicator() == Some(indicator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_display_order() {
        let report = Report::assemble(&PatientInput::default(), ReferenceTable::standard(), "Jane");
        let features: Vec<&str> = report.rows.iter().map(|r| r.feature.as_str()).collect();
        assert_eq!(
            features,
            vec![
                "Age",
                "Pregnancies",
                "Glucose",
                "Blood Pressure",
                "Skin Thickness",
                "Insulin",
                "BMI",
                "Diabetes Pedigree Function",
            ]
        );
        assert_eq!(report.patient_name, "Jane");
    }

    #[test]
    fn test_values_and_ranges_paired() {
        let input = PatientInput {
            glucose: 155,
            bmi: 31.4,
            ..PatientInput::default()
        };
        let report = Report::assemble(&input, ReferenceTable::standard(), "");

        let glucose = report.row(Indicator::Glucose).unwrap();
        assert_eq!(glucose.value, IndicatorValue::Integer(155));
        assert_eq!(glucose.normal_range, "< 140 mg/dL");

        let bmi = report.row(Indicator::Bmi).unwrap();
        assert_eq!(bmi.value, IndicatorValue::Float(31.4));
        assert_eq!(bmi.normal_range, "< 25");

        let age = report.row(Indicator::Age).unwrap();
        assert_eq!(age.value, IndicatorValue::Integer(33));
        assert_eq!(age.normal_range, "18–45 (low risk)");
    }

    #[test]
    fn test_json_uses_column_headers() {
        let report = Report::assemble(&PatientInput::default(), ReferenceTable::standard(), "Jane");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rows"][0]["Feature"], "Age");
        assert_eq!(json["rows"][0]["Your Value"], 33);
        assert_eq!(json["rows"][6]["Your Value"], 25.0);
    }
}
