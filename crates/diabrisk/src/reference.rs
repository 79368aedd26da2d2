//! Normal reference ranges shown next to patient values.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::indicator::{Indicator, MODEL_ORDER};

static STANDARD: Lazy<ReferenceTable> = Lazy::new(|| {
    let ranges = MODEL_ORDER
        .iter()
        .map(|indicator| (*indicator, standard_range(*indicator)))
        .collect();
    ReferenceTable { ranges }
});

fn standard_range(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Pregnancies => "0–6",
        Indicator::Glucose => "< 140 mg/dL",
        Indicator::BloodPressure => "< 80 mm Hg",
        Indicator::SkinThickness => "~20 mm",
        Indicator::Insulin => "< 100 µU/mL",
        Indicator::Bmi => "< 25",
        Indicator::DiabetesPedigreeFunction => "< 1.0",
        Indicator::Age => "18–45 (low risk)",
    }
}

/// Read-only mapping from indicator to a descriptive normal range.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    ranges: IndexMap<Indicator, &'static str>,
}

impl ReferenceTable {
    /// The process-wide table of normal ranges.
    pub fn standard() -> &'static ReferenceTable {
        &STANDARD
    }

    /// Normal range for an indicator.
    pub fn range(&self, indicator: Indicator) -> &'static str {
        self.ranges
            .get(&indicator)
            .copied()
            .unwrap_or_else(|| standard_range(indicator))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Indicator, &'static str)> + '_ {
        self.ranges.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
