//! The eight clinical indicators and their two orderings.
//!
//! The classifier sees indicators only by position, so the order in which
//! they are fed to it is part of the model contract. Reports list the same
//! indicators in a different, reader-friendly order. Both orders are spelled
//! out below as separate constants; neither is derived from the other.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DiabriskError, Result};
use crate::reference::ReferenceTable;

/// One of the eight named measurements used as model input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    #[serde(rename = "BMI")]
    Bmi,
    DiabetesPedigreeFunction,
    Age,
}

/// Order the classifier was trained on.
pub const MODEL_ORDER: [Indicator; 8] = [
    Indicator::Pregnancies,
    Indicator::Glucose,
    Indicator::BloodPressure,
    Indicator::SkinThickness,
    Indicator::Insulin,
    Indicator::Bmi,
    Indicator::DiabetesPedigreeFunction,
    Indicator::Age,
];

/// Order of rows in the patient report.
pub const DISPLAY_ORDER: [Indicator; 8] = [
    Indicator::Age,
    Indicator::Pregnancies,
    Indicator::Glucose,
    Indicator::BloodPressure,
    Indicator::SkinThickness,
    Indicator::Insulin,
    Indicator::Bmi,
    Indicator::DiabetesPedigreeFunction,
];

/// Number of indicators, and therefore the feature vector length.
pub const INDICATOR_COUNT: usize = MODEL_ORDER.len();

/// Numeric type an indicator is collected as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    /// Whole numbers only.
    Integer,
    /// Floating-point values.
    Float,
}

impl Indicator {
    /// Canonical identifier, as used in JSON payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Indicator::Pregnancies => "Pregnancies",
            Indicator::Glucose => "Glucose",
            Indicator::BloodPressure => "BloodPressure",
            Indicator::SkinThickness => "SkinThickness",
            Indicator::Insulin => "Insulin",
            Indicator::Bmi => "BMI",
            Indicator::DiabetesPedigreeFunction => "DiabetesPedigreeFunction",
            Indicator::Age => "Age",
        }
    }

    /// Human-readable label, as shown in forms and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::Pregnancies => "Pregnancies",
            Indicator::Glucose => "Glucose",
            Indicator::BloodPressure => "Blood Pressure",
            Indicator::SkinThickness => "Skin Thickness",
            Indicator::Insulin => "Insulin",
            Indicator::Bmi => "BMI",
            Indicator::DiabetesPedigreeFunction => "Diabetes Pedigree Function",
            Indicator::Age => "Age",
        }
    }

    pub fn kind(&self) -> IndicatorKind {
        match self {
            Indicator::Bmi | Indicator::DiabetesPedigreeFunction => IndicatorKind::Float,
            _ => IndicatorKind::Integer,
        }
    }

    /// Inclusive `(min, max)` bounds accepted by the input form.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Indicator::Pregnancies => (0.0, 20.0),
            Indicator::Glucose => (0.0, 200.0),
            Indicator::BloodPressure => (0.0, 180.0),
            Indicator::SkinThickness => (0.0, 100.0),
            Indicator::Insulin => (0.0, 900.0),
            Indicator::Bmi => (0.0, 60.0),
            Indicator::DiabetesPedigreeFunction => (0.0, 2.5),
            Indicator::Age => (1.0, 120.0),
        }
    }

    /// Value pre-filled in the input form.
    pub fn default_value(&self) -> IndicatorValue {
        match self {
            Indicator::Pregnancies => IndicatorValue::Integer(2),
            Indicator::Glucose => IndicatorValue::Integer(120),
            Indicator::BloodPressure => IndicatorValue::Integer(70),
            Indicator::SkinThickness => IndicatorValue::Integer(20),
            Indicator::Insulin => IndicatorValue::Integer(85),
            Indicator::Bmi => IndicatorValue::Float(25.0),
            Indicator::DiabetesPedigreeFunction => IndicatorValue::Float(0.5),
            Indicator::Age => IndicatorValue::Integer(33),
        }
    }

    /// Short hint shown next to the input field.
    pub fn help(&self) -> &'static str {
        match self {
            Indicator::Pregnancies => "Number of times pregnant",
            Indicator::Glucose => "Plasma glucose concentration",
            Indicator::BloodPressure => "Diastolic blood pressure (mm Hg)",
            Indicator::SkinThickness => "Triceps skin fold thickness (mm)",
            Indicator::Insulin => "2-Hour serum insulin (mu U/ml)",
            Indicator::Bmi => "Body Mass Index",
            Indicator::DiabetesPedigreeFunction => "Genetic risk factor",
            Indicator::Age => "Age in years",
        }
    }

    /// Longer explanation of what the measurement means.
    pub fn description(&self) -> &'static str {
        match self {
            Indicator::Pregnancies => "Number of times the patient has been pregnant.",
            Indicator::Glucose => "Plasma glucose concentration after fasting.",
            Indicator::BloodPressure => "Diastolic blood pressure in mm Hg.",
            Indicator::SkinThickness => "Triceps skin fold thickness.",
            Indicator::Insulin => "2-hour serum insulin level.",
            Indicator::Bmi => "Body Mass Index (weight/height²).",
            Indicator::DiabetesPedigreeFunction => {
                "Likelihood of diabetes based on family history."
            }
            Indicator::Age => "Patient's age in years.",
        }
    }

    /// Check a raw value against this indicator's type and bounds.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn check(&self, value: f64) -> Result<()> {
        let invalid = |reason: String| DiabriskError::InvalidInput {
            indicator: *self,
            value,
            reason,
        };

        if !value.is_finite() {
            return Err(invalid("value must be a finite number".to_string()));
        }
        let (min, max) = self.bounds();
        if value < min || value > max {
            return Err(invalid(format!("must be between {} and {}", min, max)));
        }
        if self.kind() == IndicatorKind::Integer && value.fract() != 0.0 {
            return Err(invalid("must be a whole number".to_string()));
        }
        Ok(())
    }

    /// Look up an indicator by canonical name or display label.
    pub fn from_name(name: &str) -> Option<Indicator> {
        MODEL_ORDER
            .iter()
            .copied()
            .find(|i| i.name().eq_ignore_ascii_case(name) || i.label().eq_ignore_ascii_case(name))
    }

    /// Form metadata for this indicator, including its normal range.
    pub fn spec(&self) -> IndicatorSpec {
        let (min, max) = self.bounds();
        IndicatorSpec {
            indicator: *self,
            label: self.label(),
            kind: self.kind(),
            min,
            max,
            default: self.default_value(),
            help: self.help(),
            description: self.description(),
            normal_range: ReferenceTable::standard().range(*self),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything an input form needs to render one field.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSpec {
    #[serde(rename = "name")]
    pub indicator: Indicator,
    pub label: &'static str,
    pub kind: IndicatorKind,
    pub min: f64,
    pub max: f64,
    pub default: IndicatorValue,
    pub help: &'static str,
    pub description: &'static str,
    pub normal_range: &'static str,
}

/// A single collected value, typed per [`IndicatorKind`].
///
/// Serialized as a plain JSON number. Display keeps integers whole
/// (`33`) and gives floats a fractional part (`25.0`, `0.5`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Integer(u32),
    Float(f64),
}

impl IndicatorValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            IndicatorValue::Integer(v) => f64::from(*v),
            IndicatorValue::Float(v) => *v,
        }
    }

    /// Text for a numeric column that mixes integers and floats.
    ///
    /// Every value is written in float form, so `33` becomes `33.0`.
    pub fn float_text(&self) -> String {
        let v = self.as_f64();
        if v.is_finite() && v.fract() == 0.0 {
            format!("{:.1}", v)
        } else {
            v.to_string()
        }
    }

    /// Parse text written by [`IndicatorValue::float_text`] or [`Display`](fmt::Display)
    /// back into a value of the given kind.
    pub fn parse_as(kind: IndicatorKind, s: &str) -> std::result::Result<Self, String> {
        let s = s.trim();
        let v: f64 = s
            .parse()
            .map_err(|e| format!("Invalid number '{}': {}", s, e))?;
        match kind {
            IndicatorKind::Float => Ok(IndicatorValue::Float(v)),
            IndicatorKind::Integer => {
                if !v.is_finite() || v.fract() != 0.0 || v < 0.0 || v > f64::from(u32::MAX) {
                    return Err(format!("Invalid whole number '{}'", s));
                }
                Ok(IndicatorValue::Integer(v as u32))
            }
        }
    }
}

impl fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorValue::Integer(v) => write!(f, "{}", v),
            IndicatorValue::Float(_) => f.write_str(&self.float_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_cover_every_indicator_once() {
        let mut model = MODEL_ORDER.to_vec();
        let mut display = DISPLAY_ORDER.to_vec();
        model.sort();
        display.sort();
        assert_eq!(model, display);
        model.dedup();
        assert_eq!(model.len(), INDICATOR_COUNT);
    }

    #[test]
    fn test_orders_are_distinct() {
        assert_ne!(MODEL_ORDER, DISPLAY_ORDER);
        assert_eq!(MODEL_ORDER[0], Indicator::Pregnancies);
        assert_eq!(MODEL_ORDER[7], Indicator::Age);
        assert_eq!(DISPLAY_ORDER[0], Indicator::Age);
        assert_eq!(DISPLAY_ORDER[7], Indicator::DiabetesPedigreeFunction);
    }

    #[test]
    fn test_defaults_are_within_bounds() {
        for indicator in MODEL_ORDER {
            let value = indicator.default_value().as_f64();
            assert!(indicator.check(value).is_ok(), "{} default out of range", indicator);
        }
    }

    #[test]
    fn test_check_rejects_out_of_range() {
        assert!(Indicator::Glucose.check(201.0).is_err());
        assert!(Indicator::Age.check(0.0).is_err());
        assert!(Indicator::Bmi.check(-0.1).is_err());
        assert!(Indicator::Bmi.check(60.0).is_ok());
    }

    #[test]
    fn test_check_rejects_fractional_integer() {
        let err = Indicator::Pregnancies.check(2.5).unwrap_err();
        assert!(err.to_string().contains("whole number"));
        assert!(Indicator::DiabetesPedigreeFunction.check(0.627).is_ok());
    }

    #[test]
    fn test_check_rejects_nan() {
        assert!(Indicator::Insulin.check(f64::NAN).is_err());
        assert!(Indicator::Bmi.check(f64::INFINITY).is_err());
    }

    #[test]
    fn test_from_name_accepts_label_and_name() {
        assert_eq!(Indicator::from_name("BloodPressure"), Some(Indicator::BloodPressure));
        assert_eq!(Indicator::from_name("blood pressure"), Some(Indicator::BloodPressure));
        assert_eq!(Indicator::from_name("bmi"), Some(Indicator::Bmi));
        assert_eq!(Indicator::from_name("Cholesterol"), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(IndicatorValue::Integer(33).to_string(), "33");
        assert_eq!(IndicatorValue::Float(25.0).to_string(), "25.0");
        assert_eq!(IndicatorValue::Float(0.5).to_string(), "0.5");
        assert_eq!(IndicatorValue::Float(0.627).to_string(), "0.627");
    }

    #[test]
    fn test_value_float_text() {
        assert_eq!(IndicatorValue::Integer(33).float_text(), "33.0");
        assert_eq!(IndicatorValue::Integer(0).float_text(), "0.0");
        assert_eq!(IndicatorValue::Float(25.0).float_text(), "25.0");
        assert_eq!(IndicatorValue::Float(33.6).float_text(), "33.6");
    }

    #[test]
    fn test_value_parse_as_kind() {
        use IndicatorKind::{Float, Integer};
        assert_eq!(IndicatorValue::parse_as(Integer, "120"), Ok(IndicatorValue::Integer(120)));
        assert_eq!(IndicatorValue::parse_as(Integer, "120.0"), Ok(IndicatorValue::Integer(120)));
        assert_eq!(IndicatorValue::parse_as(Float, "25.0"), Ok(IndicatorValue::Float(25.0)));
        assert!(IndicatorValue::parse_as(Integer, "2.5").is_err());
        assert!(IndicatorValue::parse_as(Integer, "-3").is_err());
        assert!(IndicatorValue::parse_as(Float, "abc").is_err());
    }

    #[test]
    fn test_value_serializes_as_number() {
        assert_eq!(serde_json::to_string(&IndicatorValue::Integer(33)).unwrap(), "33");
        assert_eq!(serde_json::to_string(&IndicatorValue::Float(25.0)).unwrap(), "25.0");
        let value: IndicatorValue = serde_json::from_str("0.627").unwrap();
        assert_eq!(value, IndicatorValue::Float(0.627));
    }

    #[test]
    fn test_spec() {
        let spec = Indicator::Insulin.spec();
        assert_eq!(spec.label, "Insulin");
        assert_eq!(spec.max, 900.0);
        assert_eq!(spec.default, IndicatorValue::Integer(85));
        assert_eq!(spec.normal_range, "< 100 µU/mL");

        let json = serde_json::to_value(Indicator::DiabetesPedigreeFunction.spec()).unwrap();
        assert_eq!(json["name"], "DiabetesPedigreeFunction");
        assert_eq!(json["kind"], "float");
        assert_eq!(json["default"], 0.5);
    }

    #[test]
    fn test_bmi_serializes_as_acronym() {
        let json = serde_json::to_string(&Indicator::Bmi).unwrap();
        assert_eq!(json, "\"BMI\"");
    }
}
