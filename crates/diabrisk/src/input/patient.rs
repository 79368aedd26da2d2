//! Patient input collected from the form.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicator::{Indicator, IndicatorValue, MODEL_ORDER};

/// The eight indicator values for one patient.
///
/// Field names on the wire are the canonical indicator names
/// (`BloodPressure`, `BMI`, ...). Every field is required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    #[serde(rename = "Pregnancies")]
    pub pregnancies: u32,
    #[serde(rename = "Glucose")]
    pub glucose: u32,
    #[serde(rename = "BloodPressure")]
    pub blood_pressure: u32,
    #[serde(rename = "SkinThickness")]
    pub skin_thickness: u32,
    #[serde(rename = "Insulin")]
    pub insulin: u32,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "DiabetesPedigreeFunction")]
    pub diabetes_pedigree_function: f64,
    #[serde(rename = "Age")]
    pub age: u32,
}

impl Default for PatientInput {
    /// The values pre-filled in the input form.
    fn default() -> Self {
        Self {
            pregnancies: 2,
            glucose: 120,
            blood_pressure: 70,
            skin_thickness: 20,
            insulin: 85,
            bmi: 25.0,
            diabetes_pedigree_function: 0.5,
            age: 33,
        }
    }
}

impl PatientInput {
    /// Get the typed value for one indicator.
    pub fn value(&self, indicator: Indicator) -> IndicatorValue {
        match indicator {
            Indicator::Pregnancies => IndicatorValue::Integer(self.pregnancies),
            Indicator::Glucose => IndicatorValue::Integer(self.glucose),
            Indicator::BloodPressure => IndicatorValue::Integer(self.blood_pressure),
            Indicator::SkinThickness => IndicatorValue::Integer(self.skin_thickness),
            Indicator::Insulin => IndicatorValue::Integer(self.insulin),
            Indicator::Bmi => IndicatorValue::Float(self.bmi),
            Indicator::DiabetesPedigreeFunction => {
                IndicatorValue::Float(self.diabetes_pedigree_function)
            }
            Indicator::Age => IndicatorValue::Integer(self.age),
        }
    }

    /// Set one indicator from a raw number.
    ///
    /// The value is checked against the indicator's bounds and type first;
    /// on error the input is left unchanged.
    pub fn set(&mut self, indicator: Indicator, value: f64) -> Result<()> {
        indicator.check(value)?;
        // Bounds are checked above, so integer casts cannot truncate.
        let whole = value as u32;
        match indicator {
            Indicator::Pregnancies => self.pregnancies = whole,
            Indicator::Glucose => self.glucose = whole,
            Indicator::BloodPressure => self.blood_pressure = whole,
            Indicator::SkinThickness => self.skin_thickness = whole,
            Indicator::Insulin => self.insulin = whole,
            Indicator::Bmi => self.bmi = value,
            Indicator::DiabetesPedigreeFunction => self.diabetes_pedigree_function = value,
            Indicator::Age => self.age = whole,
        }
        Ok(())
    }

    /// Builder-style variant of [`PatientInput::set`].
    pub fn with(mut self, indicator: Indicator, value: f64) -> Result<Self> {
        self.set(indicator, value)?;
        Ok(self)
    }

    /// Check every indicator against its bounds.
    ///
    /// Returns the first violation found, in model order.
    pub fn validate(&self) -> Result<()> {
        for indicator in MODEL_ORDER {
            indicator.check(self.value(indicator).as_f64())?;
        }
        Ok(())
    }

    /// Build an input from `(indicator, value)` pairs, starting from defaults.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Indicator, f64)>,
    {
        let mut input = PatientInput::default();
        for (indicator, value) in pairs {
            input.set(indicator, value)?;
        }
        Ok(input)
    }
}
