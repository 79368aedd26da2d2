//! Feature vector assembly in model order.

use std::ops::Index;

use serde::Serialize;

use crate::error::{DiabriskError, Result};
use crate::indicator::{INDICATOR_COUNT, Indicator, MODEL_ORDER};

use super::patient::PatientInput;

/// The numeric encoding of a [`PatientInput`], positioned per [`MODEL_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f64; INDICATOR_COUNT]);

impl FeatureVector {
    /// Assemble the vector the classifier expects.
    pub fn from_input(input: &PatientInput) -> Self {
        Self(MODEL_ORDER.map(|indicator| input.value(indicator).as_f64()))
    }

    /// Wrap raw values that are already in model order.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let values: [f64; INDICATOR_COUNT] =
            values.try_into().map_err(|_| DiabriskError::FeatureCount {
                expected: INDICATOR_COUNT,
                actual: values.len(),
            })?;
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Value at a given model position.
    pub fn get(&self, position: usize) -> Option<f64> {
        self.0.get(position).copied()
    }

    /// Value for a named indicator.
    pub fn value_of(&self, indicator: Indicator) -> f64 {
        // Every indicator appears exactly once in MODEL_ORDER.
        let position = MODEL_ORDER
            .iter()
            .position(|i| *i == indicator)
            .unwrap_or_default();
        self.0[position]
    }

    /// Reverse the positions.
    ///
    /// Only useful for demonstrating that the classifier is order-sensitive.
    pub fn reversed(&self) -> Self {
        let mut values = self.0;
        values.reverse();
        Self(values)
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, position: usize) -> &f64 {
        &self.0[position]
    }
}

impl From<&PatientInput> for FeatureVector {
    fn from(input: &PatientInput) -> Self {
        Self::from_input(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_vector() {
        let vector = FeatureVector::from_input(&PatientInput::default());
        assert_eq!(
            vector.as_slice(),
            &[2.0, 120.0, 70.0, 20.0, 85.0, 25.0, 0.5, 33.0]
        );
    }

    #[test]
    fn test_positions_follow_model_order() {
        let input = PatientInput {
            pregnancies: 1,
            glucose: 2,
            blood_pressure: 3,
            skin_thickness: 4,
            insulin: 5,
            bmi: 6.0,
            diabetes_pedigree_function: 0.7,
            age: 8,
        };
        let vector = FeatureVector::from_input(&input);
        for (position, indicator) in MODEL_ORDER.iter().enumerate() {
            assert_eq!(vector[position], input.value(*indicator).as_f64());
            assert_eq!(vector.value_of(*indicator), vector[position]);
        }
        assert_eq!(vector.value_of(Indicator::Age), 8.0);
    }

    #[test]
    fn test_from_slice_length_checked() {
        assert!(FeatureVector::from_slice(&[0.0; 8]).is_ok());
        let err = FeatureVector::from_slice(&[0.0; 7]).unwrap_err();
        assert!(matches!(
            err,
            DiabriskError::FeatureCount { expected: 8, actual: 7 }
        ));
        assert!(FeatureVector::from_slice(&[0.0; 9]).is_err());
    }

    #[test]
    fn test_reversed() {
        let vector = FeatureVector::from_input(&PatientInput::default());
        let reversed = vector.reversed();
        assert_eq!(reversed[0], 33.0);
        assert_eq!(reversed[7], 2.0);
        assert_eq!(reversed.reversed(), vector);
    }
}
