//! Mock classifier for testing.

use crate::error::Result;
use crate::indicator::{Indicator, MODEL_ORDER};
use crate::input::FeatureVector;

use super::provider::RiskClassifier;

#[derive(Debug, Clone, Copy)]
enum Rule {
    Fixed(u8),
    Threshold { position: usize, cutoff: f64 },
}

/// Mock classifier that returns predictable labels for testing.
#[derive(Debug, Clone)]
pub struct MockClassifier {
    rule: Rule,
}

impl MockClassifier {
    /// Always return the same label (which need not be 0 or 1).
    pub fn fixed(label: u8) -> Self {
        Self {
            rule: Rule::Fixed(label),
        }
    }

    /// Label 1 when the given indicator is at or above `cutoff`.
    ///
    /// The value is read by model position, so the rule sees whatever a
    /// trained model would see at that slot.
    pub fn threshold(indicator: Indicator, cutoff: f64) -> Self {
        let position = MODEL_ORDER
            .iter()
            .position(|i| *i == indicator)
            .unwrap_or_default();
        Self {
            rule: Rule::Threshold { position, cutoff },
        }
    }

    /// Label 1 for glucose at or above 140 mg/dL.
    pub fn glucose() -> Self {
        Self::threshold(Indicator::Glucose, 140.0)
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::glucose()
    }
}

impl RiskClassifier for MockClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<u8> {
        Ok(match self.rule {
            Rule::Fixed(label) => label,
            Rule::Threshold { position, cutoff } => u8::from(features[position] >= cutoff),
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PatientInput;

    #[test]
    fn test_fixed() {
        let features = FeatureVector::from_input(&PatientInput::default());
        assert_eq!(MockClassifier::fixed(1).classify(&features).unwrap(), 1);
        assert_eq!(MockClassifier::fixed(7).classify(&features).unwrap(), 7);
    }

    #[test]
    fn test_glucose_rule() {
        let classifier = MockClassifier::glucose();
        let low = FeatureVector::from_input(&PatientInput::default());
        let high = FeatureVector::from_input(&PatientInput {
            glucose: 165,
            ..PatientInput::default()
        });
        assert_eq!(classifier.classify(&low).unwrap(), 0);
        assert_eq!(classifier.classify(&high).unwrap(), 1);
        assert_eq!(classifier.probability(&high).unwrap(), None);
    }
}
