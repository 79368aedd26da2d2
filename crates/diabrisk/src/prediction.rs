//! Classification outcome types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DiabriskError, Result};

/// Binary verdict derived from a classifier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prediction {
    /// Label 0.
    NonDiabetic,
    /// Label 1.
    Diabetic,
}

impl Prediction {
    /// Map a raw classifier label. Anything but 0 or 1 is an error.
    pub fn from_label(label: u8) -> Result<Self> {
        match label {
            0 => Ok(Prediction::NonDiabetic),
            1 => Ok(Prediction::Diabetic),
            other => Err(DiabriskError::InvalidLabel(i64::from(other))),
        }
    }

    pub fn label(&self) -> u8 {
        match self {
            Prediction::NonDiabetic => 0,
            Prediction::Diabetic => 1,
        }
    }

    pub fn is_diabetic(&self) -> bool {
        matches!(self, Prediction::Diabetic)
    }

    /// Message shown to the user for this verdict.
    pub fn message(&self) -> &'static str {
        match self {
            Prediction::Diabetic => {
                "The model predicts Diabetic. Please consult a healthcare professional."
            }
            Prediction::NonDiabetic => {
                "The model predicts Non-Diabetic. Keep up the healthy lifestyle!"
            }
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Diabetic => write!(f, "Diabetic"),
            Prediction::NonDiabetic => write!(f, "Non-Diabetic"),
        }
    }
}

/// Result of a predict action.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    /// Raw label returned by the classifier.
    pub label: u8,
    pub prediction: Prediction,
    /// Positive-class probability, when the classifier exposes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    /// Name of the classifier that produced the label.
    pub classifier: String,
}

impl Assessment {
    pub fn message(&self) -> &'static str {
        self.prediction.message()
    }
}
