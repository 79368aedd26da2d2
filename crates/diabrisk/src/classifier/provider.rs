//! Classifier trait and configuration.

use crate::error::Result;
use crate::input::FeatureVector;

/// Default probability above which a patient is labelled diabetic.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Configuration shared by classifier implementations.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Positive-class probability must be strictly greater than this to
    /// produce label 1.
    pub threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// A pretrained binary decision function over a feature vector.
///
/// Implementations must be thread-safe (Send + Sync) so one loaded model can
/// be shared read-only between concurrent sessions. Classification must be
/// deterministic: identical vectors always yield identical labels.
pub trait RiskClassifier: Send + Sync {
    /// Classify a feature vector laid out in model order.
    ///
    /// # Returns
    /// The raw label; callers treat anything but 0 or 1 as an error.
    fn classify(&self, features: &FeatureVector) -> Result<u8>;

    /// Positive-class probability, if the model exposes one.
    fn probability(&self, _features: &FeatureVector) -> Result<Option<f64>> {
        Ok(None)
    }

    /// Get the name of this classifier (for logging/debugging).
    fn name(&self) -> &str;
}
