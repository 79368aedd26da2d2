//! Main Predictor struct and public API.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::classifier::{
    ArtifactMetadata, ClassifierConfig, DEFAULT_THRESHOLD, RiskClassifier, XgbClassifier,
};
use crate::error::Result;
use crate::input::{FeatureVector, PatientInput};
use crate::prediction::{Assessment, Prediction};
use crate::reference::ReferenceTable;
use crate::report::Report;

/// Artifact path used when none is configured, relative to the working
/// directory.
pub const DEFAULT_ARTIFACT_PATH: &str = "xgboost.json";

/// Configuration for loading a predictor.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Path to the XGBoost JSON artifact.
    pub artifact_path: PathBuf,
    /// Decision threshold on the positive-class probability.
    pub threshold: f64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl PredictorConfig {
    pub fn new(artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            ..Self::default()
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// A loaded classifier plus the reference table, ready to serve predict and
/// report actions.
///
/// Cloning is cheap; clones share the same read-only classifier.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn RiskClassifier>,
    artifact: Option<ArtifactMetadata>,
    reference: &'static ReferenceTable,
}

impl Predictor {
    /// Load the XGBoost artifact named in `config`.
    ///
    /// Fails fast with [`crate::DiabriskError::ArtifactLoad`]; there is no
    /// fallback classifier.
    pub fn load(config: &PredictorConfig) -> Result<Self> {
        let classifier = XgbClassifier::load_with_config(
            &config.artifact_path,
            ClassifierConfig {
                threshold: config.threshold,
            },
        )?;
        let artifact = Some(classifier.metadata().clone());

        Ok(Self {
            classifier: Arc::new(classifier),
            artifact,
            reference: ReferenceTable::standard(),
        })
    }

    /// Wrap any classifier implementation.
    pub fn with_classifier(classifier: impl RiskClassifier + 'static) -> Self {
        Self::from_shared(Arc::new(classifier))
    }

    /// Wrap a classifier that is already shared.
    pub fn from_shared(classifier: Arc<dyn RiskClassifier>) -> Self {
        Self {
            classifier,
            artifact: None,
            reference: ReferenceTable::standard(),
        }
    }

    /// Metadata of the loaded artifact, if this predictor was loaded from one.
    pub fn artifact(&self) -> Option<&ArtifactMetadata> {
        self.artifact.as_ref()
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    pub fn reference(&self) -> &'static ReferenceTable {
        self.reference
    }

    /// Classify a feature vector that is already in model order.
    pub fn classify(&self, features: &FeatureVector) -> Result<Prediction> {
        let label = self.classifier.classify(features)?;
        Prediction::from_label(label)
    }

    /// Run a predict action for one patient.
    ///
    /// Out-of-range input is a precondition violation and is reported as
    /// [`crate::DiabriskError::InvalidInput`] instead of being clamped.
    pub fn predict(&self, input: &PatientInput) -> Result<Assessment> {
        input.validate()?;

        let features = FeatureVector::from_input(input);
        let label = self.classifier.classify(&features)?;
        let prediction = Prediction::from_label(label)?;
        let probability = self.classifier.probability(&features)?;

        debug!(
            classifier = self.classifier.name(),
            label,
            ?probability,
            "Prediction complete"
        );

        Ok(Assessment {
            label,
            prediction,
            probability,
            classifier: self.classifier.name().to_string(),
        })
    }

    /// Run a generate-report action for one patient.
    pub fn report(&self, input: &PatientInput, name: impl Into<String>) -> Result<Report> {
        input.validate()?;
        Ok(Report::assemble(input, self.reference, name))
    }
}
