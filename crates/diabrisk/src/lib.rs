//! Diabrisk: diabetes risk classification with exportable patient reports.
//!
//! Eight clinical indicators are collected for a patient, encoded into a
//! fixed-order feature vector, and passed to a pretrained binary classifier.
//! The same values, paired with normal reference ranges, form a report that
//! can be exported as CSV.
//!
//! # Core Principles
//!
//! - **Opaque model**: the classifier is injected behind [`RiskClassifier`]
//! - **Load once**: a [`Predictor`] owns the loaded artifact; no global state
//! - **Explicit ordering**: [`MODEL_ORDER`] and [`DISPLAY_ORDER`] are separate
//!
//! # Example
//!
//! ```no_run
//! use diabrisk::{PatientInput, Predictor, PredictorConfig};
//!
//! let predictor = Predictor::load(&PredictorConfig::new("xgboost.json")).unwrap();
//! let input = PatientInput::default();
//!
//! let assessment = predictor.predict(&input).unwrap();
//! println!("{}", assessment.message());
//!
//! let report = predictor.report(&input, "Jane").unwrap();
//! std::fs::write(report.filename(), report.to_csv().unwrap()).unwrap();
//! ```

pub mod classifier;
pub mod diagnostics;
pub mod error;
pub mod indicator;
pub mod input;
pub mod prediction;
pub mod reference;
pub mod report;

mod predictor;

pub use crate::predictor::{DEFAULT_ARTIFACT_PATH, Predictor, PredictorConfig};
pub use classifier::{
    ArtifactMetadata, ClassifierConfig, DEFAULT_THRESHOLD, MockClassifier, RiskClassifier,
    XgbClassifier,
};
pub use diagnostics::{ArtifactCheck, CheckStatus, check_artifact};
pub use error::{DiabriskError, Result};
pub use indicator::{
    DISPLAY_ORDER, INDICATOR_COUNT, Indicator, IndicatorKind, IndicatorSpec, IndicatorValue,
    MODEL_ORDER,
};
pub use input::{FeatureVector, PatientInput};
pub use prediction::{Assessment, Prediction};
pub use reference::ReferenceTable;
pub use report::{Report, ReportRow, export_filename};
