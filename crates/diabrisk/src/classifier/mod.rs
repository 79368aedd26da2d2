//! Risk classifier adapters.
//!
//! The rest of the crate only depends on the [`RiskClassifier`] trait; the
//! concrete model behind it is injected.
//!
//! # Implementations
//!
//! - **XGBoost** - tree ensembles saved in the XGBoost JSON model format
//! - **Mock** - fixed or single-threshold rules for tests and demos
//!
//! # Example
//!
//! ```no_run
//! use diabrisk::{FeatureVector, PatientInput, RiskClassifier, XgbClassifier};
//!
//! let model = XgbClassifier::load("xgboost.json").unwrap();
//! let features = FeatureVector::from_input(&PatientInput::default());
//! let label = model.classify(&features).unwrap();
//! assert!(label <= 1);
//! ```

mod artifact;
mod mock;
mod provider;
mod xgboost;

pub use artifact::ArtifactMetadata;
pub use mock::MockClassifier;
pub use provider::{ClassifierConfig, DEFAULT_THRESHOLD, RiskClassifier};
pub use xgboost::{XGBOOST_JSON_FORMAT, XgbClassifier};
