//! Application state for the web server.

use diabrisk::{ArtifactCheck, Predictor};

/// Shared application state.
///
/// The predictor is read-only after load, so requests share it without locks.
#[derive(Clone)]
pub struct AppState {
    /// The loaded classifier and reference table.
    pub predictor: Predictor,
    /// Load result for the artifact, if the classifier came from one.
    pub artifact_check: Option<ArtifactCheck>,
}

impl AppState {
    /// Create new application state.
    pub fn new(predictor: Predictor) -> Self {
        let artifact_check = predictor.artifact().map(ArtifactCheck::loaded);
        Self {
            predictor,
            artifact_check,
        }
    }
}
