//! Startup smoke test for the model artifact.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use crate::classifier::{ArtifactMetadata, XgbClassifier};

/// Outcome of trying to load an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Ok,
    Failed,
}

/// Report from [`check_artifact`].
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactCheck {
    pub path: PathBuf,
    pub status: CheckStatus,
    /// Success message, or the description of the caught failure.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<ArtifactMetadata>,
}

impl ArtifactCheck {
    pub fn is_ok(&self) -> bool {
        self.status == CheckStatus::Ok
    }

    /// Summary for an artifact that has already been loaded.
    pub fn loaded(metadata: &ArtifactMetadata) -> Self {
        Self {
            path: metadata.path.clone(),
            status: CheckStatus::Ok,
            message: "Model artifact loaded successfully".to_string(),
            artifact: Some(metadata.clone()),
        }
    }
}

/// Try to load the artifact and report success or the failure description.
///
/// Never panics and never returns an error; failures are part of the report.
pub fn check_artifact(path: impl AsRef<Path>) -> ArtifactCheck {
    let path = path.as_ref();
    match XgbClassifier::load(path) {
        Ok(classifier) => ArtifactCheck::loaded(classifier.metadata()),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Model artifact check failed");
            ArtifactCheck {
                path: path.to_path_buf(),
                status: CheckStatus::Failed,
                message: e.to_string(),
                artifact: None,
            }
        }
    }
}
