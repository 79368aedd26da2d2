//! Health handler.

use axum::{Json, extract::State};
use serde::Serialize;

use diabrisk::ArtifactCheck;

use crate::server::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub classifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<ArtifactCheck>,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        classifier: state.predictor.classifier_name().to_string(),
        artifact: state.artifact_check.clone(),
    })
}
