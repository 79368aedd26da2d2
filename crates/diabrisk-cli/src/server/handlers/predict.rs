//! Prediction handler.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Serialize;
use tracing::debug;

use diabrisk::{PatientInput, Prediction};

use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Serialize)]
pub struct PredictResponse {
    pub label: u8,
    pub prediction: Prediction,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

/// POST /api/predict
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PatientInput>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(input) = payload?;
    let assessment = state.predictor.predict(&input)?;
    debug!(label = assessment.label, "Served prediction");

    Ok(Json(PredictResponse {
        label: assessment.label,
        prediction: assessment.prediction,
        message: assessment.message().to_string(),
        probability: assessment.probability,
    }))
}
