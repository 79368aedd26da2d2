//! Form metadata handler.

use axum::Json;
use serde::Serialize;

use diabrisk::{IndicatorSpec, MODEL_ORDER};

#[derive(Serialize)]
pub struct IndicatorsResponse {
    /// Fields in the order the form lays them out.
    pub indicators: Vec<IndicatorSpec>,
}

/// GET /api/indicators
pub async fn get_indicators() -> Json<IndicatorsResponse> {
    Json(IndicatorsResponse {
        indicators: MODEL_ORDER.iter().map(|i| i.spec()).collect(),
    })
}
