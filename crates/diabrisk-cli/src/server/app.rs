//! Axum application setup.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::handlers;
use super::state::AppState;
use crate::web::static_handler;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/indicators", get(handlers::get_indicators))
        .route("/predict", post(handlers::predict))
        .route("/report", post(handlers::build_report))
        .route("/report/csv", post(handlers::download_report_csv))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_handler)
        .layer(cors)
        .with_state(state)
}

/// Start the web server and run until Ctrl+C.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        println!();
        info!("Shutdown requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use diabrisk::{MockClassifier, PatientInput, Predictor};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(AppState::new(Predictor::with_classifier(
            MockClassifier::glucose(),
        )))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec(), headers)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_indicators_in_form_order() {
        let (status, body, _) = send(get_request("/api/indicators")).await;
        assert_eq!(status, StatusCode::OK);

        let value: Value = serde_json::from_slice(&body).unwrap();
        let indicators = value["indicators"].as_array().unwrap();
        assert_eq!(indicators.len(), 8);
        assert_eq!(indicators[0]["name"], "Pregnancies");
        assert_eq!(indicators[5]["name"], "BMI");
        assert_eq!(indicators[1]["normal_range"], "< 140 mg/dL");
    }

    #[tokio::test]
    async fn test_predict_default_input() {
        let input = serde_json::to_value(PatientInput::default()).unwrap();
        let (status, body, _) = send(post_json("/api/predict", input)).await;
        assert_eq!(status, StatusCode::OK);

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["label"], 0);
        assert_eq!(
            value["message"],
            "The model predicts Non-Diabetic. Keep up the healthy lifestyle!"
        );
    }

    #[tokio::test]
    async fn test_predict_high_glucose() {
        let input = PatientInput {
            glucose: 180,
            ..PatientInput::default()
        };
        let body = serde_json::to_value(input).unwrap();
        let (status, body, _) = send(post_json("/api/predict", body)).await;
        assert_eq!(status, StatusCode::OK);

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["label"], 1);
        assert_eq!(value["prediction"], "Diabetic");
    }

    #[tokio::test]
    async fn test_predict_out_of_range_is_bad_request() {
        let mut input = serde_json::to_value(PatientInput::default()).unwrap();
        input["BloodPressure"] = json!(181);
        let (status, body, _) = send(post_json("/api/predict", input)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "invalid_input");
    }

    #[tokio::test]
    async fn test_predict_missing_field_is_bad_request() {
        let (status, body, _) = send(post_json("/api/predict", json!({"Glucose": 120}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_report_rows_and_filename() {
        let request = json!({
            "name": "Jane",
            "input": PatientInput::default(),
        });
        let (status, body, _) = send(post_json("/api/report", request)).await;
        assert_eq!(status, StatusCode::OK);

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["filename"], "Jane_diabetes_report.csv");
        assert_eq!(value["patient_name"], "Jane");
        let rows = value["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0]["Feature"], "Age");
        assert_eq!(rows[0]["Your Value"], 33);
    }

    #[tokio::test]
    async fn test_report_csv_download() {
        let request = json!({ "input": PatientInput::default() });
        let (status, body, headers) = send(post_json("/api/report/csv", request)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            headers[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/csv")
        );
        assert!(
            headers[header::CONTENT_DISPOSITION]
                .to_str()
                .unwrap()
                .contains("filename=\"_diabetes_report.csv\"")
        );

        let csv = String::from_utf8(body).unwrap();
        assert!(csv.starts_with("Feature,Your Value,Normal Range\n"));
        assert_eq!(csv.lines().count(), 9);
    }

    #[tokio::test]
    async fn test_health_reports_classifier() {
        let (status, body, _) = send(get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);

        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["classifier"], "mock");
        assert!(value.get("artifact").is_none());
    }

    #[tokio::test]
    async fn test_fallback_serves_form() {
        let (status, body, headers) = send(get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            headers[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        assert!(String::from_utf8_lossy(&body).contains("Diabetes Risk Prediction"));
    }
}
