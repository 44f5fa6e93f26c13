use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use glucospect_api::config::ServerConfig;
use glucospect_api::routes::build_app;
use glucospect_api::state::AppState;
use glucospect_core::artifacts::{Classifier, Columns, Scaler};
use glucospect_core::inference::InferenceService;

/// Build a test `ServerConfig` with safe defaults.
///
/// `static_dir` points back at the workspace-level `static/` directory so
/// the landing page route works from the crate's test working directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        debug: false,
        cors_origins: vec!["http://localhost:5000".to_string()],
        model_path: PathBuf::from("../../artifacts/model.json"),
        scaler_path: PathBuf::from("../../artifacts/scaler.json"),
        columns_path: PathBuf::from("../../artifacts/columns.json"),
        static_dir: PathBuf::from("../../static"),
    }
}

/// Deterministic test artifacts.
///
/// Identity scaler and a classifier whose decision value is
/// `hba1c + blood_glucose + 0.5*gender_Male + 0.25*smoking_Yes - 150`,
/// so payloads with high glucose/HbA1c classify as Diabetic and normal
/// vitals classify as Non-Diabetic, with near-certain confidence either
/// way. The column list carries two extra one-hot columns to exercise
/// zero-fill alignment.
pub fn test_inference() -> InferenceService {
    let columns = Columns(
        [
            "age",
            "bmi",
            "HbA1c_level",
            "blood_glucose_level",
            "gender_Male",
            "gender_Other",
            "smoking_history_Yes",
            "smoking_history_No_Info",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    );
    let scaler = Scaler {
        mean: vec![0.0; 8],
        scale: vec![1.0; 8],
    };
    let classifier = Classifier {
        coefficients: vec![0.0, 0.0, 1.0, 1.0, 0.5, 0.0, 0.25, 0.0],
        intercept: -150.0,
        probability: true,
    };
    InferenceService::new(classifier, scaler, columns).expect("test artifacts must be consistent")
}

/// Build the full application (routes + middleware) over the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        inference: Arc::new(test_inference()),
    };
    build_app(state)
}

/// A payload that validates and classifies as Diabetic under the test
/// artifacts.
pub fn diabetic_payload() -> Value {
    serde_json::json!({
        "age": 58,
        "bmi": 33.1,
        "hba1c": 9.2,
        "blood_glucose": 245,
        "gender": "Male",
        "smoking": "Yes",
    })
}

/// A payload that validates and classifies as Non-Diabetic under the test
/// artifacts.
pub fn non_diabetic_payload() -> Value {
    serde_json::json!({
        "age": 29,
        "bmi": 22.4,
        "hba1c": 5.1,
        "blood_glucose": 88,
        "gender": "Female",
        "smoking": "No",
    })
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
