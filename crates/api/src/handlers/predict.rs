//! Handler for the prediction endpoint.
//!
//! `POST /predict` runs the per-request pipeline: validate the body, align
//! features to the training columns, scale and classify, then record the
//! outcome in history. History persistence is best-effort: a failed insert
//! is logged and the response carries `record_id: null` instead of failing
//! the prediction.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use glucospect_core::types::DbId;
use glucospect_core::{request_id, validation};
use glucospect_db::models::prediction::NewPredictionRecord;
use glucospect_db::repositories::PredictionRepo;

use crate::response::elapsed_ms;
use crate::state::AppState;

/// Success payload for `POST /predict`.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: String,
    pub request_id: String,
    pub response_time_ms: f64,
    /// Id of the stored history record; `null` when the best-effort
    /// insert failed.
    pub record_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

/// Error payload for `POST /predict` (validation and internal failures).
#[derive(Debug, Serialize)]
pub struct PredictError {
    pub error: String,
    pub request_id: String,
}

fn reject(status: StatusCode, message: impl Into<String>, request_id: &str) -> Response {
    (
        status,
        Json(PredictError {
            error: message.into(),
            request_id: request_id.to_string(),
        }),
    )
        .into_response()
}

/// POST /predict -- classify one request and append it to history.
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let started = Instant::now();
    let request_id = request_id::generate();

    let Ok(Json(body)) = body else {
        return reject(
            StatusCode::BAD_REQUEST,
            "Request body must be valid JSON",
            &request_id,
        );
    };

    tracing::info!(%request_id, payload = %body, "Received prediction request");

    let request = match validation::parse_request(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::info!(%request_id, error = %err, "Prediction request rejected");
            return reject(StatusCode::BAD_REQUEST, err.to_string(), &request_id);
        }
    };

    let prediction = match state.inference.predict(&request) {
        Ok(prediction) => prediction,
        Err(err) => {
            tracing::error!(
                %request_id,
                error = %err,
                elapsed_ms = elapsed_ms(started),
                "Inference failed"
            );
            return reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Prediction failed due to an internal error",
                &request_id,
            );
        }
    };

    let new_record = NewPredictionRecord {
        prediction_result: prediction.label.to_string(),
        age: request.age,
        bmi: request.bmi,
        hba1c: request.hba1c,
        blood_glucose: request.blood_glucose,
        gender: request.gender.as_str().to_string(),
        smoking: request.smoking.as_str().to_string(),
        confidence: prediction.confidence.clone(),
    };

    // Best-effort history write: the prediction already succeeded, so a
    // storage failure downgrades to record_id: null rather than a 500.
    let record_id = match PredictionRepo::create(&state.pool, &new_record).await {
        Ok(record) => Some(record.id),
        Err(err) => {
            tracing::error!(%request_id, error = %err, "Failed to store prediction record");
            None
        }
    };

    let response_time_ms = elapsed_ms(started);
    tracing::info!(
        %request_id,
        prediction = %prediction.label,
        record_id,
        response_time_ms,
        "Prediction served"
    );

    Json(PredictResponse {
        prediction: prediction.label.to_string(),
        request_id,
        response_time_ms,
        record_id,
        confidence: prediction.confidence,
    })
    .into_response()
}
