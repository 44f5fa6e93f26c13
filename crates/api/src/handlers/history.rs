//! Handlers for the prediction history endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use glucospect_core::error::CoreError;
use glucospect_core::types::DbId;
use glucospect_db::models::prediction::PredictionRecord;
use glucospect_db::repositories::PredictionRepo;

use crate::error::{AppError, AppResult};
use crate::response::StatusMessage;
use crate::state::AppState;

/// How many records the history endpoint returns.
const HISTORY_LIMIT: i64 = 10;

/// One history entry as rendered to clients.
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub id: DbId,
    pub prediction_result: String,
    pub date: String,
    pub parameters: serde_json::Value,
    pub confidence: Option<String>,
}

impl From<PredictionRecord> for HistoryEntry {
    fn from(record: PredictionRecord) -> Self {
        Self {
            id: record.id,
            prediction_result: record.prediction_result,
            date: record.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            parameters: json!({
                "age": record.age,
                "bmi": record.bmi,
                "hba1c": record.hba1c,
                "blood_glucose": record.blood_glucose,
                "gender": record.gender,
                "smoking": record.smoking,
            }),
            confidence: record.confidence,
        }
    }
}

/// GET /api/history -- the ten most recent predictions, newest first.
pub async fn list_history(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = PredictionRepo::list_recent(&state.pool, HISTORY_LIMIT).await?;
    let history: Vec<HistoryEntry> = records.into_iter().map(HistoryEntry::from).collect();

    Ok(Json(json!({
        "status": "success",
        "history": history,
    })))
}

/// DELETE /api/history/{id} -- remove one record from history.
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PredictionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "PredictionRecord",
            id,
        }));
    }

    tracing::info!(record_id = id, "Prediction record deleted");

    Ok(Json(StatusMessage::success(format!("Record {id} deleted"))))
}
