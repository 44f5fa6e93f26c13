//! Prediction history entity model and DTOs.

use glucospect_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `prediction_records` table.
///
/// Rows are insert-only: created on every successful prediction, never
/// mutated, removed only through the explicit history delete endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PredictionRecord {
    pub id: DbId,
    /// Reserved for a future authentication flow; always NULL today.
    pub user_id: Option<DbId>,
    /// "Diabetic" or "Non-Diabetic".
    pub prediction_result: String,
    pub age: f64,
    pub bmi: f64,
    pub hba1c: f64,
    pub blood_glucose: f64,
    pub gender: String,
    pub smoking: String,
    /// Confidence percentage string (e.g. "97.35%") when the classifier
    /// exported probabilities.
    pub confidence: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new prediction record.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPredictionRecord {
    pub prediction_result: String,
    pub age: f64,
    pub bmi: f64,
    pub hba1c: f64,
    pub blood_glucose: f64,
    pub gender: String,
    pub smoking: String,
    pub confidence: Option<String>,
}
