//! Repository for the `prediction_records` table.

use chrono::Utc;
use glucospect_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::prediction::{NewPredictionRecord, PredictionRecord};

/// Column list for `prediction_records` queries.
const COLUMNS: &str = "\
    id, user_id, prediction_result, age, bmi, hba1c, blood_glucose, \
    gender, smoking, confidence, created_at";

/// Provides CRUD operations for prediction history.
pub struct PredictionRepo;

impl PredictionRepo {
    /// Insert a new prediction record, returning the full row.
    ///
    /// `created_at` is assigned here rather than by a column default so
    /// the stored value round-trips as an RFC 3339 UTC timestamp.
    pub async fn create(
        pool: &SqlitePool,
        input: &NewPredictionRecord,
    ) -> Result<PredictionRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO prediction_records \
                (prediction_result, age, bmi, hba1c, blood_glucose, \
                 gender, smoking, confidence, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PredictionRecord>(&query)
            .bind(&input.prediction_result)
            .bind(input.age)
            .bind(input.bmi)
            .bind(input.hba1c)
            .bind(input.blood_glucose)
            .bind(&input.gender)
            .bind(&input.smoking)
            .bind(&input.confidence)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a prediction record by ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<PredictionRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prediction_records WHERE id = $1");
        sqlx::query_as::<_, PredictionRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the most recent prediction records, newest first.
    pub async fn list_recent(
        pool: &SqlitePool,
        limit: i64,
    ) -> Result<Vec<PredictionRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prediction_records \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, PredictionRecord>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Delete a prediction record by ID.
    ///
    /// Returns `false` when no row had that id, which callers translate
    /// to a not-found response distinct from a storage failure.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prediction_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
