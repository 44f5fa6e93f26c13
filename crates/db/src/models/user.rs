//! User entity model.
//!
//! The `users` table exists for a planned authentication flow; no endpoint
//! reads or writes it yet and `prediction_records.user_id` stays NULL.

use glucospect_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Timestamp,
}
