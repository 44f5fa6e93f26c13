//! HTTP handlers.

pub mod health;
pub mod history;
pub mod predict;

use axum::http::StatusCode;
use axum::Json;

use crate::response::StatusMessage;

/// Fallback for unmatched paths: uniform JSON envelope instead of the
/// framework's default empty 404.
pub async fn not_found() -> (StatusCode, Json<StatusMessage>) {
    (
        StatusCode::NOT_FOUND,
        Json(StatusMessage::error("Resource not found")),
    )
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> (StatusCode, Json<StatusMessage>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(StatusMessage::error("Method not allowed")),
    )
}
