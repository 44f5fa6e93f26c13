//! Shared response envelope types for API handlers.
//!
//! History and error responses use a `{ "status": ..., "message": ... }`
//! envelope; use [`StatusMessage`] instead of ad-hoc
//! `serde_json::json!({...})` for consistent serialization.

use std::time::Instant;

use serde::Serialize;

/// Elapsed wall-clock time since `started` in milliseconds, rounded to
/// two decimals. Shared by every handler that reports a response time.
pub fn elapsed_ms(started: Instant) -> f64 {
    (started.elapsed().as_secs_f64() * 100_000.0).round() / 100.0
}

/// Standard `{ "status": ..., "message": ... }` envelope.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: String,
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}
