//! Handler for the health endpoint.
//!
//! Always answers 200; component failures are reported inline so a probe
//! can distinguish "service down" from "service up, database unreachable".

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::response::elapsed_ms;
use crate::state::AppState;

/// GET /health -- process health with per-component detail.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let started = Instant::now();

    let database = match glucospect_db::health_check(&state.pool).await {
        Ok(()) => json!({ "status": "OK" }),
        Err(err) => {
            tracing::error!(error = %err, "Database health check failed");
            json!({ "status": "ERROR", "message": "Database unreachable" })
        }
    };

    // The artifacts were validated at startup and are immutable for the
    // process lifetime, so being here means they are loaded.
    let features = state.inference.feature_count();
    let model = json!({ "status": "OK", "features": features });
    let scaler = json!({ "status": "OK", "features": features });

    let status = if database["status"] == "OK" {
        "healthy"
    } else {
        "degraded"
    };

    Json(json!({
        "status": status,
        "timestamp": Utc::now().to_rfc3339(),
        "components": {
            "database": database,
            "model": model,
            "scaler": scaler,
        },
        "memory": process_memory(),
        "response_time_ms": elapsed_ms(started),
    }))
}

/// Resident set size of this process in megabytes, read from
/// `/proc/self/status`. Reported as unavailable off Linux.
fn process_memory() -> Value {
    match rss_kb() {
        Some(kb) => json!({ "rss_mb": (kb as f64 / 1024.0 * 100.0).round() / 100.0 }),
        None => json!({ "status": "unavailable" }),
    }
}

#[cfg(target_os = "linux")]
fn rss_kb() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    status
        .lines()
        .find(|line| line.starts_with("VmRSS:"))?
        .split_whitespace()
        .nth(1)?
        .parse()
        .ok()
}

#[cfg(not(target_os = "linux"))]
fn rss_kb() -> Option<u64> {
    None
}
