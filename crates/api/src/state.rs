use std::sync::Arc;

use glucospect_core::inference::InferenceService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The inference service is loaded once at startup and treated
/// as immutable for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: glucospect_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Loaded classifier + scaler + column schema.
    pub inference: Arc<InferenceService>,
}
