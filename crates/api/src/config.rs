use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Debug-mode toggle; widens the default log filter (default: `false`).
    pub debug: bool,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// Serialized classifier path (default: `artifacts/model.json`).
    pub model_path: PathBuf,
    /// Serialized scaler path (default: `artifacts/scaler.json`).
    pub scaler_path: PathBuf,
    /// Serialized column list path (default: `artifacts/columns.json`).
    pub columns_path: PathBuf,
    /// Directory holding the landing page and its assets
    /// (default: `static`).
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default                  |
    /// |----------------|--------------------------|
    /// | `HOST`         | `0.0.0.0`                |
    /// | `PORT`         | `5000`                   |
    /// | `DEBUG`        | `false`                  |
    /// | `CORS_ORIGINS` | `http://localhost:5000`  |
    /// | `MODEL_PATH`   | `artifacts/model.json`   |
    /// | `SCALER_PATH`  | `artifacts/scaler.json`  |
    /// | `COLUMNS_PATH` | `artifacts/columns.json` |
    /// | `STATIC_DIR`   | `static`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let debug = std::env::var("DEBUG")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let model_path = env_path("MODEL_PATH", "artifacts/model.json");
        let scaler_path = env_path("SCALER_PATH", "artifacts/scaler.json");
        let columns_path = env_path("COLUMNS_PATH", "artifacts/columns.json");
        let static_dir = env_path("STATIC_DIR", "static");

        Self {
            host,
            port,
            debug,
            cors_origins,
            model_path,
            scaler_path,
            columns_path,
            static_dir,
        }
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    std::env::var(var).unwrap_or_else(|_| default.into()).into()
}
