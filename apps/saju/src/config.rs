use std::path::PathBuf;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
/// The API key is read once at startup and treated as read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub template_path: PathBuf,
    /// Explicit timeout for the model call. The original design inherited
    /// no timeout at all; here it is configurable via MODEL_TIMEOUT_SECS.
    pub model_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            template_path: std::env::var("TEMPLATE_PATH")
                .unwrap_or_else(|_| "template.md".to_string())
                .into(),
            model_timeout_secs: std::env::var("MODEL_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .map_err(|_| {
                    AppError::Configuration(
                        "MODEL_TIMEOUT_SECS must be a number of seconds".to_string(),
                    )
                })?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .map_err(|_| {
                    AppError::Configuration("PORT must be a valid port number".to_string())
                })?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a required environment variable, rejecting empty values.
fn require_env(key: &str) -> Result<String, AppError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Configuration(format!(
            "Required environment variable '{key}' is not set"
        ))),
    }
}
