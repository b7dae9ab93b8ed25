use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type — one variant per pipeline failure kind.
///
/// Every stage aborts the whole request on failure: there is no partial
/// result, no repair loop, and no retry anywhere in the pipeline.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("Missing template variable '{0}'")]
    MissingVariable(String),

    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    #[error("Model output is not valid JSON: {0}")]
    MalformedOutput(String),

    #[error("Model output violates the report schema: {0}")]
    SchemaViolation(String),

    #[error("Failed to write '{path}': {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    "The service is misconfigured".to_string(),
                )
            }
            AppError::TemplateNotFound(path) => {
                tracing::error!("Template not found: {}", path.display());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TEMPLATE_NOT_FOUND",
                    "The prompt template is missing".to_string(),
                )
            }
            AppError::MissingVariable(name) => (
                StatusCode::BAD_REQUEST,
                "MISSING_VARIABLE",
                format!("Missing template variable '{name}'"),
            ),
            AppError::ModelInvocation(msg) => {
                tracing::error!("Model invocation failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_INVOCATION_ERROR",
                    "The model service could not be reached".to_string(),
                )
            }
            AppError::MalformedOutput(msg) => {
                tracing::error!("Malformed model output: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_OUTPUT",
                    "The model did not return valid JSON".to_string(),
                )
            }
            AppError::SchemaViolation(msg) => {
                tracing::error!("Schema violation: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SCHEMA_VIOLATION",
                    "The model response did not match the report schema".to_string(),
                )
            }
            AppError::Persistence { path, source } => {
                tracing::error!("Persistence error for {}: {source}", path.display());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PERSISTENCE_ERROR",
                    "Failed to write a report artifact".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
