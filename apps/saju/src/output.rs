//! Output parser — coerces raw model text into a validated `SaJuReport`.
//!
//! Two-stage failure taxonomy: text that is not JSON at all is
//! `MalformedOutput`; JSON that does not decode into the report schema (or
//! fails the narrative length constraints) is `SchemaViolation`. Either way
//! the whole invocation aborts — there is no partial-result path.

use crate::errors::AppError;
use crate::schema::{validate_report, SaJuReport};

/// Parses and validates a raw model response.
pub fn parse_report(raw: &str) -> Result<SaJuReport, AppError> {
    let text = strip_json_fences(raw);

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| AppError::MalformedOutput(e.to_string()))?;

    let report: SaJuReport =
        serde_json::from_value(value).map_err(|e| AppError::SchemaViolation(e.to_string()))?;

    validate_report(&report)?;
    Ok(report)
}

/// Strips ```json ... ``` or ``` ... ``` code fences the model may wrap
/// around its output despite instructions.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
