use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::llm_client::MODEL;
use crate::state::AppState;

/// GET /health
/// Returns service status plus the model and template the chain is bound to.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "saju-web",
        "model": MODEL,
        "template": state.config.template_path.display().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::chain::ReportChain;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::llm_client::ModelClient;
    use crate::template::PromptTemplate;

    struct NoopModel;

    #[async_trait]
    impl ModelClient for NoopModel {
        async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
            Err(AppError::ModelInvocation("not wired in tests".to_string()))
        }
    }

    fn test_state() -> AppState {
        AppState {
            chain: Arc::new(ReportChain::new(
                PromptTemplate::new(""),
                Arc::new(NoopModel),
            )),
            config: Config {
                gemini_api_key: "test-key".to_string(),
                template_path: "template.md".into(),
                model_timeout_secs: 120,
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_health_reports_model_and_template() {
        let Json(body) = health_handler(State(test_state())).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "saju-web");
        assert_eq!(body["model"], MODEL);
        assert_eq!(body["template"], "template.md");
    }
}
