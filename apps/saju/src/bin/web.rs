//! Dashboard entry point — serves the input form and renders the six
//! report panels per submission. Each submission re-invokes the full chain.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use saju::chain::build_chain;
use saju::config::Config;
use saju::llm_client::{self, GeminiClient};
use saju::routes::build_router;
use saju::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting saju-web v{}", env!("CARGO_PKG_VERSION"));

    let model = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        Duration::from_secs(config.model_timeout_secs),
    ));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let chain = Arc::new(build_chain(&config, model)?);
    info!(
        "prompt template loaded from {}",
        config.template_path.display()
    );

    let state = AppState {
        chain,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
