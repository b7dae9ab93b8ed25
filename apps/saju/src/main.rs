//! CLI entry point — runs one sample request through the full chain,
//! prints both renditions, and writes `report.md` / `report.json`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use saju::chain::{build_chain, run_report, ChainInput};
use saju::config::Config;
use saju::llm_client::{self, GeminiClient};

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

    info!("Starting saju v{}", env!("CARGO_PKG_VERSION"));

    let model = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        Duration::from_secs(config.model_timeout_secs),
    ));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let chain = build_chain(&config, model)?;

    let input = ChainInput {
        name: "조요셉".to_string(),
        country: "대한민국".to_string(),
        city: "전주".to_string(),
        yyyymmdd_hhmm: "2003-01-24 06:20".to_string(),
        sex: "남성".to_string(),
        calendar_type: None,
        analysis_date: None,
    };

    let (markdown, json) = run_report(&chain, &input, "report.md", "report.json").await?;

    println!("========== (A) Markdown 리포트 ==========");
    println!("{markdown}");
    println!("========== (B) JSON ==========");
    println!("{json}");

    info!("report.md and report.json written");

    Ok(())
}
