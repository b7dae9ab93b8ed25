//! Report chain — sequences prompt rendering, the model call, and response
//! parsing into one invocable unit.
//!
//! Flow: render template → model.generate → parse/validate → SaJuReport.
//! This is a pure composition: no retry, no caching, no partial results.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::ModelClient;
use crate::output::parse_report;
use crate::prompts::FORMAT_INSTRUCTIONS;
use crate::report::{generate_markdown, save_json, save_markdown, to_json_pretty};
use crate::schema::SaJuReport;
use crate::template::PromptTemplate;

/// Per-request variables the template expects.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ChainInput {
    pub name: String,
    pub country: String,
    pub city: String,
    /// Combined "YYYY-MM-DD HH:MM" birth moment.
    pub yyyymmdd_hhmm: String,
    pub sex: String,
    pub calendar_type: Option<String>,
    pub analysis_date: Option<String>,
}

impl ChainInput {
    fn to_vars(&self) -> HashMap<String, String> {
        let mut vars = HashMap::from([
            ("name".to_string(), self.name.clone()),
            ("country".to_string(), self.country.clone()),
            ("city".to_string(), self.city.clone()),
            ("yyyymmdd_hhmm".to_string(), self.yyyymmdd_hhmm.clone()),
            ("sex".to_string(), self.sex.clone()),
        ]);
        if let Some(calendar_type) = &self.calendar_type {
            vars.insert("calendar_type".to_string(), calendar_type.clone());
        }
        if let Some(analysis_date) = &self.analysis_date {
            vars.insert("analysis_date".to_string(), analysis_date.clone());
        }
        vars
    }
}

/// Template + model + parser composed into a single `invoke`.
pub struct ReportChain {
    prompt: PromptTemplate,
    model: Arc<dyn ModelClient>,
}

impl ReportChain {
    pub fn new(prompt: PromptTemplate, model: Arc<dyn ModelClient>) -> Self {
        Self { prompt, model }
    }

    /// Runs the full pipeline for one request. Any stage failure aborts the
    /// whole invocation.
    pub async fn invoke(&self, input: &ChainInput) -> Result<SaJuReport, AppError> {
        let prompt = self.prompt.render(&input.to_vars())?;
        debug!("prompt rendered: {} chars", prompt.chars().count());

        let raw = self.model.generate(&prompt).await?;
        debug!("model returned {} chars", raw.chars().count());

        let report = parse_report(&raw)?;
        info!("report validated for '{}'", input.name);
        Ok(report)
    }
}

/// Builds the standard chain: template loaded from `config.template_path`,
/// with `today` and the format instructions bound as partials.
pub fn build_chain(config: &Config, model: Arc<dyn ModelClient>) -> Result<ReportChain, AppError> {
    let prompt = PromptTemplate::load(&config.template_path)?
        .partial("today", chrono::Local::now().date_naive().to_string())
        .partial("format_instructions", FORMAT_INSTRUCTIONS);
    Ok(ReportChain::new(prompt, model))
}

/// Invokes the chain and persists both artifacts. Nothing is written unless
/// the whole pipeline succeeded. Returns the rendered (markdown, json) pair.
pub async fn run_report(
    chain: &ReportChain,
    input: &ChainInput,
    markdown_path: impl AsRef<Path>,
    json_path: impl AsRef<Path>,
) -> Result<(String, String), AppError> {
    let report = chain.invoke(input).await?;

    let markdown = generate_markdown(&report);
    let json = to_json_pretty(&report)?;

    save_markdown(&markdown, markdown_path)?;
    save_json(&report, json_path)?;

    Ok((markdown, json))
}
