use axum::{extract::State, response::Html, Form, Json};
use serde::Deserialize;
use tracing::info;

use crate::chain::ChainInput;
use crate::dashboard::render;
use crate::errors::AppError;
use crate::schema::SaJuReport;
use crate::state::AppState;

/// Raw form fields as submitted by the dashboard.
#[derive(Debug, Deserialize)]
pub struct ReportForm {
    pub name: String,
    pub country: String,
    pub city: String,
    pub birth_date: String,
    pub birth_time: String,
    pub gender: String,
    pub calendar_type: String,
    pub analysis_date: String,
}

impl From<ReportForm> for ChainInput {
    fn from(form: ReportForm) -> Self {
        ChainInput {
            yyyymmdd_hhmm: format!("{} {}", form.birth_date, form.birth_time),
            name: form.name,
            country: form.country,
            city: form.city,
            sex: form.gender,
            calendar_type: Some(form.calendar_type),
            analysis_date: Some(form.analysis_date),
        }
    }
}

/// GET /
pub async fn show_form() -> Html<String> {
    let today = chrono::Local::now().date_naive().to_string();
    Html(render::form_page(&today))
}

/// POST /report — form submission. Blocks until the model responds, then
/// renders the six report panels.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<ReportForm>,
) -> Result<Html<String>, AppError> {
    info!("dashboard request for '{}'", form.name);
    let input = ChainInput::from(form);
    let report = state.chain.invoke(&input).await?;
    Ok(Html(render::report_page(&report)))
}

/// POST /api/v1/report — JSON-in, JSON-out access to the same pipeline.
pub async fn generate_report(
    State(state): State<AppState>,
    Json(input): Json<ChainInput>,
) -> Result<Json<SaJuReport>, AppError> {
    let report = state.chain.invoke(&input).await?;
    Ok(Json(report))
}
