pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dashboard::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::show_form))
        .route("/report", post(handlers::submit_form))
        .route("/api/v1/report", post(handlers::generate_report))
        .with_state(state)
}
