use std::sync::Arc;

use crate::chain::ReportChain;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The chain (and the credential inside its model client) is
/// built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub chain: Arc<ReportChain>,
    pub config: Config,
}
