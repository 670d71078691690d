use std::sync::Arc;

use crate::llm_client::SiteModel;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model provider behind the trait so tests can substitute a canned one.
    pub model: Arc<dyn SiteModel>,
    /// Per-session archive state, threaded explicitly instead of living in a
    /// process-wide global.
    pub sessions: SessionStore,
}
