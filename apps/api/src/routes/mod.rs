pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::shell_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/sites/generate", post(handlers::handle_generate))
        .route(
            "/api/v1/sites/:session_id",
            get(handlers::handle_session_status),
        )
        .route(
            "/api/v1/sites/:session_id/archive",
            get(handlers::handle_download_archive),
        )
        .with_state(state)
}
