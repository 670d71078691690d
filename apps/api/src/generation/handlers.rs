//! Axum route handlers for the Site Generation API.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::{generate_site, EntrySizes};
use crate::session::StoredArchive;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateSiteRequest {
    pub description: String,
    /// Reuse an existing session; omitted on the first activation.
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct GenerateSiteResponse {
    pub session_id: Uuid,
    pub status: String,
    pub archive_bytes: usize,
    pub entries: EntrySizes,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: Uuid,
    pub archive_ready: bool,
    pub archive_bytes: Option<usize>,
    pub generated_at: Option<DateTime<Utc>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sites/generate
///
/// Runs the generation pipeline and stores the resulting archive in the
/// session. A failure leaves any previously stored archive untouched.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateSiteRequest>,
) -> Result<Json<GenerateSiteResponse>, AppError> {
    let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);

    let site = generate_site(state.model.as_ref(), &request.description).await?;

    let stored = StoredArchive {
        bytes: site.archive,
        entries: site.entries,
        generated_at: Utc::now(),
    };
    let response = GenerateSiteResponse {
        session_id,
        status: "ready".to_string(),
        archive_bytes: stored.bytes.len(),
        entries: stored.entries.clone(),
        generated_at: stored.generated_at,
    };
    state.sessions.put(session_id, stored).await;

    Ok(Json(response))
}

/// GET /api/v1/sites/:session_id
///
/// Session status for the shell: whether an archive is ready for download.
/// Unknown sessions are simply "not ready" — the shell polls before any
/// generation has happened.
pub async fn handle_session_status(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Json<SessionStatusResponse> {
    let stored = state.sessions.get(session_id).await;

    Json(SessionStatusResponse {
        session_id,
        archive_ready: stored.is_some(),
        archive_bytes: stored.as_ref().map(|a| a.bytes.len()),
        generated_at: stored.map(|a| a.generated_at),
    })
}

/// GET /api/v1/sites/:session_id/archive
///
/// Serves the session's archive as `website.zip`. 404 until a generation has
/// succeeded for this session.
pub async fn handle_download_archive(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let stored = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No generated website for session {session_id}")))?;

    let headers = [
        (header::CONTENT_TYPE, "application/zip"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"website.zip\"",
        ),
    ];

    Ok((headers, stored.bytes).into_response())
}
