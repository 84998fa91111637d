//! Session lifecycle handlers: create, inspect, delete.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use talentscout_core::chat::session::ScreeningSession;
use talentscout_types::chat::{SessionState, Turn};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Response payload for session creation.
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub greeting: String,
}

/// Response payload for the transcript view.
#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub session_id: Uuid,
    pub state: SessionState,
    pub turns: Vec<Turn>,
}

/// POST /api/v1/sessions - Start a new screening session.
///
/// Creates the session, runs the greeting turn against the model, and
/// registers the session before returning. The greeting is Turn 0 of the
/// transcript.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<ApiResponse<CreateSessionResponse>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let mut session = ScreeningSession::new();
    let outcome = state.engine.open(&mut session).await?;
    let session_id = session.id();

    state
        .sessions
        .insert(session_id, Arc::new(Mutex::new(session)));
    info!(%session_id, "Screening session created");

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        CreateSessionResponse {
            session_id,
            greeting: outcome.reply.text,
        },
        request_id,
        elapsed,
    )
    .with_link("self", &format!("/api/v1/sessions/{session_id}"))
    .with_link("messages", &format!("/api/v1/sessions/{session_id}/messages")))
}

/// GET /api/v1/sessions/{id}/transcript - Full ordered transcript.
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<TranscriptResponse>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session_id = parse_uuid(&id)?;
    let handle = state.session(&session_id).ok_or(AppError::SessionNotFound)?;
    let session = handle.lock().await;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        TranscriptResponse {
            session_id,
            state: session.state(),
            turns: session.transcript().to_vec(),
        },
        request_id,
        elapsed,
    ))
}

/// DELETE /api/v1/sessions/{id} - Discard a session and its transcript.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session_id = parse_uuid(&id)?;
    state
        .sessions
        .remove(&session_id)
        .ok_or(AppError::SessionNotFound)?;
    info!(%session_id, "Screening session deleted");

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        serde_json::json!({ "deleted": true }),
        request_id,
        elapsed,
    ))
}

/// Parse a path segment as a UUID, mapping failure to a validation error.
pub fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::Validation(format!("Invalid session id: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uuid_valid() {
        let id = Uuid::now_v7();
        assert_eq!(parse_uuid(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_uuid_invalid() {
        assert!(matches!(
            parse_uuid("not-a-uuid"),
            Err(AppError::Validation(_))
        ));
    }
}
