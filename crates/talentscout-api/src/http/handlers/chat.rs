//! Message handler: one dialogue-loop turn per request.

use std::collections::BTreeMap;
use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use talentscout_types::chat::Turn;
use talentscout_types::emotion::SentimentReport;

use crate::http::error::AppError;
use crate::http::handlers::session::parse_uuid;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for a candidate message.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

/// Sentiment side channel as rendered to the UI. Never part of the
/// transcript.
#[derive(Debug, Serialize)]
pub struct SentimentView {
    pub dominant: String,
    pub scores: BTreeMap<String, f64>,
}

impl From<SentimentReport> for SentimentView {
    fn from(report: SentimentReport) -> Self {
        Self {
            dominant: report.dominant_str(),
            scores: report
                .scores
                .iter()
                .map(|(label, score)| (label.to_string(), *score))
                .collect(),
        }
    }
}

/// Response payload for one turn.
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub reply: Turn,
    pub ended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentView>,
}

/// POST /api/v1/sessions/{id}/messages - Submit one candidate message.
///
/// Runs a full turn: exit detection, model call, sentiment annotation.
/// Turns within a session are serialized by the per-session lock;
/// messages sent after the session ended yield 409 SESSION_ENDED.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SendMessageRequest>,
) -> Result<ApiResponse<SendMessageResponse>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    if body.message.trim().is_empty() {
        return Err(AppError::Validation("Message must not be empty".to_string()));
    }

    let session_id = parse_uuid(&id)?;
    // Clone the handle out before awaiting so the DashMap shard lock is
    // not held across the model call.
    let handle = state.session(&session_id).ok_or(AppError::SessionNotFound)?;
    let mut session = handle.lock().await;

    let outcome = state.engine.step(&mut session, &body.message).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        SendMessageResponse {
            reply: outcome.reply,
            ended: outcome.ended,
            sentiment: outcome.sentiment.map(SentimentView::from),
        },
        request_id,
        elapsed,
    ))
}
