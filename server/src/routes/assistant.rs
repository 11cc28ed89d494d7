//! Health assistant routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::warn;
use uuid::Uuid;

use client::net::types::{AssistantErrorResponse, AssistantTurnRequest, AssistantTurnResponse};

use crate::error::ErrorCode;
use crate::services::assistant::{self, AssistantError};
use crate::state::AppState;

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

/// `POST /api/assistant/turns`: send one visitor message.
pub async fn post_turn(State(state): State<AppState>, Json(body): Json<AssistantTurnRequest>) -> Response {
    match assistant::send_turn(&state, body.session_id, &body.message, body.language).await {
        Ok(reply) => Json(AssistantTurnResponse { session_id: reply.session_id, reply: reply.text }).into_response(),
        Err(err) => {
            let status = assistant_error_to_status(&err);
            warn!(
                status = status.as_u16(),
                code = err.error_code(),
                retryable = err.retryable(),
                error = %err,
                "assistant: turn rejected"
            );
            (status, Json(error_body(&err))).into_response()
        }
    }
}

/// `DELETE /api/assistant/sessions/{id}`: tear down a session.
pub async fn delete_session(State(state): State<AppState>, Path(session_id): Path<Uuid>) -> StatusCode {
    assistant::close_session(&state, session_id).await;
    StatusCode::NO_CONTENT
}

fn error_body(err: &AssistantError) -> AssistantErrorResponse {
    AssistantErrorResponse {
        session_id: err.session_id(),
        error: err.to_string(),
        code: Some(err.error_code().to_owned()),
    }
}

fn assistant_error_to_status(err: &AssistantError) -> StatusCode {
    match err {
        AssistantError::EmptyMessage => StatusCode::BAD_REQUEST,
        AssistantError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        AssistantError::Connection { .. } => StatusCode::BAD_GATEWAY,
    }
}
