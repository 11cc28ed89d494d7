//! REST helpers for the assistant API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs that report failure, since the widget only
//! talks to the assistant from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into an `AssistantErrorResponse` so the widget
//! renders one generic error bubble instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use uuid::Uuid;

use super::types::{AssistantErrorResponse, AssistantTurnRequest, AssistantTurnResponse};
use crate::state::conversation::{AssistantTransport, PendingTurn, TurnOutcome};

#[cfg(any(test, feature = "hydrate"))]
const ASSISTANT_TURNS_ENDPOINT: &str = "/api/assistant/turns";

#[cfg(any(test, feature = "hydrate"))]
fn assistant_session_endpoint(session_id: Uuid) -> String {
    format!("/api/assistant/sessions/{session_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn turn_failed_message(status: u16) -> String {
    format!("assistant turn failed: {status}")
}

fn turn_request(turn: &PendingTurn) -> AssistantTurnRequest {
    AssistantTurnRequest {
        session_id: turn.session_id,
        message: turn.text.clone(),
        language: turn.language,
    }
}

fn turn_outcome(result: Result<AssistantTurnResponse, AssistantErrorResponse>) -> TurnOutcome {
    match result {
        Ok(resp) => TurnOutcome::Reply { session_id: resp.session_id, text: resp.reply },
        Err(err) => TurnOutcome::Failed { session_id: err.session_id },
    }
}

/// Send one user turn via `POST /api/assistant/turns`.
///
/// # Errors
///
/// Returns the server's error body, or a synthesized one when the request
/// never produced a parseable response.
pub async fn send_assistant_turn(
    request: &AssistantTurnRequest,
) -> Result<AssistantTurnResponse, AssistantErrorResponse> {
    #[cfg(feature = "hydrate")]
    {
        let transport_error = |e: gloo_net::Error| AssistantErrorResponse {
            session_id: request.session_id,
            error: e.to_string(),
            code: None,
        };
        let resp = gloo_net::http::Request::post(ASSISTANT_TURNS_ENDPOINT)
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            let status = resp.status();
            return Err(resp.json::<AssistantErrorResponse>().await.unwrap_or(AssistantErrorResponse {
                session_id: request.session_id,
                error: turn_failed_message(status),
                code: None,
            }));
        }
        resp.json::<AssistantTurnResponse>().await.map_err(transport_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AssistantErrorResponse {
            session_id: request.session_id,
            error: "not available on server".to_owned(),
            code: None,
        })
    }
}

/// Tear down a server-side session via `DELETE /api/assistant/sessions/{id}`.
pub async fn close_assistant_session(session_id: Uuid) {
    #[cfg(feature = "hydrate")]
    {
        let url = assistant_session_endpoint(session_id);
        if let Err(e) = gloo_net::http::Request::delete(&url).send().await {
            log::warn!("closing assistant session {session_id} failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
    }
}

/// Browser transport backed by the assistant HTTP API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl AssistantTransport for HttpTransport {
    async fn send(&self, turn: &PendingTurn) -> TurnOutcome {
        let result = send_assistant_turn(&turn_request(turn)).await;
        #[cfg(feature = "hydrate")]
        if let Err(err) = &result {
            log::warn!("assistant turn failed: {}", err.error);
        }
        turn_outcome(result)
    }
}
