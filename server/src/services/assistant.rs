//! Health assistant service: visitor message -> LLM -> reply.
//!
//! DESIGN
//! ======
//! Each turn resolves a session handle, sends the clinic system instruction
//! plus the running history to the LLM, and appends the exchange only when
//! the call succeeds. A failed turn leaves history untouched so the model
//! never sees an unanswered question. The API key stays on the server; the
//! browser only ever sees the reply text and an opaque session id.
//!
//! An idle sweeper reclaims sessions whose widget was closed without the
//! teardown request reaching us.

use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use client::i18n::Language;

use crate::error::ErrorCode;
use crate::llm::config::env_parse;
use crate::llm::types::{LlmError, Message};
use crate::state::{AppState, AssistantSessions};

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

const DEFAULT_SESSION_IDLE_SECS: u64 = 1800;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Reply used when the model answers with no text.
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I didn't catch that. Could you please rephrase?";

/// Persona and guard rails for the clinic assistant.
pub const SYSTEM_INSTRUCTION: &str = "\
You are NYV AI, the virtual health assistant for NYV Care, a modern multi-specialty clinic.

Guidelines:
1. Always begin medical answers with a short disclaimer: \"I am an AI, not a doctor. Please consult a professional for medical advice.\"
2. Keep a professional, warm and reassuring tone. Be concise.
3. NYV Care offers Primary Care, Cardiology, Pediatrics, Neurology, Laboratory tests and 24/7 Emergency care. Telemedicine consultations are also available.
4. When a visitor wants an appointment, ask which department they need and how urgent it is. Then confirm the request and explain that a receptionist will call to finalize the time.
5. If the visitor describes an emergency (chest pain, difficulty breathing, severe bleeding, loss of consciousness), tell them to call 911 or go to the nearest emergency room immediately.
6. Never diagnose or prescribe. Offer general information and direct the visitor to a clinician.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("assistant is not configured")]
    NotConfigured,
    #[error("message is empty")]
    EmptyMessage,
    /// The model call failed. `session_id` is the handle the turn ran in so
    /// the caller can keep using it.
    #[error("Failed to connect to the AI assistant.")]
    Connection {
        session_id: Uuid,
        #[source]
        source: LlmError,
    },
}

impl ErrorCode for AssistantError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotConfigured => "E_ASSISTANT_NOT_CONFIGURED",
            Self::EmptyMessage => "E_EMPTY_MESSAGE",
            Self::Connection { .. } => "E_ASSISTANT_CONNECTION",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Connection { source, .. } if source.retryable())
    }
}

impl AssistantError {
    /// Session the failed turn belongs to, if one was resolved.
    #[must_use]
    pub fn session_id(&self) -> Option<Uuid> {
        match self {
            Self::Connection { session_id, .. } => Some(*session_id),
            Self::NotConfigured | Self::EmptyMessage => None,
        }
    }
}

/// A successful assistant turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub session_id: Uuid,
    pub text: String,
}

// =============================================================================
// TURNS
// =============================================================================

/// Run one visitor turn against the configured LLM.
///
/// The message is suffixed with the language directive for non-English
/// visitors. An unknown or absent `session_id` starts a fresh session.
///
/// # Errors
///
/// Returns [`AssistantError::EmptyMessage`] for blank input,
/// [`AssistantError::NotConfigured`] when no LLM is available, and
/// [`AssistantError::Connection`] when the model call fails.
pub async fn send_turn(
    state: &AppState,
    session_id: Option<Uuid>,
    message: &str,
    language: Language,
) -> Result<AssistantReply, AssistantError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(AssistantError::EmptyMessage);
    }
    let Some(llm) = state.llm.as_ref() else {
        return Err(AssistantError::NotConfigured);
    };

    let (session_id, mut history) = state.sessions.checkout(session_id, Instant::now()).await;
    let prompt = language.directed_prompt(message);
    info!(%session_id, %language, message_len = message.len(), history_len = history.len(), "assistant: turn received");

    history.push(Message::user(prompt.clone()));
    let response = match llm.chat(SYSTEM_INSTRUCTION, &history).await {
        Ok(response) => response,
        Err(source) => {
            warn!(%session_id, error = %source, code = source.error_code(), "assistant: llm call failed");
            return Err(AssistantError::Connection { session_id, source });
        }
    };

    info!(
        %session_id,
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        finish_reason = ?response.finish_reason,
        "assistant: reply received"
    );

    let text = if response.text.trim().is_empty() {
        EMPTY_REPLY_FALLBACK.to_owned()
    } else {
        response.text
    };

    let recorded = state
        .sessions
        .record(session_id, Message::user(prompt), Message::model(text.clone()), Instant::now())
        .await;
    if !recorded {
        debug!(%session_id, "assistant: session closed before reply landed");
    }

    Ok(AssistantReply { session_id, text })
}

/// Tear down a session. Unknown ids are ignored.
pub async fn close_session(state: &AppState, session_id: Uuid) -> bool {
    let removed = state.sessions.close(session_id).await;
    info!(%session_id, removed, "assistant: session closed");
    removed
}

// =============================================================================
// IDLE SWEEPER
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    pub idle: Duration,
    pub interval: Duration,
}

impl SweepConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let idle_secs = env_parse("ASSISTANT_SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS);
        let interval_secs = env_parse("ASSISTANT_SWEEP_INTERVAL_SECS", DEFAULT_SWEEP_INTERVAL_SECS).max(1);
        Self { idle: Duration::from_secs(idle_secs), interval: Duration::from_secs(interval_secs) }
    }
}

/// Spawn the background task that drops idle assistant sessions.
pub fn spawn_session_sweeper(sessions: AssistantSessions, config: SweepConfig) -> JoinHandle<()> {
    info!(idle_secs = config.idle.as_secs(), interval_secs = config.interval.as_secs(), "assistant session sweeper configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(config.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let removed = sessions.sweep_idle(Instant::now(), config.idle).await;
            if removed > 0 {
                info!(removed, "assistant: swept idle sessions");
            }
        }
    })
}
