//! Conversation state for the health assistant widget.
//!
//! DESIGN
//! ======
//! A turn is split into two synchronous halves so reactive signals never
//! hold a borrow across an await point:
//!
//! - `begin_turn` validates input, appends the user turn, and marks busy.
//! - `complete_turn` appends exactly one reply or error turn and clears busy.
//!
//! `send_turn` composes both halves over an `AssistantTransport` for callers
//! that own the state outright (tests, non-reactive hosts).
//!
//! Dismissing the widget bumps `generation`; a completion carrying an older
//! generation belongs to a discarded conversation and is dropped.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use std::future::Future;

use uuid::Uuid;

use crate::i18n::Language;

/// Originator of a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Assistant,
}

/// One message in the widget history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub text: String,
    pub is_error: bool,
}

impl ChatTurn {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: TurnRole::User, text: text.into(), is_error: false }
    }

    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self { role: TurnRole::Assistant, text: text.into(), is_error: false }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { role: TurnRole::Assistant, text: text.into(), is_error: true }
    }
}

/// Outgoing request produced by `begin_turn`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTurn {
    pub text: String,
    pub language: Language,
    pub session_id: Option<Uuid>,
    pub generation: u64,
}

/// Result of one round trip to the assistant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Reply { session_id: Uuid, text: String },
    Failed { session_id: Option<Uuid> },
}

/// Delivers a pending turn to the assistant.
pub trait AssistantTransport {
    fn send(&self, turn: &PendingTurn) -> impl Future<Output = TurnOutcome>;
}

/// Widget history plus in-flight bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    pub turns: Vec<ChatTurn>,
    pub busy: bool,
    pub session_id: Option<Uuid>,
    pub generation: u64,
}

impl ConversationState {
    /// Seed the assistant greeting if nothing has been said yet.
    pub fn greet(&mut self, text: &str) {
        if self.turns.is_empty() {
            self.turns.push(ChatTurn::assistant(text));
        }
    }

    /// Start a turn. Returns `None` without touching state when `text` is
    /// blank or a request is already outstanding.
    pub fn begin_turn(&mut self, text: &str, language: Language) -> Option<PendingTurn> {
        let text = text.trim();
        if text.is_empty() || self.busy {
            return None;
        }
        self.turns.push(ChatTurn::user(text));
        self.busy = true;
        Some(PendingTurn {
            text: text.to_owned(),
            language,
            session_id: self.session_id,
            generation: self.generation,
        })
    }

    /// Finish a turn started by `begin_turn`. Returns `false` when the
    /// completion is stale and was dropped.
    pub fn complete_turn(&mut self, pending: &PendingTurn, outcome: TurnOutcome, error_text: &str) -> bool {
        if pending.generation != self.generation {
            return false;
        }
        match outcome {
            TurnOutcome::Reply { session_id, text } => {
                self.session_id = Some(session_id);
                self.turns.push(ChatTurn::assistant(text));
            }
            TurnOutcome::Failed { session_id } => {
                if session_id.is_some() {
                    self.session_id = session_id;
                }
                self.turns.push(ChatTurn::error(error_text));
            }
        }
        self.busy = false;
        true
    }

    /// Full turn over `transport`. No-op under the same conditions as
    /// `begin_turn`.
    pub async fn send_turn<T: AssistantTransport>(
        &mut self,
        text: &str,
        language: Language,
        error_text: &str,
        transport: &T,
    ) {
        let Some(pending) = self.begin_turn(text, language) else {
            return;
        };
        let outcome = transport.send(&pending).await;
        self.complete_turn(&pending, outcome, error_text);
    }

    /// Dismiss the conversation. History is discarded and any in-flight
    /// reply is orphaned. Returns the server session to tear down.
    pub fn reset(&mut self) -> Option<Uuid> {
        self.turns.clear();
        self.busy = false;
        self.generation = self.generation.wrapping_add(1);
        self.session_id.take()
    }
}
