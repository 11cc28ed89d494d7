//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional LLM client and the assistant session store. A
//! session handle is the running history the model sees on every turn; it
//! is created on first use and lives until the widget closes it or the idle
//! sweeper reclaims it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::llm::LlmChat;
use crate::llm::types::Message;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

// =============================================================================
// ASSISTANT SESSIONS
// =============================================================================

/// One visitor conversation as the model sees it.
#[derive(Debug, Clone)]
pub struct AssistantSession {
    /// Alternating user/model messages, oldest first.
    pub history: Vec<Message>,
    pub last_active: Instant,
}

impl AssistantSession {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { history: Vec::new(), last_active: now }
    }
}

/// Concurrent map of live assistant sessions. Clones share the same map.
#[derive(Clone, Default)]
pub struct AssistantSessions {
    inner: Arc<RwLock<HashMap<Uuid, AssistantSession>>>,
}

impl AssistantSessions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `requested` to a live session, creating one when it is absent
    /// or unknown. Returns the session id and a snapshot of its history.
    pub async fn checkout(&self, requested: Option<Uuid>, now: Instant) -> (Uuid, Vec<Message>) {
        let mut sessions = self.inner.write().await;
        if let Some(id) = requested {
            if let Some(session) = sessions.get_mut(&id) {
                session.last_active = now;
                return (id, session.history.clone());
            }
        }
        let id = Uuid::new_v4();
        sessions.insert(id, AssistantSession::new(now));
        (id, Vec::new())
    }

    /// Append a completed exchange. Returns `false` if the session was
    /// closed while the call was in flight.
    pub async fn record(&self, id: Uuid, user: Message, reply: Message, now: Instant) -> bool {
        let mut sessions = self.inner.write().await;
        let Some(session) = sessions.get_mut(&id) else {
            return false;
        };
        session.history.push(user);
        session.history.push(reply);
        session.last_active = now;
        true
    }

    /// Tear down a session. Returns whether it existed.
    pub async fn close(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    /// Drop sessions idle for at least `idle`. Returns how many were removed.
    pub async fn sweep_idle(&self, now: Instant, idle: Duration) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now.saturating_duration_since(s.last_active) < idle);
        before - sessions.len()
    }

    #[cfg(test)]
    pub async fn history(&self, id: Uuid) -> Option<Vec<Message>> {
        self.inner.read().await.get(&id).map(|s| s.history.clone())
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if the API key is not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub sessions: AssistantSessions,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm, sessions: AssistantSessions::new() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` with no LLM configured.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None)
    }

    /// Create a test `AppState` with a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn LlmChat>) -> AppState {
        AppState::new(Some(llm))
    }
}
