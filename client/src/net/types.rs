//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server depends on this crate with the `ssr` feature and uses these
//! same structs for its Axum extractors and responses, so both sides agree
//! on field names without a separate schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Language;

/// Body of `POST /api/assistant/turns`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantTurnRequest {
    /// Session to continue. Absent on the first turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    pub message: String,
    #[serde(default)]
    pub language: Language,
}

/// Successful reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantTurnResponse {
    pub session_id: Uuid,
    pub reply: String,
}

/// Error body for any non-2xx turn response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    pub error: String,
    /// Grepable error code, e.g. `E_ASSISTANT_CONNECTION`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
