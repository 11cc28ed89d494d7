use super::*;
use crate::llm::types::{ChatResponse, LlmChat, LlmError, Message, Role};
use crate::state::test_helpers;
use std::sync::{Arc, Mutex};

// =========================================================================
// MockLlm
// =========================================================================

struct MockLlm {
    responses: Mutex<Vec<Result<ChatResponse, LlmError>>>,
    seen: Mutex<Vec<(String, Vec<Message>)>>,
}

impl MockLlm {
    fn new(responses: Vec<Result<ChatResponse, LlmError>>) -> Arc<Self> {
        Arc::new(Self { responses: Mutex::new(responses), seen: Mutex::new(Vec::new()) })
    }

    fn calls(&self) -> Vec<(String, Vec<Message>)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(&self, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.seen.lock().unwrap().push((system.to_owned(), messages.to_vec()));
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() { Ok(reply("ok")) } else { responses.remove(0) }
    }
}

fn reply(text: &str) -> ChatResponse {
    ChatResponse {
        text: text.into(),
        model: "mock".into(),
        finish_reason: Some("STOP".into()),
        input_tokens: 3,
        output_tokens: 5,
    }
}

fn state_with(mock: &Arc<MockLlm>) -> AppState {
    test_helpers::test_app_state_with_llm(mock.clone())
}

// =========================================================================
// send_turn
// =========================================================================

#[tokio::test]
async fn first_turn_creates_session_and_records_exchange() {
    let mock = MockLlm::new(vec![Ok(reply("Hello! How can I help?"))]);
    let state = state_with(&mock);

    let out = send_turn(&state, None, "hi", Language::En).await.unwrap();

    assert_eq!(out.text, "Hello! How can I help?");
    let history = state.sessions.history(out.session_id).await.unwrap();
    assert_eq!(history, vec![Message::user("hi"), Message::model("Hello! How can I help?")]);
}

#[tokio::test]
async fn system_instruction_is_sent() {
    let mock = MockLlm::new(vec![]);
    let state = state_with(&mock);

    send_turn(&state, None, "hi", Language::En).await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, SYSTEM_INSTRUCTION);
    assert!(SYSTEM_INSTRUCTION.contains("911"));
    assert!(SYSTEM_INSTRUCTION.contains("not a doctor"));
}

#[tokio::test]
async fn non_english_turn_carries_language_directive() {
    let mock = MockLlm::new(vec![]);
    let state = state_with(&mock);

    send_turn(&state, None, "hello", Language::Hi).await.unwrap();

    let calls = mock.calls();
    let last = calls[0].1.last().unwrap();
    assert_eq!(last.role, Role::User);
    assert_eq!(last.text, "hello (Please reply in Hindi)");
}

#[tokio::test]
async fn message_is_trimmed_before_sending() {
    let mock = MockLlm::new(vec![]);
    let state = state_with(&mock);

    send_turn(&state, None, "  book a visit \n", Language::En).await.unwrap();

    assert_eq!(mock.calls()[0].1, vec![Message::user("book a visit")]);
}

#[tokio::test]
async fn follow_up_turn_sends_prior_history() {
    let mock = MockLlm::new(vec![Ok(reply("first answer")), Ok(reply("second answer"))]);
    let state = state_with(&mock);

    let first = send_turn(&state, None, "one", Language::En).await.unwrap();
    let second = send_turn(&state, Some(first.session_id), "two", Language::En).await.unwrap();

    assert_eq!(second.session_id, first.session_id);
    let calls = mock.calls();
    assert_eq!(
        calls[1].1,
        vec![Message::user("one"), Message::model("first answer"), Message::user("two")]
    );
}

#[tokio::test]
async fn unknown_session_starts_fresh() {
    let mock = MockLlm::new(vec![]);
    let state = state_with(&mock);
    let stale = Uuid::new_v4();

    let out = send_turn(&state, Some(stale), "hi", Language::En).await.unwrap();

    assert_ne!(out.session_id, stale);
    assert_eq!(mock.calls()[0].1.len(), 1);
}

#[tokio::test]
async fn empty_reply_uses_fallback() {
    let mock = MockLlm::new(vec![Ok(reply("   "))]);
    let state = state_with(&mock);

    let out = send_turn(&state, None, "hi", Language::En).await.unwrap();

    assert_eq!(out.text, EMPTY_REPLY_FALLBACK);
}

#[tokio::test]
async fn failed_turn_is_not_recorded() {
    let mock = MockLlm::new(vec![
        Ok(reply("first")),
        Err(LlmError::ApiResponse { status: 500, body: "boom".into() }),
    ]);
    let state = state_with(&mock);

    let first = send_turn(&state, None, "one", Language::En).await.unwrap();
    let err = send_turn(&state, Some(first.session_id), "two", Language::En).await.unwrap_err();

    assert!(matches!(err, AssistantError::Connection { .. }));
    assert_eq!(err.session_id(), Some(first.session_id));
    assert_eq!(err.to_string(), "Failed to connect to the AI assistant.");
    assert!(err.retryable());
    let history = state.sessions.history(first.session_id).await.unwrap();
    assert_eq!(history, vec![Message::user("one"), Message::model("first")]);
}

#[tokio::test]
async fn failed_first_turn_still_returns_session() {
    let mock = MockLlm::new(vec![Err(LlmError::ApiRequest("timeout".into()))]);
    let state = state_with(&mock);

    let err = send_turn(&state, None, "hi", Language::En).await.unwrap_err();

    let id = err.session_id().unwrap();
    assert_eq!(state.sessions.history(id).await, Some(Vec::new()));
}

#[tokio::test]
async fn blank_message_rejected_without_llm_call() {
    let mock = MockLlm::new(vec![]);
    let state = state_with(&mock);

    let err = send_turn(&state, None, "   ", Language::En).await.unwrap_err();

    assert!(matches!(err, AssistantError::EmptyMessage));
    assert!(mock.calls().is_empty());
    assert!(state.sessions.is_empty().await);
}

#[tokio::test]
async fn missing_llm_is_not_configured() {
    let state = test_helpers::test_app_state();

    let err = send_turn(&state, None, "hi", Language::En).await.unwrap_err();

    assert!(matches!(err, AssistantError::NotConfigured));
    assert_eq!(err.error_code(), "E_ASSISTANT_NOT_CONFIGURED");
    assert!(err.session_id().is_none());
    assert!(state.sessions.is_empty().await);
}

// =========================================================================
// close_session
// =========================================================================

#[tokio::test]
async fn close_session_discards_history() {
    let mock = MockLlm::new(vec![]);
    let state = state_with(&mock);
    let out = send_turn(&state, None, "hi", Language::En).await.unwrap();

    assert!(close_session(&state, out.session_id).await);
    assert!(!close_session(&state, out.session_id).await);
    assert_eq!(state.sessions.history(out.session_id).await, None);
}

// =========================================================================
// sweeper
// =========================================================================

#[test]
fn sweep_config_defaults() {
    let config = SweepConfig::from_env();
    assert!(config.interval >= Duration::from_secs(1));
    assert!(config.idle > Duration::ZERO);
}

#[tokio::test]
async fn sweeper_reclaims_idle_sessions() {
    let state = test_helpers::test_app_state();
    state.sessions.checkout(None, Instant::now()).await;

    let config = SweepConfig { idle: Duration::ZERO, interval: Duration::from_millis(10) };
    let handle = spawn_session_sweeper(state.sessions.clone(), config);
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(state.sessions.is_empty().await);
    handle.abort();
}
