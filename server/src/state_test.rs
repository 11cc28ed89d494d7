use super::*;

// =============================================================================
// checkout
// =============================================================================

#[tokio::test]
async fn checkout_without_id_creates_session() {
    let sessions = AssistantSessions::new();
    let (id, history) = sessions.checkout(None, Instant::now()).await;
    assert!(history.is_empty());
    assert_eq!(sessions.history(id).await, Some(Vec::new()));
}

#[tokio::test]
async fn checkout_existing_id_returns_history() {
    let sessions = AssistantSessions::new();
    let now = Instant::now();
    let (id, _) = sessions.checkout(None, now).await;
    sessions.record(id, Message::user("hi"), Message::model("hello"), now).await;

    let (again, history) = sessions.checkout(Some(id), now).await;
    assert_eq!(again, id);
    assert_eq!(history, vec![Message::user("hi"), Message::model("hello")]);
    assert!(!sessions.is_empty().await);
}

#[tokio::test]
async fn checkout_unknown_id_starts_fresh_session() {
    let sessions = AssistantSessions::new();
    let stale = Uuid::new_v4();
    let (id, history) = sessions.checkout(Some(stale), Instant::now()).await;
    assert_ne!(id, stale);
    assert!(history.is_empty());
}

// =============================================================================
// record / close
// =============================================================================

#[tokio::test]
async fn record_after_close_is_dropped() {
    let sessions = AssistantSessions::new();
    let now = Instant::now();
    let (id, _) = sessions.checkout(None, now).await;
    assert!(sessions.close(id).await);

    assert!(!sessions.record(id, Message::user("a"), Message::model("b"), now).await);
    assert!(sessions.is_empty().await);
}

#[tokio::test]
async fn close_is_idempotent() {
    let sessions = AssistantSessions::new();
    let (id, _) = sessions.checkout(None, Instant::now()).await;
    assert!(sessions.close(id).await);
    assert!(!sessions.close(id).await);
}

// =============================================================================
// sweep_idle
// =============================================================================

#[tokio::test]
async fn sweep_removes_only_idle_sessions() {
    let sessions = AssistantSessions::new();
    let start = Instant::now();
    let (old, _) = sessions.checkout(None, start).await;
    let later = start + Duration::from_secs(100);
    let (fresh, _) = sessions.checkout(None, later).await;

    let removed = sessions.sweep_idle(later, Duration::from_secs(60)).await;

    assert_eq!(removed, 1);
    assert_eq!(sessions.history(old).await, None);
    assert!(sessions.history(fresh).await.is_some());
}

#[tokio::test]
async fn activity_keeps_session_alive() {
    let sessions = AssistantSessions::new();
    let start = Instant::now();
    let (id, _) = sessions.checkout(None, start).await;
    let touched = start + Duration::from_secs(50);
    sessions.checkout(Some(id), touched).await;

    let removed = sessions.sweep_idle(start + Duration::from_secs(90), Duration::from_secs(60)).await;
    assert_eq!(removed, 0);
}

#[test]
fn app_state_without_llm() {
    let state = test_helpers::test_app_state();
    assert!(state.llm.is_none());
}
