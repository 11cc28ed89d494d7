use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

const ERR: &str = "connection trouble";

/// Transport that replays scripted outcomes and records what it was sent.
struct MockTransport {
    outcomes: RefCell<Vec<TurnOutcome>>,
    sent: RefCell<Vec<PendingTurn>>,
}

impl MockTransport {
    fn new(mut outcomes: Vec<TurnOutcome>) -> Self {
        outcomes.reverse();
        Self { outcomes: RefCell::new(outcomes), sent: RefCell::new(Vec::new()) }
    }
}

impl AssistantTransport for MockTransport {
    async fn send(&self, turn: &PendingTurn) -> TurnOutcome {
        self.sent.borrow_mut().push(turn.clone());
        self.outcomes
            .borrow_mut()
            .pop()
            .unwrap_or(TurnOutcome::Failed { session_id: None })
    }
}

fn reply(session_id: Uuid, text: &str) -> TurnOutcome {
    TurnOutcome::Reply { session_id, text: text.to_owned() }
}

// =============================================================
// greet
// =============================================================

#[test]
fn greet_seeds_only_empty_history() {
    let mut state = ConversationState::default();
    state.greet("Hello!");
    state.greet("Hello again!");
    assert_eq!(state.turns, vec![ChatTurn::assistant("Hello!")]);
}

// =============================================================
// begin_turn
// =============================================================

#[test]
fn begin_turn_ignores_blank_text() {
    let mut state = ConversationState::default();
    assert_eq!(state.begin_turn("  \n ", Language::En), None);
    assert!(state.turns.is_empty());
    assert!(!state.busy);
}

#[test]
fn begin_turn_appends_user_turn_and_marks_busy() {
    let mut state = ConversationState::default();
    let pending = state.begin_turn("  I have a headache ", Language::Hi).unwrap();

    assert_eq!(pending.text, "I have a headache");
    assert_eq!(pending.language, Language::Hi);
    assert_eq!(pending.session_id, None);
    assert!(state.busy);
    assert_eq!(state.turns, vec![ChatTurn::user("I have a headache")]);
}

#[test]
fn begin_turn_while_busy_is_noop() {
    let mut state = ConversationState::default();
    state.begin_turn("first", Language::En).unwrap();
    assert_eq!(state.begin_turn("second", Language::En), None);
    assert_eq!(state.turns.len(), 1);
}

// =============================================================
// complete_turn
// =============================================================

#[test]
fn complete_turn_with_reply_adopts_session() {
    let mut state = ConversationState::default();
    let session = Uuid::new_v4();
    let pending = state.begin_turn("hi", Language::En).unwrap();

    assert!(state.complete_turn(&pending, reply(session, "Hello there"), ERR));
    assert!(!state.busy);
    assert_eq!(state.session_id, Some(session));
    assert_eq!(state.turns.last(), Some(&ChatTurn::assistant("Hello there")));
}

#[test]
fn complete_turn_with_failure_appends_error_bubble() {
    let mut state = ConversationState::default();
    let pending = state.begin_turn("hi", Language::En).unwrap();

    assert!(state.complete_turn(&pending, TurnOutcome::Failed { session_id: None }, ERR));
    assert!(!state.busy);
    let last = state.turns.last().unwrap();
    assert!(last.is_error);
    assert_eq!(last.role, TurnRole::Assistant);
    assert_eq!(last.text, ERR);
}

#[test]
fn failure_keeps_existing_session() {
    let mut state = ConversationState::default();
    let session = Uuid::new_v4();
    state.session_id = Some(session);
    let pending = state.begin_turn("hi", Language::En).unwrap();

    state.complete_turn(&pending, TurnOutcome::Failed { session_id: None }, ERR);
    assert_eq!(state.session_id, Some(session));
}

#[test]
fn stale_completion_after_reset_is_dropped() {
    let mut state = ConversationState::default();
    let pending = state.begin_turn("hi", Language::En).unwrap();
    state.reset();

    assert!(!state.complete_turn(&pending, reply(Uuid::new_v4(), "late"), ERR));
    assert!(state.turns.is_empty());
    assert_eq!(state.session_id, None);
}

// =============================================================
// send_turn
// =============================================================

#[test]
fn send_turn_appends_user_then_reply() {
    let mut state = ConversationState::default();
    let session = Uuid::new_v4();
    let transport = MockTransport::new(vec![reply(session, "Take rest.")]);

    block_on(state.send_turn("headache", Language::En, ERR, &transport));

    assert_eq!(
        state.turns,
        vec![ChatTurn::user("headache"), ChatTurn::assistant("Take rest.")]
    );
    assert!(!state.busy);
}

#[test]
fn send_turn_reuses_session_for_follow_up() {
    let mut state = ConversationState::default();
    let session = Uuid::new_v4();
    let transport = MockTransport::new(vec![reply(session, "one"), reply(session, "two")]);

    block_on(state.send_turn("first", Language::En, ERR, &transport));
    block_on(state.send_turn("second", Language::De, ERR, &transport));

    let sent = transport.sent.borrow();
    assert_eq!(sent[0].session_id, None);
    assert_eq!(sent[1].session_id, Some(session));
    assert_eq!(sent[1].language, Language::De);
    assert_eq!(state.turns.len(), 4);
}

#[test]
fn send_turn_failure_leaves_input_usable() {
    let mut state = ConversationState::default();
    let transport = MockTransport::new(vec![
        TurnOutcome::Failed { session_id: None },
        reply(Uuid::new_v4(), "back online"),
    ]);

    block_on(state.send_turn("one", Language::En, ERR, &transport));
    block_on(state.send_turn("two", Language::En, ERR, &transport));

    assert_eq!(state.turns.len(), 4);
    assert!(state.turns[1].is_error);
    assert!(!state.turns[3].is_error);
}

#[test]
fn send_turn_blank_text_never_reaches_transport() {
    let mut state = ConversationState::default();
    let transport = MockTransport::new(vec![]);

    block_on(state.send_turn("   ", Language::En, ERR, &transport));

    assert!(transport.sent.borrow().is_empty());
    assert!(state.turns.is_empty());
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_discards_history_and_returns_session() {
    let mut state = ConversationState::default();
    let session = Uuid::new_v4();
    state.session_id = Some(session);
    state.greet("Hello");
    state.begin_turn("hi", Language::En);

    assert_eq!(state.reset(), Some(session));
    assert!(state.turns.is_empty());
    assert!(!state.busy);
    assert_eq!(state.generation, 1);
    assert_eq!(state.reset(), None);
}
