use super::*;
use crate::i18n::Language;

#[test]
fn assistant_session_endpoint_formats_expected_path() {
    let id = Uuid::nil();
    assert_eq!(
        assistant_session_endpoint(id),
        "/api/assistant/sessions/00000000-0000-0000-0000-000000000000"
    );
}

#[test]
fn turns_endpoint_path() {
    assert_eq!(ASSISTANT_TURNS_ENDPOINT, "/api/assistant/turns");
}

#[test]
fn turn_failed_message_formats_status() {
    assert_eq!(turn_failed_message(502), "assistant turn failed: 502");
}

#[test]
fn turn_request_copies_pending_fields() {
    let session = Uuid::new_v4();
    let pending = PendingTurn {
        text: "fever".into(),
        language: Language::Fr,
        session_id: Some(session),
        generation: 3,
    };
    let req = turn_request(&pending);
    assert_eq!(req.session_id, Some(session));
    assert_eq!(req.message, "fever");
    assert_eq!(req.language, Language::Fr);
}

#[test]
fn turn_outcome_maps_success_and_failure() {
    let session = Uuid::new_v4();
    let ok = turn_outcome(Ok(AssistantTurnResponse { session_id: session, reply: "ok".into() }));
    assert_eq!(ok, TurnOutcome::Reply { session_id: session, text: "ok".into() });

    let failed = turn_outcome(Err(AssistantErrorResponse { session_id: Some(session), error: "x".into(), code: None }));
    assert_eq!(failed, TurnOutcome::Failed { session_id: Some(session) });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn ssr_send_reports_failure_with_request_session() {
    let session = Uuid::new_v4();
    let req = AssistantTurnRequest { session_id: Some(session), message: "hi".into(), language: Language::En };
    let err = futures::executor::block_on(send_assistant_turn(&req)).unwrap_err();
    assert_eq!(err.session_id, Some(session));
}
