use super::*;

#[test]
fn first_turn_request_omits_session_id() {
    let req = AssistantTurnRequest { session_id: None, message: "hi".into(), language: Language::Hi };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "hi", "language": "hi" }));
}

#[test]
fn request_language_defaults_to_english() {
    let req: AssistantTurnRequest = serde_json::from_str(r#"{"message":"hello"}"#).unwrap();
    assert_eq!(req.language, Language::En);
    assert_eq!(req.session_id, None);
}

#[test]
fn request_rejects_unknown_language() {
    let res = serde_json::from_str::<AssistantTurnRequest>(r#"{"message":"x","language":"es"}"#);
    assert!(res.is_err());
}

#[test]
fn response_parses_session_and_reply() {
    let id = Uuid::new_v4();
    let raw = format!(r#"{{"session_id":"{id}","reply":"Rest well."}}"#);
    let resp: AssistantTurnResponse = serde_json::from_str(&raw).unwrap();
    assert_eq!(resp.session_id, id);
    assert_eq!(resp.reply, "Rest well.");
}

#[test]
fn error_response_session_is_optional() {
    let err: AssistantErrorResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
    assert_eq!(err.session_id, None);
    assert_eq!(err.error, "boom");
    assert_eq!(err.code, None);
}

#[test]
fn error_response_carries_code() {
    let raw = r#"{"error":"Failed to connect to the AI assistant.","code":"E_ASSISTANT_CONNECTION"}"#;
    let err: AssistantErrorResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(err.code.as_deref(), Some("E_ASSISTANT_CONNECTION"));
}
