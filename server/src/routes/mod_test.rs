use super::*;
use crate::state::test_helpers;
use axum::body::Body;
use axum::http::{Method, Request};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(test_helpers::test_app_state());
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn turn_route_without_llm_is_unavailable() {
    let app = api_routes(test_helpers::test_app_state());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/assistant/turns")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"message":"hello","language":"fr"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn session_delete_route_returns_no_content() {
    let app = api_routes(test_helpers::test_app_state());
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/api/assistant/sessions/{}", uuid::Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
