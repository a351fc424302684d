//! End-to-end tests of the chat flow against the real router.
//!
//! The simulated response delay is shortened through the injected service so
//! the tests do not wait the production 1500ms.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::util::ServiceExt;

use lexi_assistant::AppState;
use lexi_assistant::answer::{AnswerService, MockAnswerService};
use lexi_assistant::chat::{ChatEvent, MessageRole};
use lexi_assistant::config::{AppConfig, ResponderConfig, ServerConfig};
use lexi_assistant::server::router;
use lexi_assistant::session::SessionStore;

const QUESTION: &str = "What about future prospects for self-employed deceased aged 54-55?";

fn test_state() -> AppState {
    AppState {
        responder: Arc::new(MockAnswerService::new(Duration::from_millis(10))),
        sessions: SessionStore::new(),
        config: Arc::new(AppConfig {
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
            },
            responder: ResponderConfig { delay_ms: 10 },
        }),
    }
}

async fn post_chat(app: &Router, body: &Value) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_submission_then_response_appends_two_messages() {
    let state = test_state();
    let app = router(state.clone());

    let response = post_chat(&app, &json!({ "message": QUESTION })).await;
    assert_eq!(response["accepted"], json!(true));
    let session_id = response["session_id"].as_str().unwrap().to_string();
    let stream_url = response["stream_url"].as_str().unwrap().to_string();

    // Immediately after submission: exactly the user message, pending set.
    let session = state.sessions.get(&session_id).unwrap();
    let messages = session.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[0].content, QUESTION);
    assert!(session.pending());

    // Draining the stream runs the answer service to completion.
    let (status, body) = get_text(&app, &stream_url).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("event: stream.start"));
    assert!(body.contains("event: citation.added"));
    assert!(body.contains("event: message.complete"));
    assert!(body.ends_with("event: done\ndata: {\"type\":\"done\"}\n\n"));

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role, MessageRole::Assistant);
    assert!(!messages[1].error);
    let citations = messages[1].citations();
    assert_eq!(citations.len(), 1);
    assert_eq!(citations[0].source, "Dani_Devi_v_Pritam_Singh.pdf");
    assert_eq!(citations[0].paragraph.as_deref(), Some("Para 7"));
    assert!(!session.pending());
}

#[tokio::test]
async fn test_submission_while_pending_is_ignored() {
    let state = test_state();
    let app = router(state.clone());

    let first = post_chat(&app, &json!({ "message": "first question" })).await;
    assert_eq!(first["accepted"], json!(true));
    let session_id = first["session_id"].as_str().unwrap().to_string();

    let second = post_chat(
        &app,
        &json!({ "message": "second question", "session_id": session_id }),
    )
    .await;
    assert_eq!(second["accepted"], json!(false));
    assert!(second.get("stream_url").is_none());

    let session = state.sessions.get(&session_id).unwrap();
    assert_eq!(session.message_count(), 1);
    assert!(session.pending());
}

#[tokio::test]
async fn test_blank_submission_is_ignored() {
    let state = test_state();
    let app = router(state.clone());

    for blank in ["", "   ", " \n\t "] {
        let response = post_chat(&app, &json!({ "message": blank })).await;
        assert_eq!(response["accepted"], json!(false));
        assert!(response.get("stream_url").is_none());

        let session_id = response["session_id"].as_str().unwrap();
        let session = state.sessions.get(session_id).unwrap();
        assert_eq!(session.message_count(), 0);
        assert!(!session.pending());
    }
}

#[tokio::test]
async fn test_stream_without_session_reports_error() {
    let app = router(test_state());

    let (status, body) = get_text(&app, "/api/chat/stream?session_id=missing").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("event: error"));
    assert!(body.contains("Session not found"));
    assert!(body.contains("event: done"));
}

#[tokio::test]
async fn test_stream_without_pending_question_reports_error() {
    let state = test_state();
    let app = router(state.clone());

    let session = state.sessions.create();
    let uri = format!("/api/chat/stream?session_id={}", session.id());
    let (_, body) = get_text(&app, &uri).await;
    assert!(body.contains("No response pending"));
    assert_eq!(session.message_count(), 0);
}

#[tokio::test]
async fn test_page_renders_welcome_shell() {
    let app = router(test_state());

    let (status, body) = get_text(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Lexi Legal Assistant"));
    assert!(body.contains("Ask a legal question to get started"));
    assert!(body.contains("chat-stream"));
    assert!(body.contains("Citation Details"));
}

#[tokio::test]
async fn test_page_rehydrates_conversation_from_session() {
    let state = test_state();
    let app = router(state.clone());

    let session = state.sessions.create();
    assert!(session.submit(QUESTION));
    let answer = state
        .responder
        .answer(QUESTION)
        .await
        .expect("mock cannot fail");
    session.apply(ChatEvent::ResponseArrived {
        message: lexi_assistant::chat::Message::assistant(answer.text, answer.citations),
    });

    let uri = format!("/?session={}", session.id());
    let (status, body) = get_text(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(QUESTION));
    assert!(body.contains("Dani_Devi_v_Pritam_Singh.pdf"));
    assert!(body.contains("Para 7"));
    // With messages present the welcome card is gone.
    assert!(!body.contains("Try this example"));
}

#[tokio::test]
async fn test_messages_endpoint_returns_citations() {
    let state = test_state();
    let app = router(state.clone());

    let response = post_chat(&app, &json!({ "message": QUESTION })).await;
    let session_id = response["session_id"].as_str().unwrap().to_string();
    let stream_url = response["stream_url"].as_str().unwrap().to_string();
    let _ = get_text(&app, &stream_url).await;

    let (status, body) = get_text(&app, &format!("/api/sessions/{session_id}/messages")).await;
    assert_eq!(status, StatusCode::OK);

    let messages: Value = serde_json::from_str(&body).unwrap();
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], json!("user"));
    assert_eq!(messages[1]["role"], json!("assistant"));
    assert_eq!(
        messages[1]["citations"][0]["source"],
        json!("Dani_Devi_v_Pritam_Singh.pdf")
    );
}

#[tokio::test]
async fn test_session_endpoints_lifecycle() {
    let state = test_state();
    let app = router(state.clone());

    // Create
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/sessions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let info: Value = serde_json::from_slice(&bytes).unwrap();
    let id = info["id"].as_str().unwrap().to_string();
    assert_eq!(info["message_count"], json!(0));
    assert_eq!(info["pending"], json!(false));

    // Get
    let (status, body) = get_text(&app, &format!("/api/sessions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(&id));

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/sessions/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(state.sessions.get(&id).is_none());

    // Get after delete
    let (status, _) = get_text(&app, &format!("/api/sessions/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
