use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Response},
    routing::{get, post},
};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::answer::AnswerService;
use crate::chat::{ChatEvent, Message};
use crate::config::AppConfig;
use crate::events::{ChatStreamEvent, sse_event};
use crate::session::SessionStore;
use crate::ui::app::App;

/// Start the Axum server with the provided configuration and answer service.
pub async fn start_server(
    config: Arc<AppConfig>,
    responder: Arc<dyn AnswerService>,
) -> anyhow::Result<()> {
    let state = AppState {
        responder,
        sessions: SessionStore::new(),
        config: config.clone(),
    };

    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        // HTML page
        .route("/", get(index_handler))
        // API routes
        .route("/api/chat", post(api_chat))
        .route("/api/chat/stream", get(api_chat_stream))
        .route("/api/sessions", get(api_list_sessions).post(api_create_session))
        .route(
            "/api/sessions/{id}",
            get(api_get_session).delete(api_delete_session),
        )
        .route("/api/sessions/{id}/messages", get(api_get_messages))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handler
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for the chat page.
#[derive(Debug, Deserialize)]
struct IndexQuery {
    /// Rehydrate the page from an existing session.
    #[serde(default)]
    session: Option<String>,
}

/// GET / - Chat page, server-rendered from the session's conversation.
async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Html<String> {
    let session = query
        .session
        .as_deref()
        .filter(|id| !id.is_empty())
        .and_then(|id| state.sessions.get(id));

    let (session_id, messages) = match session {
        Some(s) => (s.id().to_string(), s.messages()),
        None => (String::new(), Vec::new()),
    };

    let html = view! { <App messages=messages session_id=session_id /> }.to_html();
    Html(html)
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for chat API.
#[derive(Debug, Deserialize)]
struct ChatRequest {
    /// User question text.
    message: String,
    /// Optional session ID (creates new if not provided).
    #[serde(default)]
    session_id: Option<String>,
}

/// Response from chat API.
#[derive(Debug, Serialize)]
struct ChatResponse {
    /// Session ID for this conversation.
    session_id: String,
    /// Whether the submission was accepted. Blank questions and submissions
    /// while a response is pending are silently ignored.
    accepted: bool,
    /// URL for the SSE response stream, present when accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    stream_url: Option<String>,
}

/// POST /api/chat - Submit a question and get the response stream URL.
async fn api_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    tracing::info!(
        message = %req.message,
        session_id = ?req.session_id,
        "Received chat request"
    );

    let session = match req.session_id.as_deref() {
        Some(id) if !id.is_empty() => state.sessions.get_or_create(id),
        _ => {
            let session = state.sessions.create();
            tracing::debug!(session_id = %session.id(), "Created new session");
            session
        }
    };

    let accepted = session.submit(&req.message);
    let session_id = session.id().to_string();

    if !accepted {
        tracing::debug!(
            session_id = %session_id,
            pending = session.pending(),
            "Submission ignored"
        );
        return Json(ChatResponse {
            session_id,
            accepted: false,
            stream_url: None,
        });
    }

    let stream_url = format!("/api/chat/stream?session_id={session_id}");
    tracing::info!(
        session_id = %session_id,
        message_count = session.message_count(),
        stream_url = %stream_url,
        "Question accepted, returning stream URL"
    );

    Json(ChatResponse {
        session_id,
        accepted: true,
        stream_url: Some(stream_url),
    })
}

/// Query parameters for the stream endpoint.
#[derive(Debug, Deserialize)]
struct StreamQuery {
    /// Session ID.
    session_id: String,
}

/// GET /api/chat/stream - SSE stream carrying the pending response.
///
/// Runs the answer service, appends the assistant (or failure) message to the
/// session, and clears the pending flag on every path before `done`.
async fn api_chat_stream(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Response {
    let Some(session) = state.sessions.get(&query.session_id) else {
        tracing::error!(session_id = %query.session_id, "Session not found");
        return single_error_sse("Session not found");
    };

    let Some(question) = session.pending_question() else {
        tracing::warn!(session_id = %query.session_id, "No response pending");
        return single_error_sse("No response pending");
    };

    let request_id = uuid::Uuid::new_v4().to_string();
    let responder = Arc::clone(&state.responder);

    tracing::info!(
        session_id = %query.session_id,
        request_id = %request_id,
        "Starting response stream"
    );

    let sse_stream = async_stream::stream! {
        yield Ok::<String, Infallible>(sse_event(&ChatStreamEvent::StreamStart {
            request_id: request_id.clone(),
        }));

        match responder.answer(&question).await {
            Ok(answer) => {
                let message = Message::assistant(answer.text, answer.citations);

                for citation in message.citations() {
                    yield Ok(sse_event(&ChatStreamEvent::CitationAdded(citation.clone())));
                }

                session.apply(ChatEvent::ResponseArrived {
                    message: message.clone(),
                });
                tracing::info!(
                    request_id = %request_id,
                    session_id = %session.id(),
                    content_length = message.content.len(),
                    citation_count = message.citations().len(),
                    "Saved assistant response to session"
                );

                yield Ok(sse_event(&ChatStreamEvent::MessageComplete { message }));
            }
            Err(e) => {
                let reason = e.to_string();
                session.apply(ChatEvent::ResponseFailed {
                    reason: reason.clone(),
                });
                tracing::error!(
                    request_id = %request_id,
                    session_id = %session.id(),
                    error = %reason,
                    "Answer service failed"
                );

                yield Ok(sse_event(&ChatStreamEvent::Error {
                    message: reason,
                    code: None,
                }));
            }
        }

        yield Ok(sse_event(&ChatStreamEvent::Done));
    };

    build_sse_response(Body::from_stream(sse_stream))
}

/// Session info for listing.
#[derive(Debug, Serialize)]
struct SessionInfo {
    id: String,
    message_count: usize,
    pending: bool,
}

/// GET /api/sessions - List all sessions.
async fn api_list_sessions(State(state): State<AppState>) -> Json<Vec<SessionInfo>> {
    let sessions: Vec<SessionInfo> = state
        .sessions
        .list_ids()
        .iter()
        .filter_map(|id| {
            state.sessions.get(id).map(|s| SessionInfo {
                id: id.clone(),
                message_count: s.message_count(),
                pending: s.pending(),
            })
        })
        .collect();

    Json(sessions)
}

/// POST /api/sessions - Create a new session.
async fn api_create_session(State(state): State<AppState>) -> Json<SessionInfo> {
    let session = state.sessions.create();
    Json(SessionInfo {
        id: session.id().to_string(),
        message_count: 0,
        pending: false,
    })
}

/// GET /api/sessions/:id - Get session details.
async fn api_get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionInfo>, StatusCode> {
    match state.sessions.get(&id) {
        Some(session) => Ok(Json(SessionInfo {
            id: session.id().to_string(),
            message_count: session.message_count(),
            pending: session.pending(),
        })),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// DELETE /api/sessions/:id - Delete a session.
async fn api_delete_session(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    match state.sessions.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

/// GET /api/sessions/:id/messages - Get session messages.
async fn api_get_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Message>>, StatusCode> {
    match state.sessions.get(&id) {
        Some(session) => Ok(Json(session.messages())),
        None => Err(StatusCode::NOT_FOUND),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn single_error_sse(message: &str) -> Response {
    let err = ChatStreamEvent::Error {
        message: message.to_string(),
        code: None,
    };
    let done = ChatStreamEvent::Done;

    let payload = format!("{}{}", sse_event(&err), sse_event(&done));
    build_sse_response(Body::from(payload))
}

fn build_sse_response(body: Body) -> Response {
    let mut resp = Response::new(body);
    let h = resp.headers_mut();
    h.insert("Content-Type", "text/event-stream".parse().unwrap());
    h.insert("Cache-Control", "no-cache".parse().unwrap());
    h.insert("Connection", "keep-alive".parse().unwrap());
    h.insert("X-Accel-Buffering", "no".parse().unwrap());
    resp
}
