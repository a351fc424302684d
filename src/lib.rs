//! Lexi Legal Assistant
//!
//! A chat-style legal assistant UI: the user asks a question, a simulated
//! answer with a single citation arrives after a fixed delay, and each
//! citation opens a detail dialog that links to the source document.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server with an SSE read path for responses
//! - **Answer service**: pluggable `query -> answer + citations` capability;
//!   the only current implementation is a fixed-delay mock
//! - **Sessions**: in-memory conversation state behind a thread-safe store
//! - **UI**: Leptos SSR components + HTMX + Alpine.js + one Web Component
//!
//! # Modules
//!
//! - [`answer`]: The answer-service seam and its mock implementation
//! - [`chat`]: Conversation data model and pure session-state transitions
//! - [`events`]: SSE event model for the response stream
//! - [`session`]: Conversation and session management
//! - [`ui`]: Server-rendered components

#![allow(clippy::unused_async)]

pub mod answer;
pub mod chat;
pub mod config;
pub mod events;
pub mod server;
pub mod session;
pub mod ui;

use std::sync::Arc;

use crate::answer::AnswerService;
use crate::config::AppConfig;
use crate::session::SessionStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Answer service producing assistant responses.
    pub responder: Arc<dyn AnswerService>,
    /// Session store for conversation management.
    pub sessions: SessionStore,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("sessions", &self.sessions)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
