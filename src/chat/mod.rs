//! Conversation data model and session-state transitions.
//!
//! The conversation is an append-only sequence of [`Message`]s; the per-session
//! UI state ([`ChatState`]) carries the draft text, the pending flag, and the
//! currently selected citation. All state changes go through the pure
//! [`ChatState::apply`] transition, so every interaction can be tested without
//! a rendering environment.

mod message;
mod state;

pub use message::{Citation, Message, MessageRole};
pub use state::{ChatEvent, ChatState};
