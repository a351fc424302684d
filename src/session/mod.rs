//! Session and conversation thread management.
//!
//! This module provides in-memory session storage for managing conversation
//! state across multiple requests. Sessions are identified by UUID and hold
//! the full [`ChatState`](crate::chat::ChatState) behind a lock.
//!
//! # Architecture
//!
//! - [`Session`]: Represents a single conversation session
//! - [`SessionStore`]: Thread-safe store for all active sessions
//!
//! # Example
//!
//! ```rust
//! use lexi_assistant::session::{Session, SessionStore};
//!
//! let store = SessionStore::new();
//! let session = store.create();
//! assert!(session.submit("What does Section 166 provide?"));
//!
//! assert_eq!(session.message_count(), 1);
//! assert!(session.pending());
//! ```

mod thread;

pub use thread::{Session, SessionStore};
