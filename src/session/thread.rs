//! Conversation thread and session storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::chat::{ChatEvent, ChatState, Message};

/// Default session timeout (30 minutes).
const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// A single conversation session.
///
/// Sessions hold the chat state (conversation, draft, pending flag, selected
/// citation) and route every change through the pure
/// [`ChatState::apply`] transition.
#[derive(Debug)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    /// Unique session identifier.
    id: String,
    /// Chat state guarded for cross-handler access.
    state: RwLock<ChatState>,
    /// Session creation time.
    created_at: DateTime<Utc>,
    /// Last activity time.
    last_activity: RwLock<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub state: ChatState,
    pub created_at: String,    // RFC3339
    pub last_activity: String, // RFC3339
}

impl Serialize for Session {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.snapshot().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Session {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let snapshot = SessionSnapshot::deserialize(deserializer)?;
        Ok(Session::from_snapshot(snapshot))
    }
}

impl Clone for Session {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Session {
    /// Create a new session with the given ID.
    fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            inner: Arc::new(SessionInner {
                id,
                state: RwLock::new(ChatState::new()),
                created_at: now,
                last_activity: RwLock::new(now),
            }),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.inner.id.clone(),
            state: self.inner.state.read().unwrap().clone(),
            created_at: self.inner.created_at.to_rfc3339(),
            last_activity: self.inner.last_activity.read().unwrap().to_rfc3339(),
        }
    }

    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        let epoch = || DateTime::parse_from_rfc3339("1970-01-01T00:00:00Z").unwrap();
        let created_at = DateTime::parse_from_rfc3339(&snapshot.created_at)
            .unwrap_or_else(|_| epoch())
            .with_timezone(&Utc);
        let last_activity = DateTime::parse_from_rfc3339(&snapshot.last_activity)
            .unwrap_or_else(|_| epoch())
            .with_timezone(&Utc);

        Self {
            inner: Arc::new(SessionInner {
                id: snapshot.id,
                state: RwLock::new(snapshot.state),
                created_at,
                last_activity: RwLock::new(last_activity),
            }),
        }
    }

    /// Get the session ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Apply a chat event and return the resulting state.
    pub fn apply(&self, event: ChatEvent) -> ChatState {
        let mut guard = self.inner.state.write().unwrap();
        *guard = guard.apply(event);
        let state = guard.clone();
        drop(guard);
        self.touch();
        state
    }

    /// Submit a question: stage it as the draft, then run the submit
    /// transition under one lock so the pending check cannot race.
    ///
    /// Returns whether the submission was accepted (non-blank text and no
    /// response already pending); a rejected submission changes nothing.
    pub fn submit(&self, text: impl Into<String>) -> bool {
        let mut guard = self.inner.state.write().unwrap();
        let drafted = guard.apply(ChatEvent::DraftChanged { text: text.into() });
        let accepted = drafted.can_submit();
        *guard = drafted.apply(ChatEvent::Submitted);
        drop(guard);
        self.touch();
        accepted
    }

    /// Get a copy of the current chat state.
    #[must_use]
    pub fn state(&self) -> ChatState {
        self.inner.state.read().unwrap().clone()
    }

    /// Get all messages in the conversation.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.inner.state.read().unwrap().conversation.clone()
    }

    /// Get the number of messages in the conversation.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.inner.state.read().unwrap().conversation.len()
    }

    /// Whether a response is currently pending.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.inner.state.read().unwrap().pending
    }

    /// The question awaiting a response: the latest user message, present
    /// only while the pending flag is set.
    #[must_use]
    pub fn pending_question(&self) -> Option<String> {
        let guard = self.inner.state.read().unwrap();
        if !guard.pending {
            return None;
        }
        guard
            .conversation
            .iter()
            .rev()
            .find(|m| m.role == crate::chat::MessageRole::User)
            .map(|m| m.content.clone())
    }

    /// Update the last activity timestamp.
    fn touch(&self) {
        let mut guard = self.inner.last_activity.write().unwrap();
        *guard = Utc::now();
    }

    /// Check if the session has been inactive longer than the timeout.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = *self.inner.last_activity.read().unwrap();
        let now = Utc::now();
        if let Ok(duration) = (now - last).to_std() {
            duration > timeout
        } else {
            // Negative duration means clock skew or "last" is in future.
            false
        }
    }

    /// Get the session age.
    #[must_use]
    pub fn age(&self) -> Duration {
        let now = Utc::now();
        (now - self.inner.created_at)
            .to_std()
            .unwrap_or(Duration::from_secs(0))
    }
}

/// Thread-safe store for sessions.
///
/// Provides methods for creating, retrieving, and cleaning up sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

#[derive(Debug)]
struct SessionStoreInner {
    sessions: RwLock<HashMap<String, Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a new session store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                sessions: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Create a new session and return it.
    #[must_use]
    pub fn create(&self) -> Session {
        let id = Uuid::new_v4().to_string();
        self.create_with_id(id)
    }

    /// Create a new session with a specific ID.
    #[must_use]
    pub fn create_with_id(&self, id: impl Into<String>) -> Session {
        let id = id.into();
        let session = Session::new(id.clone());
        let mut guard = self.inner.sessions.write().unwrap();
        guard.insert(id, session.clone());
        session
    }

    /// Get a session by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Session> {
        let guard = self.inner.sessions.read().unwrap();
        guard.get(id).cloned()
    }

    /// Get a session by ID, creating it if it doesn't exist.
    #[must_use]
    pub fn get_or_create(&self, id: &str) -> Session {
        // Try read-only first
        {
            let guard = self.inner.sessions.read().unwrap();
            if let Some(session) = guard.get(id) {
                return session.clone();
            }
        }

        // Create if not exists
        self.create_with_id(id)
    }

    /// Remove a session by ID.
    pub fn remove(&self, id: &str) -> Option<Session> {
        let mut guard = self.inner.sessions.write().unwrap();
        guard.remove(id)
    }

    /// Get the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.sessions.read().unwrap().len()
    }

    /// Check if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all expired sessions using the default 30 minute timeout.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired(&self) -> usize {
        self.cleanup_expired_with_timeout(DEFAULT_SESSION_TIMEOUT)
    }

    /// Remove sessions that have been inactive longer than the timeout.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.inner.sessions.write().unwrap();
        let before = guard.len();
        guard.retain(|_, session| !session.is_expired_with_timeout(timeout));
        before - guard.len()
    }

    /// List all session IDs.
    #[must_use]
    pub fn list_ids(&self) -> Vec<String> {
        self.inner
            .sessions
            .read()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }
}
