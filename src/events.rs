//! SSE event model for the response stream.
//!
//! The response read path emits a small set of typed events so the client can
//! render the assistant answer and its citations as they arrive.
//!
//! # Event Types
//!
//! - `stream.start`: a response stream has opened
//! - `citation.added`: one citation backing the upcoming answer
//! - `message.complete`: the full assistant message
//! - `error`: the answer service failed; shown in place of the answer
//! - `done`: the stream is finished (always the final event)
//!
//! # Example
//!
//! ```rust
//! use lexi_assistant::events::{ChatStreamEvent, sse_event};
//!
//! let event = ChatStreamEvent::Done;
//! let sse = sse_event(&event);
//! assert!(sse.starts_with("event: done\n"));
//! ```

use serde::{Deserialize, Serialize};

use crate::chat::{Citation, Message};

/// Events emitted on the response SSE stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum ChatStreamEvent {
    /// Indicates the start of a response stream.
    #[serde(rename = "stream.start")]
    StreamStart {
        /// Unique identifier for this request/response pair.
        request_id: String,
    },

    /// A citation backing the upcoming answer.
    #[serde(rename = "citation.added")]
    CitationAdded(Citation),

    /// The complete assistant message, citations included.
    #[serde(rename = "message.complete")]
    MessageComplete {
        /// The assistant message appended to the conversation.
        message: Message,
    },

    /// The answer service failed.
    #[serde(rename = "error")]
    Error {
        /// User-facing error message.
        message: String,
        /// Optional error code for programmatic handling.
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },

    /// Stream has completed; no further events follow.
    #[serde(rename = "done")]
    Done,
}

/// Convert a [`ChatStreamEvent`] to an SSE-formatted string.
///
/// The output follows the Server-Sent Events specification with both an
/// `event:` line (for `EventSource` listeners) and a `data:` line containing
/// the JSON payload.
pub fn sse_event(evt: &ChatStreamEvent) -> String {
    let json = serde_json::to_string(evt).unwrap_or_else(|e| {
        serde_json::json!({ "type": "error", "data": { "message": e.to_string() } }).to_string()
    });

    let event_name = event_name(evt);

    format!("event: {event_name}\ndata: {json}\n\n")
}

/// Get the SSE event name for a [`ChatStreamEvent`].
pub fn event_name(evt: &ChatStreamEvent) -> &'static str {
    match evt {
        ChatStreamEvent::StreamStart { .. } => "stream.start",
        ChatStreamEvent::CitationAdded { .. } => "citation.added",
        ChatStreamEvent::MessageComplete { .. } => "message.complete",
        ChatStreamEvent::Error { .. } => "error",
        ChatStreamEvent::Done => "done",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sse_event_format() {
        let event = ChatStreamEvent::Done;
        let sse = sse_event(&event);
        assert!(sse.starts_with("event: done\n"));
        assert!(sse.contains("data: "));
        assert!(sse.ends_with("\n\n"));
    }

    #[test]
    fn test_citation_serialization() {
        let citation = Citation {
            text: "quoted excerpt".to_string(),
            source: "Dani_Devi_v_Pritam_Singh.pdf".to_string(),
            link: "https://example.com/doc.pdf".to_string(),
            paragraph: Some("Para 7".to_string()),
        };
        let event = ChatStreamEvent::CitationAdded(citation);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("citation.added"));
        assert!(json.contains("Dani_Devi_v_Pritam_Singh.pdf"));
        assert!(json.contains("Para 7"));
    }

    #[test]
    fn test_message_complete_carries_citations() {
        let message = Message::assistant(
            "the answer",
            vec![Citation {
                text: "excerpt".to_string(),
                source: "doc.pdf".to_string(),
                link: "https://example.com".to_string(),
                paragraph: None,
            }],
        );
        let sse = sse_event(&ChatStreamEvent::MessageComplete { message });
        assert!(sse.starts_with("event: message.complete\n"));
        assert!(sse.contains(r#""role":"assistant""#));
        assert!(sse.contains("doc.pdf"));
    }

    #[test]
    fn test_error_event_omits_missing_code() {
        let sse = sse_event(&ChatStreamEvent::Error {
            message: "answer service unavailable".to_string(),
            code: None,
        });
        assert!(sse.starts_with("event: error\n"));
        assert!(!sse.contains("code"));
    }
}
