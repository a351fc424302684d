//! Messages and citations.

use serde::{Deserialize, Serialize};

/// A quoted excerpt with source metadata, attached to an assistant answer.
///
/// The `link` points at an external document viewer; it is stored and
/// forwarded verbatim, never fetched or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Quoted excerpt from the source document.
    pub text: String,
    /// Source document identifier (file name).
    pub source: String,
    /// External link to the document.
    pub link: String,
    /// Optional paragraph/section label within the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<String>,
}

/// Role of a message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User question.
    User,
    /// Assistant answer.
    Assistant,
}

/// A message in a conversation.
///
/// Messages are immutable once constructed; assistant messages may carry
/// citations, and `error` marks an assistant-side failure notice shown in
/// place of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message author.
    pub role: MessageRole,
    /// Text content of the message.
    pub content: String,
    /// Citations backing an assistant answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
    /// Whether this entry reports a failed response instead of an answer.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
}

impl Message {
    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            citations: None,
            error: false,
        }
    }

    /// Create an assistant message with its citations.
    #[must_use]
    pub fn assistant(content: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            citations: if citations.is_empty() {
                None
            } else {
                Some(citations)
            },
            error: false,
        }
    }

    /// Create an assistant-side failure notice.
    #[must_use]
    pub fn failure(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            citations: None,
            error: true,
        }
    }

    /// Citations attached to this message, if any.
    #[must_use]
    pub fn citations(&self) -> &[Citation] {
        self.citations.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = Message::user("Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""role":"user""#));
        assert!(!json.contains("citations"));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_assistant_message_carries_citations() {
        let citation = Citation {
            text: "quoted".to_string(),
            source: "doc.pdf".to_string(),
            link: "https://example.com/doc.pdf".to_string(),
            paragraph: Some("Para 1".to_string()),
        };
        let msg = Message::assistant("answer", vec![citation.clone()]);
        assert_eq!(msg.citations(), &[citation]);

        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_empty_citations_collapse_to_none() {
        let msg = Message::assistant("answer", Vec::new());
        assert!(msg.citations.is_none());
        assert!(msg.citations().is_empty());
    }
}
