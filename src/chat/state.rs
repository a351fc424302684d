//! Pure session-state transitions.

use serde::{Deserialize, Serialize};

use super::{Citation, Message};

/// Per-session chat state: the conversation plus the three independent pieces
/// of UI state (draft, pending flag, selected citation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatState {
    /// Ordered, append-only conversation; insertion order is display order.
    pub conversation: Vec<Message>,
    /// Current draft query text.
    #[serde(default)]
    pub draft: String,
    /// Whether a response has been requested but not yet produced.
    #[serde(default)]
    pub pending: bool,
    /// Citation currently shown in the detail dialog, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<Citation>,
}

/// An interaction event applied to [`ChatState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// The draft text changed.
    DraftChanged {
        /// New draft content.
        text: String,
    },
    /// The user triggered a submit (send action, or Enter without Shift).
    Submitted,
    /// The answer service produced an assistant message.
    ResponseArrived {
        /// The assistant message, including citations.
        message: Message,
    },
    /// The answer service failed; a notice replaces the answer.
    ResponseFailed {
        /// User-facing description of the failure.
        reason: String,
    },
    /// A citation summary was clicked, opening the detail dialog.
    CitationSelected {
        /// The clicked citation.
        citation: Citation,
    },
    /// The detail dialog was dismissed.
    DialogDismissed,
}

impl ChatState {
    /// Empty conversation, no draft, nothing pending or selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submit would currently be accepted: the trimmed draft is
    /// non-empty and no response is pending.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }

    /// Apply an event, producing the next state.
    ///
    /// This is the single place interaction semantics live:
    ///
    /// - `Submitted` with a blank draft or while pending is a silent no-op.
    /// - An accepted submit appends the user message, clears the draft, and
    ///   sets `pending`.
    /// - A response (success or failure) appends exactly one assistant entry
    ///   and clears `pending` in all cases.
    /// - Selection and dismissal only touch `selected`.
    #[must_use]
    pub fn apply(&self, event: ChatEvent) -> Self {
        let mut next = self.clone();
        match event {
            ChatEvent::DraftChanged { text } => {
                next.draft = text;
            }
            ChatEvent::Submitted => {
                if next.can_submit() {
                    let text = std::mem::take(&mut next.draft);
                    next.conversation.push(Message::user(text));
                    next.pending = true;
                }
            }
            ChatEvent::ResponseArrived { message } => {
                next.conversation.push(message);
                next.pending = false;
            }
            ChatEvent::ResponseFailed { reason } => {
                next.conversation.push(Message::failure(reason));
                next.pending = false;
            }
            ChatEvent::CitationSelected { citation } => {
                next.selected = Some(citation);
            }
            ChatEvent::DialogDismissed => {
                next.selected = None;
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MessageRole;

    fn citation() -> Citation {
        Citation {
            text: "as the age of the deceased at the time of accident was held to be about \
                   54-55 years by the learned Tribunal"
                .to_string(),
            source: "Dani_Devi_v_Pritam_Singh.pdf".to_string(),
            link: "https://example.com/doc.pdf".to_string(),
            paragraph: Some("Para 7".to_string()),
        }
    }

    #[test]
    fn test_submit_appends_user_and_clears_draft() {
        let state = ChatState::new().apply(ChatEvent::DraftChanged {
            text: "What about future prospects?".to_string(),
        });
        assert!(state.can_submit());

        let state = state.apply(ChatEvent::Submitted);
        assert_eq!(state.conversation.len(), 1);
        assert_eq!(state.conversation[0].role, MessageRole::User);
        assert_eq!(state.conversation[0].content, "What about future prospects?");
        assert!(state.draft.is_empty());
        assert!(state.pending);
    }

    #[test]
    fn test_submit_is_noop_while_pending() {
        let state = ChatState::new()
            .apply(ChatEvent::DraftChanged {
                text: "first".to_string(),
            })
            .apply(ChatEvent::Submitted)
            .apply(ChatEvent::DraftChanged {
                text: "second".to_string(),
            });

        let after = state.apply(ChatEvent::Submitted);
        assert_eq!(after.conversation, state.conversation);
        assert_eq!(after.conversation.len(), 1);
        assert!(after.pending);
        // The rejected draft is untouched, ready for when the response lands.
        assert_eq!(after.draft, "second");
    }

    #[test]
    fn test_submit_is_noop_for_blank_draft() {
        for blank in ["", "   ", "\n\t "] {
            let state = ChatState::new()
                .apply(ChatEvent::DraftChanged {
                    text: blank.to_string(),
                })
                .apply(ChatEvent::Submitted);
            assert!(state.conversation.is_empty());
            assert!(!state.pending);
        }
    }

    #[test]
    fn test_response_clears_pending_in_all_cases() {
        let pending = ChatState::new()
            .apply(ChatEvent::DraftChanged {
                text: "question".to_string(),
            })
            .apply(ChatEvent::Submitted);

        let ok = pending.apply(ChatEvent::ResponseArrived {
            message: Message::assistant("answer", vec![citation()]),
        });
        assert!(!ok.pending);
        assert_eq!(ok.conversation.len(), 2);
        assert!(!ok.conversation[1].error);

        let failed = pending.apply(ChatEvent::ResponseFailed {
            reason: "answer backend unavailable".to_string(),
        });
        assert!(!failed.pending);
        assert_eq!(failed.conversation.len(), 2);
        assert!(failed.conversation[1].error);
        assert_eq!(failed.conversation[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_citation_selection_roundtrip() {
        let selected = ChatState::new().apply(ChatEvent::CitationSelected {
            citation: citation(),
        });
        assert_eq!(selected.selected.as_ref(), Some(&citation()));

        let dismissed = selected.apply(ChatEvent::DialogDismissed);
        assert!(dismissed.selected.is_none());
    }

    #[test]
    fn test_selection_is_independent_of_conversation() {
        // Opening the external document is stateless; only explicit selection
        // events touch `selected`.
        let state = ChatState::new()
            .apply(ChatEvent::CitationSelected {
                citation: citation(),
            })
            .apply(ChatEvent::DraftChanged {
                text: "next question".to_string(),
            })
            .apply(ChatEvent::Submitted);
        assert_eq!(state.selected.as_ref(), Some(&citation()));
    }

    #[test]
    fn test_concrete_submission_scenario() {
        let question = "What about future prospects for self-employed deceased aged 54-55?";
        let state = ChatState::new()
            .apply(ChatEvent::DraftChanged {
                text: question.to_string(),
            })
            .apply(ChatEvent::Submitted);

        assert_eq!(state.conversation.len(), 1);
        assert_eq!(state.conversation[0].content, question);
        assert!(state.pending);

        let state = state.apply(ChatEvent::ResponseArrived {
            message: Message::assistant("fixed answer", vec![citation()]),
        });
        assert!(!state.pending);
        assert_eq!(state.conversation.len(), 2);
        let cites = state.conversation[1].citations();
        assert_eq!(cites.len(), 1);
        assert_eq!(cites[0].source, "Dani_Devi_v_Pritam_Singh.pdf");
        assert_eq!(cites[0].paragraph.as_deref(), Some("Para 7"));
    }
}
