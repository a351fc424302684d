//! Chat shell layout component.

use leptos::prelude::*;

use crate::chat::Message;

use super::{AssistantHeader, ChatInputArea, ChatMessageList, CitationDialog};

/// Main chat shell component.
///
/// Provides the complete assistant layout:
/// - Page header with title and tagline
/// - Scrollable conversation area with citation summaries
/// - Input area for new questions
/// - Citation detail dialog (hidden until a citation is selected)
#[component]
pub fn ChatShell(
    /// Conversation to render, oldest first.
    messages: Vec<Message>,
    /// Session the page was rehydrated from (empty for a fresh page).
    session_id: String,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <AssistantHeader />

            <ChatMessageList messages=messages session_id=session_id />

            <ChatInputArea />

            <CitationDialog />
        </div>
    }
}
