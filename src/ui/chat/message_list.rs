//! Chat message list component.

use leptos::prelude::*;

use crate::chat::{Message, MessageRole};
use crate::ui::components::FileTextIcon;

use super::CitationCard;

/// Scrollable conversation area.
///
/// Existing messages are rendered server-side; the `<chat-stream>` Web
/// Component appends streamed responses into the same `#messages` container
/// and manages the loading bubble.
#[component]
pub fn ChatMessageList(
    /// Conversation to render, oldest first.
    messages: Vec<Message>,
    /// Session the page was rehydrated from (empty for a fresh page).
    session_id: String,
) -> impl IntoView {
    let empty = messages.is_empty();

    view! {
        <div class="flex-1 overflow-y-auto">
            <div class="max-w-4xl mx-auto w-full p-4 space-y-6">
                {empty.then(|| view! { <WelcomeCard /> })}

                <div id="messages" class="space-y-6">
                    {messages
                        .into_iter()
                        .map(|message| view! { <MessageBubble message=message /> })
                        .collect_view()}
                </div>

                <chat-stream target="#messages" session-id=session_id></chat-stream>
            </div>
        </div>
    }
}

/// A single conversation entry: user question or assistant answer with its
/// citation summaries.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let is_user = message.role == MessageRole::User;

    let wrapper = if is_user {
        "flex justify-end"
    } else {
        "flex justify-start"
    };
    let bubble = if is_user {
        "max-w-3xl bg-blue-600 text-white rounded-lg p-4 shadow-sm"
    } else if message.error {
        "max-w-3xl bg-red-50 border border-red-200 text-red-700 rounded-lg p-4 shadow-sm"
    } else {
        "max-w-3xl bg-white border border-gray-200 rounded-lg p-4 shadow-sm"
    };

    let citations = message.citations().to_vec();
    let content = message.content;

    view! {
        <div class=wrapper>
            <div class=bubble>
                <div class="whitespace-pre-wrap">{content}</div>

                {(!citations.is_empty()).then(|| view! {
                    <div class="mt-4 pt-4 border-t border-gray-100">
                        <h4 class="text-sm font-semibold text-gray-700 mb-2">"Citations:"</h4>
                        {citations
                            .into_iter()
                            .map(|citation| view! { <CitationCard citation=citation /> })
                            .collect_view()}
                    </div>
                })}
            </div>
        </div>
    }
}

/// Empty-conversation welcome card with an example question.
#[component]
fn WelcomeCard() -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <FileTextIcon class="h-12 w-12 text-gray-400 mx-auto mb-4" />
            <h2 class="text-xl font-semibold text-gray-700 mb-2">
                "Welcome to Lexi Legal Assistant"
            </h2>
            <p class="text-gray-500 mb-6">"Ask a legal question to get started"</p>
            <div class="bg-blue-50 border border-blue-200 rounded-lg p-4 max-w-2xl mx-auto text-left">
                <p class="text-sm text-blue-800 font-medium mb-2">"Try this example:"</p>
                <p class="text-sm text-blue-700">
                    "\u{201c}In a motor accident claim where the deceased was self-employed \
                    and aged 54\u{2013}55 years at the time of death, is the claimant entitled \
                    to an addition towards future prospects in computing compensation under \
                    Section 166 of the Motor Vehicles Act, 1988?\u{201d}"
                </p>
            </div>
        </div>
    }
}
