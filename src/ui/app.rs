//! Main application component.

use leptos::prelude::*;

use crate::chat::Message;
use crate::ui::chat::ChatShell;

/// Main application component.
///
/// Renders the complete HTML document for the chat page. Rendered to a string
/// inside the axum page handler.
#[component]
pub fn App(
    /// Conversation to render, oldest first.
    messages: Vec<Message>,
    /// Session the page was rehydrated from (empty for a fresh page).
    session_id: String,
) -> impl IntoView {
    view! {
        <!doctype html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Ask legal questions and get answers with citations"/>

                <title>"Lexi Legal Assistant"</title>

                // Local scripts only (no CDN)
                <script src="/static/vendor/htmx-2.0.8.min.js"></script>
                <script src="/static/vendor/htmx-json-enc.js"></script>
                <script defer src="/static/vendor/alpine.min.js"></script>

                // Application bundle
                <script type="module" src="/static/main.js"></script>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen bg-gray-50 text-gray-900 antialiased">
                <ChatShell messages=messages session_id=session_id />
            </body>
        </html>
    }
}
