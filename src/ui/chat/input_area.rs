//! Chat input area component.

use leptos::prelude::*;

use crate::ui::components::{LoaderIcon, SendIcon};

/// Question input area with HTMX form submission.
///
/// Enter submits; Shift+Enter inserts a newline. The send button and the
/// textarea are disabled while a response is pending, so a second submission
/// cannot start. The form posts JSON (`json-enc`) and hands the response to
/// the `<chat-stream>` component, which opens the SSE stream.
#[component]
pub fn ChatInputArea() -> impl IntoView {
    view! {
        <div class="bg-white border-t border-gray-200 p-4">
            <div class="max-w-4xl mx-auto">
                <form
                    class="flex gap-3"
                    hx-post="/api/chat"
                    hx-trigger="submit"
                    hx-swap="none"
                    hx-ext="json-enc"
                    hx-on--after-request="document.querySelector('chat-stream')?.afterSubmit(event, this)"
                    x-data="{ message: '' }"
                >
                    <input type="hidden" name="session_id" x-bind:value="$store.chat.sessionId" />

                    <div class="flex-1 relative">
                        <textarea
                            name="message"
                            placeholder="Ask a legal question..."
                            class="w-full min-h-[60px] max-h-[200px] px-4 py-3 rounded-lg \
                                   border border-gray-300 bg-white text-gray-900 \
                                   placeholder:text-gray-400 resize-none \
                                   focus:outline-none focus:ring-2 focus:ring-blue-500 \
                                   focus:border-transparent disabled:opacity-50"
                            rows="2"
                            x-model="message"
                            x-bind:disabled="$store.chat.loading"
                            x-on:keydown.enter="if (!$event.shiftKey) { $event.preventDefault(); if (message.trim() && !$store.chat.loading) { $el.form.requestSubmit() } }"
                            x-on:input="$el.style.height = 'auto'; $el.style.height = Math.min($el.scrollHeight, 200) + 'px'"
                            required
                        ></textarea>
                    </div>

                    <button
                        type="submit"
                        class="shrink-0 h-11 px-6 rounded-lg bg-blue-600 text-white \
                               hover:bg-blue-700 disabled:opacity-50 disabled:pointer-events-none \
                               flex items-center justify-center transition-colors"
                        x-bind:disabled="!message.trim() || $store.chat.loading"
                    >
                        <span x-show="!$store.chat.loading"><SendIcon /></span>
                        <span x-show="$store.chat.loading" x-cloak=""><LoaderIcon /></span>
                    </button>
                </form>

                <p class="text-xs text-gray-500 mt-2">
                    "Press Enter to send \u{2022} Shift+Enter for new line \u{2022} \
                     Citations link to original documents"
                </p>
            </div>
        </div>
    }
}
