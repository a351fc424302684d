//! Page header component.

use leptos::prelude::*;

/// Assistant page header with title and tagline.
#[component]
pub fn AssistantHeader(
    /// Title displayed in the header.
    #[prop(default = "Lexi Legal Assistant")]
    title: &'static str,
    /// Tagline displayed under the title.
    #[prop(default = "Ask legal questions and get answers with citations")]
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <header class="bg-white border-b border-gray-200 p-4">
            <div class="max-w-4xl mx-auto">
                <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
                <p class="text-gray-600 mt-1">{subtitle}</p>
            </div>
        </header>
    }
}
