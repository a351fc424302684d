//! Modal dialog component.

use leptos::prelude::*;

/// Modal dialog overlay.
///
/// Visibility is driven by an Alpine.js expression (`show`); the overlay
/// click and the window-level Escape key both run `on_dismiss`. Clicks inside
/// the panel do not reach the overlay.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Dialog show="$store.viewer.selected" on_dismiss="$store.viewer.dismiss()">
///         <DialogHeader>
///             <DialogTitle>"Citation Details"</DialogTitle>
///         </DialogHeader>
///         // body
///     </Dialog>
/// }
/// ```
#[component]
pub fn Dialog(
    /// Alpine.js expression controlling visibility.
    show: &'static str,
    /// Alpine.js expression run on dismissal.
    on_dismiss: &'static str,
    /// Additional CSS classes for the dialog panel.
    #[prop(default = "")]
    class: &'static str,
    /// Dialog content.
    children: Children,
) -> impl IntoView {
    let panel_classes = format!(
        "relative z-10 w-full max-w-2xl rounded-xl border border-gray-200 bg-white p-6 \
         shadow-lg {}",
        class
    );

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4"
            x-show=show
            x-cloak=""
            x-on:keydown.escape.window=on_dismiss
        >
            <div class="fixed inset-0 bg-black/50" x-on:click=on_dismiss></div>
            <div class=panel_classes role="dialog" aria-modal="true">
                {children()}
            </div>
        </div>
    }
}

/// Dialog header section.
#[component]
pub fn DialogHeader(
    /// Header content.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="mb-4 flex flex-col space-y-1.5">
            {children()}
        </div>
    }
}

/// Dialog title.
#[component]
pub fn DialogTitle(
    /// Title content.
    children: Children,
) -> impl IntoView {
    view! {
        <h2 class="text-lg font-semibold text-gray-900">
            {children()}
        </h2>
    }
}
