//! Card component.

use leptos::prelude::*;

/// Card container component.
///
/// `on_click` takes an Alpine.js expression, so a card can act as a click
/// target (the citation summary cards use this).
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card class="cursor-pointer" on_click="$store.viewer.select(...)">
///         <CardContent class="p-3">
///             <p>"Content goes here"</p>
///         </CardContent>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Alpine.js click handler expression.
    #[prop(into, default = String::new())]
    on_click: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-xl border border-gray-200 bg-white text-gray-900 shadow-sm {}",
        class
    );
    let on_click = (!on_click.is_empty()).then_some(on_click);

    view! {
        <div class=classes x-on:click=on_click>
            {children()}
        </div>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = format!("p-6 {}", class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
