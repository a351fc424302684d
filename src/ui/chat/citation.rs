//! Citation summary cards and the detail dialog.

use leptos::prelude::*;

use crate::chat::Citation;
use crate::ui::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, Dialog,
    DialogHeader, DialogTitle, ExternalLinkIcon, XIcon,
};

/// Build the Alpine expression selecting this citation into the viewer store.
fn select_expression(citation: &Citation) -> String {
    let payload = serde_json::to_string(citation).unwrap_or_else(|_| "null".to_string());
    format!("$store.viewer.select({payload})")
}

/// Build the Alpine expression opening the external document.
///
/// Runs on the open-document control, which sits inside the clickable card;
/// propagation is stopped so the card's own handler never fires.
fn open_expression(link: &str) -> String {
    let escaped = link.replace('\\', "\\\\").replace('\'', "\\'");
    format!("$event.stopPropagation(); window.open('{escaped}', '_blank')")
}

/// Citation summary entry: quoted excerpt, paragraph badge, source label, and
/// the explicit open-document control.
///
/// Clicking the card selects the citation and opens the detail dialog; the
/// open-document control opens the external link directly without touching
/// the selection.
#[component]
pub fn CitationCard(
    /// Citation to summarize.
    citation: Citation,
) -> impl IntoView {
    let select = select_expression(&citation);
    let open = open_expression(&citation.link);

    let excerpt = format!("\u{201c}{}\u{201d}", citation.text);
    let paragraph = citation.paragraph.clone();
    let source = citation.source.clone();

    view! {
        <Card class="mb-2 cursor-pointer hover:bg-gray-50 transition-colors" on_click=select>
            <CardContent class="p-3">
                <div class="flex items-start justify-between gap-3">
                    <div class="flex-1">
                        <p class="text-sm text-gray-700 mb-2">{excerpt}</p>
                        <div class="flex items-center gap-2">
                            {paragraph.map(|label| view! {
                                <Badge variant=BadgeVariant::Secondary class="text-xs">
                                    {label}
                                </Badge>
                            })}
                            <span class="text-xs text-gray-500">{source}</span>
                        </div>
                    </div>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class="flex-shrink-0 hover:bg-blue-100"
                        on_click=open
                    >
                        <ExternalLinkIcon class="text-blue-600" />
                    </Button>
                </div>
            </CardContent>
        </Card>
    }
}

/// Citation detail dialog, bound to the Alpine `viewer` store.
///
/// Shows the full excerpt, source, and paragraph label of the selected
/// citation, with actions to open the external document or dismiss.
#[component]
pub fn CitationDialog() -> impl IntoView {
    view! {
        <Dialog show="$store.viewer.selected" on_dismiss="$store.viewer.dismiss()">
            <DialogHeader>
                <div class="flex items-start justify-between">
                    <DialogTitle>"Citation Details"</DialogTitle>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        on_click="$store.viewer.dismiss()"
                    >
                        <XIcon />
                    </Button>
                </div>
            </DialogHeader>

            <div class="space-y-4">
                <div>
                    <h4 class="font-semibold mb-2">"Source:"</h4>
                    <p class="text-sm text-gray-600" x-text="$store.viewer.selected?.source"></p>
                </div>
                <div>
                    <h4 class="font-semibold mb-2">"Reference:"</h4>
                    <Badge variant=BadgeVariant::Secondary>
                        <span x-text="$store.viewer.selected?.paragraph || ''"></span>
                    </Badge>
                </div>
                <div>
                    <h4 class="font-semibold mb-2">"Quoted Text:"</h4>
                    <p
                        class="text-sm text-gray-700 italic"
                        x-text="$store.viewer.selected?.text"
                    ></p>
                </div>
                <div class="flex gap-2 pt-4">
                    <Button on_click="window.open($store.viewer.selected?.link, '_blank')">
                        <ExternalLinkIcon />
                        "Open PDF Document"
                    </Button>
                    <Button variant=ButtonVariant::Outline on_click="$store.viewer.dismiss()">
                        "Close"
                    </Button>
                </div>
            </div>
        </Dialog>
    }
}
