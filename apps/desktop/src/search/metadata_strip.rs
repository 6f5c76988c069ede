//! Metadata strip showing fetched count, API total, and round-trip time.

use dioxus::prelude::*;
use crate::state::*;

#[component]
pub fn MetadataStrip() -> Element {
    let places = PLACES.read();
    let total = TOTAL_COUNT.read();
    let fetch_ms = FETCH_MS.read();
    let term = SEARCH_TERM.read();

    if term.is_empty() || places.is_empty() {
        return rsx! {
            div { class: "metadata-strip hidden" }
        };
    }

    rsx! {
        div {
            class: "metadata-strip",
            span { class: "metadata-count", "{places.len()} of {total} matches" }
            span { class: "metadata-sep", "\u{00B7}" }
            span { class: "metadata-time", "{fetch_ms:.1}ms" }
        }
    }
}
