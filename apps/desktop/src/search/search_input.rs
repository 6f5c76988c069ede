//! Hero search input with debounced fetching and shortcut-driven focus.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::fetch::{schedule_search, search_now};
use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let mut search_box: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let focus_ticks = use_context::<Signal<u64>>();

    let term = SEARCH_TERM.read();
    let loading = LEDGER.read().is_loading();
    let has_term = !term.is_empty();

    // Pull focus back whenever the global shortcut bumps the counter.
    use_effect(move || {
        if *focus_ticks.read() == 0 {
            return;
        }
        if let Some(input) = search_box.read().clone() {
            spawn(async move {
                let _ = input.set_focus(true).await;
            });
        }
    });

    rsx! {
        div {
            class: if has_term { "search-field has-term" } else { "search-field" },

            // Label
            span { class: "search-label", "SEARCH" }

            // Input row
            div {
                class: "search-input-row",

                // Search icon
                svg {
                    class: "search-icon",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }

                // Input
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search places...",
                    value: "{term}",
                    autofocus: true,
                    disabled: loading,
                    onmounted: move |e: Event<MountedData>| {
                        search_box.set(Some(e.data()));
                    },
                    oninput: move |e: Event<FormData>| {
                        *SEARCH_TERM.write() = e.value();
                        schedule_search();
                    },
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            *PAGE.write() = 1;
                            search_now();
                        }
                    },
                }

                // Shortcut hint
                span { class: "search-hint", "Ctrl + /" }
            }
        }
    }
}
