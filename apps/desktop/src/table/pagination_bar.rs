//! Pagination bar: page navigation plus per-page and fetch-limit controls.

use dioxus::prelude::*;
use rfd::{MessageDialog, MessageLevel};

use placescope_core::pagination::{
    clamp_fetch_limit, sanitize_per_page, PageView, MAX_FETCH_LIMIT, MIN_FETCH_LIMIT,
};
use crate::fetch::schedule_search;
use crate::state::*;

#[component]
pub fn PaginationBar() -> Element {
    let places = PLACES.read();
    if places.is_empty() {
        return rsx! {};
    }

    let page = *PAGE.read();
    let per_page = *PER_PAGE.read();
    let limit = *LIMIT.read();
    let view = PageView::new(page, per_page);
    let total_pages = view.total_pages(places.len());

    rsx! {
        div {
            class: "pagination-bar",

            // Page navigation
            div {
                class: "page-nav",
                button {
                    class: "page-btn",
                    disabled: !view.has_prev(),
                    onclick: move |_| {
                        let page = *PAGE.read();
                        if page > 1 {
                            *PAGE.write() = page - 1;
                        }
                    },
                    "<"
                }
                span { class: "page-indicator", "{page} of {total_pages} pages" }
                button {
                    class: "page-btn",
                    disabled: !view.has_next(places.len()),
                    onclick: move |_| {
                        let count = PLACES.read().len();
                        let view = PageView::new(*PAGE.read(), *PER_PAGE.read());
                        if view.has_next(count) {
                            *PAGE.write() = view.page + 1;
                        }
                    },
                    ">"
                }
            }

            // Rows per page; purely local, no refetch
            label {
                class: "pagination-field",
                span { "Per page:" }
                input {
                    class: "pagination-input",
                    r#type: "number",
                    min: "1",
                    value: "{per_page}",
                    oninput: move |e: Event<FormData>| {
                        if let Ok(requested) = e.value().parse::<usize>() {
                            let next = sanitize_per_page(requested);
                            if next != *PER_PAGE.read() {
                                *PER_PAGE.write() = next;
                            }
                            *PAGE.write() = 1;
                        }
                    },
                }
            }

            // Fetch limit; changing it schedules a fresh search
            label {
                class: "pagination-field",
                span { "Fetch Limit:" }
                input {
                    class: "pagination-input",
                    r#type: "number",
                    min: "{MIN_FETCH_LIMIT}",
                    max: "{MAX_FETCH_LIMIT}",
                    value: "{limit}",
                    oninput: move |e: Event<FormData>| {
                        if let Ok(requested) = e.value().parse::<u32>() {
                            let clamped = clamp_fetch_limit(requested);
                            if clamped.exceeded_max {
                                MessageDialog::new()
                                    .set_level(MessageLevel::Warning)
                                    .set_title("PlaceScope")
                                    .set_description(format!(
                                        "Warning: Value exceeds maximum limit of {MAX_FETCH_LIMIT}"
                                    ))
                                    .show();
                            }
                            if clamped.value != *LIMIT.read() {
                                *LIMIT.write() = clamped.value;
                                schedule_search();
                            }
                        }
                    },
                }
            }
        }
    }
}
