//! Results table: ranked place rows with country flags.

mod pagination_bar;

use dioxus::prelude::*;
pub use pagination_bar::PaginationBar;

use placescope_core::pagination::PageView;
use crate::state::*;

/// Result table for the current page, or a loader while a fetch runs.
#[component]
pub fn PlacesTable() -> Element {
    let loading = LEDGER.read().is_loading();
    let places = PLACES.read();
    let term = SEARCH_TERM.read();

    if loading {
        return rsx! {
            div {
                class: "table-loading",
                span { class: "loader" }
            }
        };
    }

    let view = PageView::new(*PAGE.read(), *PER_PAGE.read());
    let rows = &places[view.slice_range(places.len())];
    let rank_base = view.rank_base();

    rsx! {
        table {
            class: "places-table",
            thead {
                tr {
                    th { class: "col-rank", "#" }
                    th { class: "col-name", "Place Name" }
                    th { class: "col-country", "Country" }
                }
            }
            tbody {
                if places.is_empty() {
                    tr {
                        td {
                            class: "table-empty",
                            colspan: "3",
                            if term.is_empty() { "Start searching" } else { "No results found" }
                        }
                    }
                } else {
                    for (i, place) in rows.iter().enumerate() {
                        tr {
                            key: "{place.id}",
                            td { class: "col-rank", "{rank_base + i + 1}" }
                            td { class: "col-name", "{place.name}" }
                            td {
                                class: "col-country",
                                img {
                                    class: "country-flag",
                                    src: "{place.flag_url()}",
                                    alt: "{place.country}",
                                }
                                span { "{place.country}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
