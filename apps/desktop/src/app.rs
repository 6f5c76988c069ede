//! Root application component: titlebar, search panel, results table.

use dioxus::prelude::*;

use crate::search::SearchPanel;
use crate::table::{PaginationBar, PlacesTable};
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Adopt the client built before launch on first render.
    use_hook(|| {
        if let Some(client) = crate::INITIAL_CLIENT.lock().unwrap().take() {
            *CLIENT.write() = Some(client);
        }
    });

    // Focus requests flow from the shortcut handler down to the search input.
    use_context_provider(|| Signal::new(0u64));

    // Window-wide shortcut: jump back to the search box from anywhere.
    // Registered for the lifetime of this component only.
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{use_global_shortcut, HotKeyState};
        let mut focus_ticks = use_context::<Signal<u64>>();
        _ = use_global_shortcut("cmdorctrl+/", move |state| {
            // The registry fires on both press and release; focus once.
            if state == HotKeyState::Pressed {
                *focus_ticks.write() += 1;
            }
        });
    }

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            // Titlebar (drag region)
            div {
                class: "titlebar",
                span { class: "titlebar-title", "PlaceScope" }
            }

            // Main content area
            div {
                class: "content-area",
                SearchPanel {}
                PlacesTable {}
                PaginationBar {}
            }

            // Status bar
            StatusBar {}
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let client = CLIENT.read();
    let places = PLACES.read();
    let total = TOTAL_COUNT.read();

    let host = match client.as_ref() {
        Some(client) => client.config().api_host().to_string(),
        None => "offline".to_string(),
    };

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-host", "{host}" }
            if !places.is_empty() {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-results", "{places.len()} loaded of {total} total" }
            }
        }
    }
}
