//! PlaceScope Desktop: Dioxus-powered place search client.

use std::sync::Mutex;

use dioxus::prelude::*;
use placescope_core::{PlacesClient, PlacesConfig};

mod app;
mod state;
mod search;
mod table;
mod fetch;

use app::App;

/// Pre-runtime storage; built before Dioxus launches, consumed on first render.
pub static INITIAL_CLIENT: Mutex<Option<PlacesClient>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("placescope_core=info".parse().unwrap())
                .add_directive("placescope_desktop=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Read configuration once, before the UI starts.
    let config = PlacesConfig::from_env();
    let client = PlacesClient::new(config).expect("Could not build the places API client");
    *INITIAL_CLIENT.lock().unwrap() = Some(client);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder, LogicalSize};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((10, 10, 10, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("PlaceScope")
                            .with_inner_size(LogicalSize::new(900.0, 640.0))
                            .with_min_inner_size(LogicalSize::new(640.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
