//! Global application state using Dioxus signals.

use dioxus::prelude::*;
use placescope_core::types::Place;
use placescope_core::{FetchLedger, PlacesClient};

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// API client built at startup; None until the first render adopts it
pub static CLIENT: GlobalSignal<Option<PlacesClient>> = Signal::global(|| None);

/// Current search term, exactly as typed
pub static SEARCH_TERM: GlobalSignal<String> = Signal::global(|| String::new());

/// Places from the most recent successful fetch
pub static PLACES: GlobalSignal<Vec<Place>> = Signal::global(|| vec![]);

/// Total match count reported by the API; shown for context only
pub static TOTAL_COUNT: GlobalSignal<u64> = Signal::global(|| 0);

/// Current page, 1-based
pub static PAGE: GlobalSignal<usize> = Signal::global(|| 1);

/// Rows shown per page
pub static PER_PAGE: GlobalSignal<usize> = Signal::global(|| 3);

/// Fetch limit sent as the `limit` query param
pub static LIMIT: GlobalSignal<u32> = Signal::global(|| 5);

/// Debounce generation; only the newest scheduled search survives
pub static DEBOUNCE_GEN: GlobalSignal<u64> = Signal::global(|| 0);

/// Fetch tickets and the in-flight count; the loading state derives from it
pub static LEDGER: GlobalSignal<FetchLedger> = Signal::global(FetchLedger::new);

/// Round-trip time of the last applied fetch, in ms
pub static FETCH_MS: GlobalSignal<f64> = Signal::global(|| 0.0);
