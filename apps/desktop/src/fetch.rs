//! Debounce scheduling and fetch sequencing for place searches.
//!
//! Keystrokes schedule a trailing-edge debounced search; Enter runs one
//! immediately. Every fetch takes a ticket from the shared
//! [`FetchLedger`][placescope_core::FetchLedger] and its response is
//! applied only while that ticket is still the newest, so overlapping
//! fetches can never publish out of order.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use tracing::error;

use crate::state::*;

/// Trailing-edge debounce window for keystroke-driven searches.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Schedules a debounced search for the current term.
///
/// Each call supersedes any pending one; only the generation that is
/// still current when the timer fires actually runs.
pub fn schedule_search() {
    let generation = *DEBOUNCE_GEN.read() + 1;
    *DEBOUNCE_GEN.write() = generation;

    spawn(async move {
        tokio::time::sleep(SEARCH_DEBOUNCE).await;
        if *DEBOUNCE_GEN.read() != generation {
            return;
        }

        if SEARCH_TERM.read().is_empty() {
            // An empty term clears without a request. Invalidating the
            // ledger keeps a still-running fetch from resurrecting old rows.
            *PLACES.write() = vec![];
            *TOTAL_COUNT.write() = 0;
            LEDGER.write().invalidate();
            return;
        }

        *PAGE.write() = 1;
        run_search().await;
    });
}

/// Runs a search for the current term right away, skipping the debounce.
pub fn search_now() {
    spawn(async move {
        run_search().await;
    });
}

/// One fetch round trip: take a ticket, run the request, settle the ticket
/// and apply the response only if it is still newest. Failures are logged
/// and the previous rows stay on screen.
async fn run_search() {
    let client = match CLIENT.read().clone() {
        Some(client) => client,
        None => return,
    };
    let term = SEARCH_TERM.read().clone();
    if term.is_empty() {
        return;
    }
    let limit = *LIMIT.read();

    let ticket = LEDGER.write().begin();

    let start = Instant::now();
    let result = client.search(&term, limit).await;
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;

    // Settling also lowers the in-flight count, whatever the outcome below.
    let apply = LEDGER.write().settle(ticket);

    match result {
        Ok(response) => {
            if !apply {
                return;
            }
            *PLACES.write() = response.data;
            *TOTAL_COUNT.write() = response.metadata.total_count;
            *FETCH_MS.write() = elapsed;
        }
        Err(err) => {
            error!(error = %err, "Place search failed");
        }
    }
}
