//! Bookkeeping for overlapping fetches.
//!
//! The UI may issue several searches at once: the Enter key fires
//! immediately and does not cancel a pending debounced search, so both can
//! reach the network. Responses come back in completion order, not issue
//! order. The ledger decides two things: whether a completed response may
//! be applied (only the most recently issued fetch wins), and whether the
//! UI should still show as loading (any fetch still in flight).

/// Tracks issued fetches and arbitrates which response gets applied.
///
/// Every fetch takes a ticket from [`begin`][FetchLedger::begin] and hands
/// it back to [`settle`][FetchLedger::settle] when its response (or error)
/// arrives. Only the newest ticket is allowed to publish results; stale
/// tickets still lower the in-flight count so the loading flag cannot get
/// stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchLedger {
    latest: u64,
    in_flight: u32,
}

impl FetchLedger {
    /// A ledger with no fetches issued.
    pub const fn new() -> Self {
        Self { latest: 0, in_flight: 0 }
    }

    /// Registers a new fetch and returns its ticket.
    ///
    /// The new ticket supersedes every earlier one: any fetch still in
    /// flight is stale from this point on.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.in_flight += 1;
        self.latest
    }

    /// Records that the fetch holding `ticket` finished, successfully or
    /// not, and reports whether its response may be applied.
    ///
    /// Returns `true` only while `ticket` is still the newest issued. The
    /// in-flight count drops either way; error paths call this too.
    pub fn settle(&mut self, ticket: u64) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        ticket == self.latest
    }

    /// Supersedes every outstanding ticket without issuing a fetch.
    ///
    /// Used when results are cleared directly (empty search term): a
    /// response still in flight must not resurrect the cleared rows.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    /// Whether any fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_fetch_settles_and_applies() {
        let mut ledger = FetchLedger::new();
        assert!(!ledger.is_loading());

        let ticket = ledger.begin();
        assert!(ledger.is_loading());

        assert!(ledger.settle(ticket));
        assert!(!ledger.is_loading());
    }

    #[test]
    fn newer_ticket_supersedes_a_slower_earlier_fetch() {
        let mut ledger = FetchLedger::new();
        let first = ledger.begin();
        let second = ledger.begin();

        // The older request resolves last; it must not be applied.
        assert!(ledger.settle(second));
        assert!(!ledger.settle(first));
    }

    #[test]
    fn loading_holds_until_every_fetch_settles() {
        let mut ledger = FetchLedger::new();
        let first = ledger.begin();
        let second = ledger.begin();

        // Out-of-order completion: the newest settles first.
        assert!(ledger.settle(second));
        assert!(ledger.is_loading());

        ledger.settle(first);
        assert!(!ledger.is_loading());
    }

    #[test]
    fn invalidate_blocks_a_stale_in_flight_apply() {
        let mut ledger = FetchLedger::new();
        let ticket = ledger.begin();

        ledger.invalidate();

        assert!(!ledger.settle(ticket));
        assert!(!ledger.is_loading());
    }

    #[test]
    fn failed_fetches_still_lower_the_count() {
        let mut ledger = FetchLedger::new();
        let ticket = ledger.begin();

        // The error path ignores the verdict but must settle the ticket.
        let _ = ledger.settle(ticket);
        assert!(!ledger.is_loading());
    }

    #[test]
    fn settling_twice_does_not_underflow() {
        let mut ledger = FetchLedger::new();
        let ticket = ledger.begin();
        ledger.settle(ticket);
        ledger.settle(ticket);
        assert!(!ledger.is_loading());
    }
}
