//! Client-side pagination over an already-fetched result set.
//!
//! Page math is derived from the number of records actually held locally,
//! not from the API's reported total. The API caps each fetch at the
//! requested limit, so the two routinely disagree; the total is shown for
//! context only and never drives navigation.

/// Smallest fetch limit the UI will send.
pub const MIN_FETCH_LIMIT: u32 = 5;

/// Largest fetch limit the UI will send.
pub const MAX_FETCH_LIMIT: u32 = 10;

/// Rows-per-page floor; a page of zero rows could never advance.
pub const MIN_PER_PAGE: usize = 1;

/// A fetch limit forced into `[MIN_FETCH_LIMIT, MAX_FETCH_LIMIT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedLimit {
    /// The limit to actually use.
    pub value: u32,
    /// Whether the request was over the cap and should trigger a warning.
    pub exceeded_max: bool,
}

/// Clamps a requested fetch limit into bounds.
///
/// Undershooting is silently raised to the floor; overshooting is lowered
/// to the cap and flagged so the UI can tell the user.
pub fn clamp_fetch_limit(requested: u32) -> ClampedLimit {
    ClampedLimit {
        value: requested.clamp(MIN_FETCH_LIMIT, MAX_FETCH_LIMIT),
        exceeded_max: requested > MAX_FETCH_LIMIT,
    }
}

/// Raises a requested rows-per-page to at least [`MIN_PER_PAGE`].
pub fn sanitize_per_page(requested: usize) -> usize {
    requested.max(MIN_PER_PAGE)
}

/// A window onto a locally held result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    /// Current page, 1-based.
    pub page: usize,
    /// Rows shown per page, always at least [`MIN_PER_PAGE`].
    pub per_page: usize,
}

impl PageView {
    /// Builds a view, forcing both fields into their valid ranges.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: sanitize_per_page(per_page),
        }
    }

    /// Number of pages needed to show `count` records; zero when empty.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.per_page)
    }

    /// Index range of this page within a list of `count` records.
    ///
    /// A page past the end yields an empty range rather than panicking,
    /// so callers can slice with it directly.
    pub fn slice_range(&self, count: usize) -> std::ops::Range<usize> {
        let start = (self.page - 1).saturating_mul(self.per_page).min(count);
        let end = start.saturating_add(self.per_page).min(count);
        start..end
    }

    /// Offset added to a row's on-page index to get its global 1-based rank.
    pub fn rank_base(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists for `count` records.
    pub fn has_next(&self, count: usize) -> bool {
        self.page < self.total_pages(count)
    }
}
