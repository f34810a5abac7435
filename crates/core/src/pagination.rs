//! Page-number handling for the question listing.
//!
//! Pages are 1-indexed and hold [`QUESTIONS_PER_PAGE`] questions each. The
//! window is translated into an `OFFSET`/`LIMIT` pair so the slicing happens
//! in the query rather than over a full table scan.

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Page used when the `page` parameter is missing or unusable.
pub const DEFAULT_PAGE: i64 = 1;

/// Parse a raw `page` query value.
///
/// Missing, non-numeric, and non-positive values fall back to
/// [`DEFAULT_PAGE`].
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(DEFAULT_PAGE)
}

/// Row offset of the first question on `page`.
pub fn page_offset(page: i64) -> i64 {
    page.max(1)
        .saturating_sub(1)
        .saturating_mul(QUESTIONS_PER_PAGE)
}

/// `(offset, limit)` pair for `page`.
pub fn page_window(page: i64) -> (i64, i64) {
    (page_offset(page), QUESTIONS_PER_PAGE)
}
