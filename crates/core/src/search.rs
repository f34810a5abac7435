//! Substring search helpers.

/// Escape character used in the generated `LIKE` pattern.
///
/// Matches PostgreSQL's default `LIKE` escape, so queries need no explicit
/// `ESCAPE` clause.
pub const LIKE_ESCAPE: char = '\\';

/// Build a case-insensitive substring pattern for `LOWER(column) LIKE $1`.
///
/// The term is lower-cased and its `LIKE` metacharacters are escaped, so
/// `50%` matches the literal text "50%" rather than acting as a wildcard.
/// An empty term yields `%%`, which matches every row.
pub fn like_pattern(term: &str) -> String {
    let lowered = term.to_lowercase();
    let mut pattern = String::with_capacity(lowered.len() + 2);
    pattern.push('%');
    for c in lowered.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
