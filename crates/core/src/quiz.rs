//! Quiz question selection.
//!
//! The service keeps no session state: every request carries the ids the
//! player has already seen, and selection is re-derived from them each time.

use rand::Rng;

use crate::types::DbId;

/// Category id meaning "questions from every category".
pub const ANY_CATEGORY: DbId = 0;

/// Whether a requested quiz category id means "no category filter".
pub fn is_any_category(category_id: DbId) -> bool {
    category_id == ANY_CATEGORY
}

/// Resolve a requested category into the filter to apply.
///
/// Returns `None` when the quiz spans every category.
pub fn category_filter(category_id: DbId) -> Option<DbId> {
    (!is_any_category(category_id)).then_some(category_id)
}

/// Pick one candidate uniformly at random.
///
/// Returns `None` when no candidates remain, which the game treats as the end
/// of the quiz.
pub fn pick_random<T, R>(mut candidates: Vec<T>, rng: &mut R) -> Option<T>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    let index = rng.random_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}
