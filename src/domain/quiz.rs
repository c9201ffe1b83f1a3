use rand::seq::SliceRandom;
use rand::Rng;

use super::question::Question;

/// Category id the game sends when the player picks "All"
pub const ALL_CATEGORIES: i32 = 0;

/// Maps the quiz category id onto a store filter
///
/// Returns `None` when questions from every category are eligible.
pub fn category_filter(category_id: i32) -> Option<i32> {
    if category_id == ALL_CATEGORIES {
        None
    } else {
        Some(category_id)
    }
}

/// Picks the next quiz question uniformly from the candidate set
///
/// An empty candidate set means the quiz is over.
pub fn pick_next_question<R: Rng + ?Sized>(
    candidates: &[Question],
    rng: &mut R,
) -> Option<Question> {
    candidates.choose(rng).cloned()
}
