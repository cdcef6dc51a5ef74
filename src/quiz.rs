//! Random next-question selection for the play endpoint.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

/// Pick one question uniformly at random from `candidates`, excluding any
/// whose id appears in `previous`. Returns `None` once the pool is exhausted;
/// exhaustion is a normal end-of-quiz condition, not an error.
pub fn select_next<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question> {
    let eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    eligible.choose(rng).cloned()
}
