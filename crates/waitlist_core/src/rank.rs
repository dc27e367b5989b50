//! Waiting list ordering.

use crate::Candidate;

/// Order candidates by join time, earliest first.
///
/// The sort is stable, so candidates who joined at the same instant keep their
/// fetch order and unchanged input always ranks the same way.
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|candidate| *candidate.joined_at());
    candidates
}
