//! Partitioning of guild members into testers and candidates.

use derive_getters::Getters;
use tracing::{debug, instrument};

use crate::{Candidate, GuildMemberJson};

/// Outcome of classifying a fetched member list.
///
/// `tester_count + candidates.len() + excluded_bots` always equals the number
/// of members classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Classification {
    /// Members holding at least one role, bots included
    tester_count: usize,
    /// Role-less bot accounts
    excluded_bots: usize,
    /// Role-less human members, in fetch order
    candidates: Vec<Candidate>,
}

impl Classification {
    /// Total number of members that went into this classification.
    pub fn total(&self) -> usize {
        self.tester_count + self.excluded_bots + self.candidates.len()
    }

    /// Consume the classification, yielding its candidates.
    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}

/// Classify members in fetch order.
///
/// A member with any role is a tester even when it is a bot. Role-less bots
/// are dropped. Everyone else becomes a candidate.
#[instrument(skip_all, fields(members = members.len()))]
pub fn classify(members: &[GuildMemberJson]) -> Classification {
    let mut classification = Classification::default();

    for member in members {
        if member.has_roles() {
            classification.tester_count += 1;
        } else if member.user().is_bot() {
            classification.excluded_bots += 1;
        } else {
            classification.candidates.push(Candidate::from(member));
        }
    }

    debug!(
        testers = classification.tester_count,
        candidates = classification.candidates.len(),
        excluded_bots = classification.excluded_bots,
        "Classified guild members"
    );

    classification
}
