//! Waiting list candidates.

use chrono::{DateTime, Utc};
use derive_getters::Getters;

use crate::GuildMemberJson;

/// A member waiting for a role: no roles held and not a bot.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Candidate {
    username: String,
    joined_at: DateTime<Utc>,
}

impl Candidate {
    /// Create a candidate from its username and join time.
    pub fn new(username: impl Into<String>, joined_at: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            joined_at,
        }
    }
}

impl From<&GuildMemberJson> for Candidate {
    fn from(member: &GuildMemberJson) -> Self {
        Self::new(member.user().username().clone(), *member.joined_at())
    }
}
