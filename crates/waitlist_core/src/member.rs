//! JSON models for Discord guild members.
//!
//! Only the fields the report consumes are modeled. Everything else the
//! members endpoint returns (avatars, banners, flags, nicknames, decoration
//! data) is skipped by the decoder.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// JSON model for the user object embedded in a guild member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Getters, Builder)]
#[builder(setter(into))]
pub struct DiscordUserJson {
    /// Discord snowflake ID, kept as a string because it is used verbatim
    /// as the pagination cursor
    id: String,
    /// Username without @
    username: String,
    /// Bot account marker (absent or null for regular users)
    #[serde(default)]
    #[builder(default)]
    bot: Option<bool>,
}

impl DiscordUserJson {
    /// Creates a new builder for DiscordUserJson.
    pub fn builder() -> DiscordUserJsonBuilder {
        DiscordUserJsonBuilder::default()
    }

    /// Whether the account is flagged as a bot.
    pub fn is_bot(&self) -> bool {
        self.bot.unwrap_or(false)
    }
}

/// JSON model for a guild member as returned by `GET /guilds/{id}/members`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Getters, Builder)]
#[builder(setter(into))]
pub struct GuildMemberJson {
    /// The member's user account
    user: DiscordUserJson,
    /// Role IDs held in the guild
    #[serde(default)]
    #[builder(default)]
    roles: Vec<String>,
    /// When the user joined the guild
    joined_at: DateTime<Utc>,
}

impl GuildMemberJson {
    /// Creates a new builder for GuildMemberJson.
    pub fn builder() -> GuildMemberJsonBuilder {
        GuildMemberJsonBuilder::default()
    }

    /// Whether the member holds at least one role.
    pub fn has_roles(&self) -> bool {
        !self.roles.is_empty()
    }
}
