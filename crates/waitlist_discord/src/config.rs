//! Connection settings for the Discord members endpoint.

use derive_builder::Builder;
use derive_getters::Getters;

/// Default Discord REST API base.
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Largest page the members endpoint will serve.
pub const MAX_PAGE_LIMIT: u32 = 1000;

/// Everything the member client needs to reach one guild.
#[derive(Clone, Getters, Builder)]
#[builder(setter(into))]
pub struct DiscordClientConfig {
    /// Guild (server) snowflake ID
    guild_id: String,
    /// Bot token, sent as `Authorization: Bot <token>`
    bot_token: String,
    /// REST API base URL, without trailing slash
    #[builder(default = "DEFAULT_API_BASE.to_string()")]
    api_base: String,
}

impl DiscordClientConfig {
    /// Creates a new builder for DiscordClientConfig.
    pub fn builder() -> DiscordClientConfigBuilder {
        DiscordClientConfigBuilder::default()
    }

    /// Full URL of the guild members endpoint.
    pub fn members_url(&self) -> String {
        format!(
            "{}/guilds/{}/members",
            self.api_base.trim_end_matches('/'),
            self.guild_id
        )
    }
}

impl std::fmt::Debug for DiscordClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordClientConfig")
            .field("guild_id", &self.guild_id)
            .field("bot_token", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}
