//! reqwest-backed member source.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use waitlist_core::GuildMemberJson;
use waitlist_error::{HttpError, JsonError, WaitlistResult};

use crate::{DiscordClientConfig, MemberSource};

/// Client for the Discord `GET /guilds/{guild.id}/members` endpoint.
#[derive(Debug, Clone)]
pub struct DiscordMemberClient {
    client: Client,
    config: DiscordClientConfig,
}

impl DiscordMemberClient {
    /// Creates a client for the configured guild.
    #[instrument(skip_all, fields(guild_id = %config.guild_id()))]
    pub fn new(config: DiscordClientConfig) -> Self {
        debug!(url = %config.members_url(), "Created Discord member client");
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &DiscordClientConfig {
        &self.config
    }
}

/// Query string for one page request. `after` is only sent when set.
pub(crate) fn page_query(limit: u32, after: &str) -> Vec<(&'static str, String)> {
    let mut query = vec![("limit", limit.to_string())];
    if !after.is_empty() {
        query.push(("after", after.to_string()));
    }
    query
}

#[async_trait]
impl MemberSource for DiscordMemberClient {
    #[instrument(skip(self), fields(guild_id = %self.config.guild_id()))]
    async fn fetch_page(&self, limit: u32, after: &str) -> WaitlistResult<Vec<GuildMemberJson>> {
        let response = self
            .client
            .get(self.config.members_url())
            .query(&page_query(limit, after))
            .header("Authorization", format!("Bot {}", self.config.bot_token()))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                HttpError::new(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Discord API error");
            return Err(HttpError::with_status(status.as_u16(), error_text).into());
        }

        let body = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            HttpError::new(format!("Failed to read body: {}", e))
        })?;

        let members: Vec<GuildMemberJson> = serde_json::from_slice(&body).map_err(|e| {
            error!(error = ?e, "Failed to parse members page");
            JsonError::new(format!("Failed to parse members page: {}", e))
        })?;

        debug!(count = members.len(), "Received members page");
        Ok(members)
    }
}
