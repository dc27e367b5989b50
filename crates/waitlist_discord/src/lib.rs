//! Discord guild member fetching.
//!
//! [`DiscordMemberClient`] requests single pages from the members endpoint and
//! [`fetch_all_members`] walks the cursor until the guild is exhausted.
//!
//! # Example
//!
//! ```rust,ignore
//! use waitlist_discord::{DiscordClientConfig, DiscordMemberClient, fetch_all_members};
//!
//! let config = DiscordClientConfig::builder()
//!     .guild_id("1005603569187160125")
//!     .bot_token(token)
//!     .build()?;
//! let client = DiscordMemberClient::new(config);
//! let members = fetch_all_members(&client, 1000).await?;
//! ```

mod client;
mod config;
mod paginate;
mod source;

pub use client::DiscordMemberClient;
pub use config::{
    DEFAULT_API_BASE, DiscordClientConfig, DiscordClientConfigBuilder, MAX_PAGE_LIMIT,
};
pub use paginate::fetch_all_members;
pub use source::MemberSource;
