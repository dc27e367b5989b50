//! Member page sources.

use async_trait::async_trait;
use waitlist_core::GuildMemberJson;
use waitlist_error::WaitlistResult;

/// Anything that can serve pages of guild members.
///
/// The production implementation talks to Discord; tests substitute an
/// in-memory source.
#[async_trait]
pub trait MemberSource: Send + Sync {
    /// Fetch at most `limit` members whose IDs sort after `after`.
    ///
    /// An empty `after` starts from the beginning of the member list.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the page cannot be decoded.
    async fn fetch_page(&self, limit: u32, after: &str) -> WaitlistResult<Vec<GuildMemberJson>>;
}
