//! Cursor pagination over a member source.

use tracing::{info, instrument};
use waitlist_core::GuildMemberJson;
use waitlist_error::WaitlistResult;

use crate::MemberSource;

/// Fetch every member of the guild, page by page.
///
/// Each request resumes after the ID of the last member of the previous page.
/// Fetching stops at the first page holding fewer than `limit` members, empty
/// pages included. Members are returned in the order received. The first
/// failing page aborts the whole fetch.
#[instrument(skip(source))]
pub async fn fetch_all_members<S>(source: &S, limit: u32) -> WaitlistResult<Vec<GuildMemberJson>>
where
    S: MemberSource + ?Sized,
{
    let mut after = String::new();
    let mut members = Vec::new();

    loop {
        info!(after = %after, "Get guild members");
        let page = source.fetch_page(limit, &after).await?;
        let page_len = page.len();

        let next_cursor = page.last().map(|member| member.user().id().clone());
        members.extend(page);

        match next_cursor {
            Some(cursor) if page_len >= limit as usize => after = cursor,
            _ => break,
        }
    }

    info!(total = members.len(), "Fetched all guild members");
    Ok(members)
}
