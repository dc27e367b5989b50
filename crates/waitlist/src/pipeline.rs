//! The fetch, classify, rank, render and persist pipeline.

use chrono::{DateTime, FixedOffset};
use tracing::{info, instrument};
use waitlist_core::{classify, rank};
use waitlist_discord::{MemberSource, fetch_all_members};
use waitlist_error::WaitlistResult;
use waitlist_report::{Report, WrittenReport, render};

use crate::WaitlistConfig;

/// Fetch the guild and build the waiting list report.
///
/// # Errors
///
/// Returns error if any members page cannot be fetched or decoded.
#[instrument(skip(source))]
pub async fn build_report<S>(
    source: &S,
    limit: u32,
    generated_at: DateTime<FixedOffset>,
) -> WaitlistResult<Report>
where
    S: MemberSource + ?Sized,
{
    let members = fetch_all_members(source, limit).await?;
    let classification = classify(&members);
    let tester_count = *classification.tester_count();
    let candidates = rank(classification.into_candidates());

    info!(
        members = members.len(),
        testers = tester_count,
        candidates = candidates.len(),
        "Built waiting list"
    );

    Ok(Report::new(generated_at, tester_count, candidates))
}

/// Run one complete report: fetch, render, and write both output files.
///
/// Nothing is written unless every page was fetched successfully.
///
/// # Errors
///
/// Returns the first fetch, decode or write error encountered.
#[instrument(skip_all, fields(guild_id = %config.guild_id()))]
pub async fn run<S>(
    source: &S,
    config: &WaitlistConfig,
    generated_at: DateTime<FixedOffset>,
) -> WaitlistResult<WrittenReport>
where
    S: MemberSource + ?Sized,
{
    let report = build_report(source, *config.limit(), generated_at).await?;
    let document = render(&report, config.template());
    config.report_writer().write(&document, report.generated_at())
}
