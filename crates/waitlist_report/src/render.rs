//! Markdown rendering.

use chrono::{DateTime, FixedOffset, Utc};
use tracing::instrument;

use crate::{Report, ReportTemplate};

/// Display format for every timestamp in the report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a report as a Markdown document.
///
/// The output depends only on the arguments; ages are measured against the
/// report's generation time, so rendering the same report twice yields the
/// same bytes.
#[instrument(
    skip_all,
    fields(testers = report.tester_count(), candidates = report.candidate_count())
)]
pub fn render(report: &Report, template: &ReportTemplate) -> String {
    let mut markdown = String::new();

    markdown.push_str(&format!(
        "# {}, {} \n",
        template.title(),
        report.generated_at().format(TIMESTAMP_FORMAT)
    ));
    markdown.push_str("This is the _inofficial_ waiting list.\n");
    markdown.push_str(&format!(
        "There are {} testers and {} in the queue.\n",
        report.tester_count(),
        report.candidate_count()
    ));
    markdown.push_str(&format!(
        "If you have any questions, check the official {} discord.\n",
        template.community_name()
    ));
    markdown.push_str(&format!("{}\n\n", template.community_url()));

    markdown.push_str("```mermaid\n");
    markdown.push_str("pie title Beta participants\n");
    markdown.push_str(&format!("    \"Tester\" : {}\n", report.tester_count()));
    markdown.push_str(&format!("    \"Aspirant\" : {}\n", report.candidate_count()));
    markdown.push_str("```\n\n");

    markdown.push_str("|#|Username|Joined At|Days|\n");
    markdown.push_str("|---|---|---|---|\n");
    for (index, candidate) in report.candidates().iter().enumerate() {
        markdown.push_str(&format!(
            "|{}|{}|{}|{}|\n",
            index + 1,
            escape_cell(candidate.username()),
            candidate.joined_at().format(TIMESTAMP_FORMAT),
            age_in_days(candidate.joined_at(), report.generated_at())
        ));
    }

    markdown
}

/// Whole days between joining and `now`, truncated toward zero.
pub fn age_in_days(joined_at: &DateTime<Utc>, now: &DateTime<FixedOffset>) -> i64 {
    now.signed_duration_since(*joined_at).num_hours() / 24
}

// Pipes would split the username across table columns.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
