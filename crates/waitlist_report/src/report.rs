//! Report data and presentation settings.

use chrono::{DateTime, FixedOffset};
use derive_builder::Builder;
use derive_getters::Getters;
use waitlist_core::Candidate;

/// Default report heading.
pub const DEFAULT_TITLE: &str = "Ghostty Waiting List";
/// Default community named in the pointer line.
pub const DEFAULT_COMMUNITY_NAME: &str = "Ghostty";
/// Default channel the pointer line links to.
pub const DEFAULT_COMMUNITY_URL: &str =
    "https://discord.com/channels/1005603569187160125/1140732798773248121";

/// A snapshot of the waiting list at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Report {
    /// When the report was generated, in the operator's local offset
    generated_at: DateTime<FixedOffset>,
    /// Members holding at least one role
    tester_count: usize,
    /// Candidates, earliest joiner first
    candidates: Vec<Candidate>,
}

impl Report {
    /// Assemble a report from ranked candidates.
    pub fn new(
        generated_at: DateTime<FixedOffset>,
        tester_count: usize,
        candidates: Vec<Candidate>,
    ) -> Self {
        Self {
            generated_at,
            tester_count,
            candidates,
        }
    }

    /// Number of members waiting for a role.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}

/// Fixed texts surrounding the report data.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
#[builder(setter(into))]
pub struct ReportTemplate {
    /// Heading, followed by the generation time
    #[builder(default = "DEFAULT_TITLE.to_string()")]
    title: String,
    /// Community whose official discord questions are redirected to
    #[builder(default = "DEFAULT_COMMUNITY_NAME.to_string()")]
    community_name: String,
    /// Channel link printed under the pointer line
    #[builder(default = "DEFAULT_COMMUNITY_URL.to_string()")]
    community_url: String,
}

impl ReportTemplate {
    /// Creates a new builder for ReportTemplate.
    pub fn builder() -> ReportTemplateBuilder {
        ReportTemplateBuilder::default()
    }
}

impl Default for ReportTemplate {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            community_name: DEFAULT_COMMUNITY_NAME.to_string(),
            community_url: DEFAULT_COMMUNITY_URL.to_string(),
        }
    }
}
