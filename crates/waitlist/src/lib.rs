//! Discord guild waiting list reporter.
//!
//! Lists every member of a guild, counts the testers (members holding a role),
//! ranks the role-less humans by join date and publishes the result as a
//! Markdown report with a daily archive copy.

mod pipeline;
mod settings;

pub use pipeline::{build_report, run};
pub use settings::{DEFAULT_LIMIT, WaitlistConfig, WaitlistConfigBuilder};

pub use waitlist_core::{Candidate, Classification, GuildMemberJson, classify, rank};
pub use waitlist_discord::{DiscordClientConfig, DiscordMemberClient, MemberSource};
pub use waitlist_error::{WaitlistError, WaitlistErrorKind, WaitlistResult};
pub use waitlist_report::{Report, ReportTemplate, ReportWriter, WrittenReport, render};
