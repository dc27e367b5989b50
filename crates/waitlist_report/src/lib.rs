//! Waiting list report rendering and persistence.
//!
//! A [`Report`] is rendered to Markdown by [`render`] and stored by
//! [`ReportWriter`] twice: once as the latest list, once in a per-day archive.

mod render;
mod report;
mod writer;

pub use render::{TIMESTAMP_FORMAT, age_in_days, render};
pub use report::{
    DEFAULT_COMMUNITY_NAME, DEFAULT_COMMUNITY_URL, DEFAULT_TITLE, Report, ReportTemplate,
    ReportTemplateBuilder,
};
pub use writer::{DEFAULT_ARCHIVE_DIR, DEFAULT_CURRENT_PATH, ReportWriter, WrittenReport};
