//! Report persistence.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use derive_getters::Getters;
use tracing::{error, info, instrument};
use waitlist_error::{StorageError, StorageErrorKind, WaitlistResult};

/// Default location of the latest report.
pub const DEFAULT_CURRENT_PATH: &str = "list.md";
/// Default directory holding one report per day.
pub const DEFAULT_ARCHIVE_DIR: &str = "archive";

/// Paths a report was written to.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct WrittenReport {
    current: PathBuf,
    archive: PathBuf,
}

/// Writes rendered reports to the current file and the daily archive.
#[derive(Debug, Clone, Getters)]
pub struct ReportWriter {
    current_path: PathBuf,
    archive_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer for the given current file and archive directory.
    pub fn new(current_path: impl Into<PathBuf>, archive_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_path: current_path.into(),
            archive_dir: archive_dir.into(),
        }
    }

    /// Archive file for the calendar day of `generated_at`.
    pub fn archive_path(&self, generated_at: &DateTime<FixedOffset>) -> PathBuf {
        self.archive_dir
            .join(format!("{}.md", generated_at.format("%Y-%m-%d")))
    }

    /// Write `document` to the current file and to the day's archive file,
    /// replacing whatever either held before.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the archive directory cannot be created or
    /// either file cannot be written.
    #[instrument(skip(self, document), fields(bytes = document.len()))]
    pub fn write(
        &self,
        document: &str,
        generated_at: &DateTime<FixedOffset>,
    ) -> WaitlistResult<WrittenReport> {
        let archive = self.archive_path(generated_at);

        if let Some(parent) = self.current_path.parent() {
            create_dir(parent)?;
        }
        create_dir(&self.archive_dir)?;

        write_file(&self.current_path, document)?;
        write_file(&archive, document)?;

        info!(
            current = %self.current_path.display(),
            archive = %archive.display(),
            "Wrote waiting list report"
        );

        Ok(WrittenReport {
            current: self.current_path.clone(),
            archive,
        })
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENT_PATH, DEFAULT_ARCHIVE_DIR)
    }
}

fn create_dir(path: &Path) -> WaitlistResult<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to create directory");
        StorageError::new(StorageErrorKind::CreateDir {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;
    Ok(())
}

fn write_file(path: &Path, document: &str) -> WaitlistResult<()> {
    fs::write(path, document).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to write report");
        StorageError::new(StorageErrorKind::Write {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;
    Ok(())
}
