//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Could not create the directory holding a report
    #[display("Failed to create directory {}: {}", path, reason)]
    CreateDir {
        /// Directory that could not be created
        path: String,
        /// Underlying I/O error
        reason: String,
    },
    /// Could not write a report file
    #[display("Failed to write {}: {}", path, reason)]
    Write {
        /// File that could not be written
        path: String,
        /// Underlying I/O error
        reason: String,
    },
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use waitlist_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Write {
///     path: "list.md".to_string(),
///     reason: "permission denied".to_string(),
/// });
/// assert!(format!("{}", err).contains("list.md"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
