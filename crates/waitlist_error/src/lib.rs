//! Error types for the guild waiting list reporter.
//!
//! Every stage of the pipeline reports failures through these types. None of
//! them is recovered from: they travel up to the binary, which logs and exits.

mod config;
mod http;
mod json;
mod storage;

pub use config::ConfigError;
pub use http::HttpError;
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum WaitlistErrorKind {
    /// Request failed or returned a non-success status
    #[display("{}", _0)]
    Http(HttpError),
    /// Response body was not the expected JSON shape
    #[display("{}", _0)]
    Json(JsonError),
    /// Report could not be written
    #[display("{}", _0)]
    Storage(StorageError),
    /// Missing or invalid configuration
    #[display("{}", _0)]
    Config(ConfigError),
}

/// Waitlist error with kind discrimination.
#[derive(Debug)]
pub struct WaitlistError(Box<WaitlistErrorKind>);

impl WaitlistError {
    /// Create a new error from a kind.
    pub fn new(kind: WaitlistErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WaitlistErrorKind {
        &self.0
    }
}

impl std::fmt::Display for WaitlistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Waitlist Error: {}", self.0)
    }
}

impl std::error::Error for WaitlistError {}

// Generic From implementation for any type that converts to WaitlistErrorKind
impl<T> From<T> for WaitlistError
where
    T: Into<WaitlistErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for waitlist operations.
pub type WaitlistResult<T> = std::result::Result<T, WaitlistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_preserved_through_conversion() {
        let err: WaitlistError = HttpError::with_status(503, "unavailable").into();
        match err.kind() {
            WaitlistErrorKind::Http(http) => assert_eq!(http.status, Some(503)),
            other => panic!("unexpected kind: {other}"),
        }
    }

    #[test]
    fn test_display_includes_inner_message() {
        let err = WaitlistError::from(ConfigError::new("BOT_TOKEN is required"));
        let text = err.to_string();
        assert!(text.starts_with("Waitlist Error: Configuration Error"));
        assert!(text.contains("BOT_TOKEN is required"));
    }

    #[test]
    fn test_config_error_names_variable() {
        let err =
            WaitlistError::from(ConfigError::for_variable("LIMIT", "must be between 1 and 1000"));
        match err.kind() {
            WaitlistErrorKind::Config(config) => assert_eq!(config.variable, Some("LIMIT")),
            other => panic!("unexpected kind: {other}"),
        }
        assert!(err.to_string().contains("LIMIT must be between 1 and 1000"));
    }
}
