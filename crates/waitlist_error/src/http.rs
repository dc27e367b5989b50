//! HTTP error types.

/// HTTP error covering transport failures and non-success responses.
#[derive(Debug, Clone)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// Response status, when the server answered at all
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError for a request that never produced a response.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// assert!(err.status.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a new HttpError for a response with a non-success status.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist_error::HttpError;
    ///
    /// let err = HttpError::with_status(401, "401: Unauthorized");
    /// assert_eq!(err.status, Some(401));
    /// ```
    #[track_caller]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: Some(status),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(
                f,
                "HTTP Error (status {}): {} at line {} in {}",
                status, self.message, self.line, self.file
            ),
            None => write!(
                f,
                "HTTP Error: {} at line {} in {}",
                self.message, self.line, self.file
            ),
        }
    }
}

impl std::error::Error for HttpError {}
