//! Configuration error types.

/// Configuration error with source location.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Environment variable at fault, when a single one is to blame
    pub variable: Option<&'static str>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a ConfigError that is not tied to one variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist_error::ConfigError;
    ///
    /// let err = ConfigError::new("Failed to read environment");
    /// assert!(err.variable.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            variable: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a ConfigError blaming one environment variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist_error::ConfigError;
    ///
    /// let err = ConfigError::for_variable("GUILD_ID", "is required");
    /// assert_eq!(err.variable, Some("GUILD_ID"));
    /// assert!(err.to_string().contains("GUILD_ID is required"));
    /// ```
    #[track_caller]
    pub fn for_variable(variable: &'static str, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            variable: Some(variable),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.variable {
            Some(variable) => write!(
                f,
                "Configuration Error: {} {} at line {} in {}",
                variable, self.message, self.line, self.file
            ),
            None => write!(
                f,
                "Configuration Error: {} at line {} in {}",
                self.message, self.line, self.file
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
