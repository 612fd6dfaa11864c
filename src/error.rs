//! Error handling module for agentmap
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use thiserror::Error;

/// Main error type for agentmap
#[derive(Error, Debug)]
pub enum AgentmapError {
    /// IO errors (export file writes, terminal setup)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Lookup errors (unknown version, language, or audience key).
    ///
    /// The shell only passes the fixed enumerated tokens, so hitting this
    /// from the TUI indicates a caller contract violation.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for agentmap operations
pub type Result<T> = std::result::Result<T, AgentmapError>;

impl AgentmapError {
    /// Create a lookup error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AgentmapError::not_found("audience 'tester' for language 'en'");
        assert_eq!(
            err.to_string(),
            "Not found: audience 'tester' for language 'en'"
        );

        let err = AgentmapError::config("export directory is empty");
        assert_eq!(err.to_string(), "Configuration error: export directory is empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AgentmapError = io_err.into();
        assert!(matches!(err, AgentmapError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = AgentmapError::terminal("raw mode failed");
        assert!(matches!(err, AgentmapError::Terminal(_)));

        let err = AgentmapError::not_found("version 'ultra'");
        assert!(matches!(err, AgentmapError::NotFound(_)));
    }
}
