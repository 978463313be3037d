//! Error types for the strsearch library

use std::fmt;

/// Result type alias for strsearch operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type for strsearch operations
///
/// Matching itself never fails: an absent pattern is `None` (or `-1` through
/// [`crate::algorithm::to_offset`]). These errors come from parsing
/// algorithm names and validating benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Unknown algorithm name
    InvalidAlgorithm(String),

    /// Benchmark or command configuration is inconsistent
    InvalidConfig(String),

    /// I/O errors
    Io(String),

    /// Format/parsing errors (JSON config files, CSV output)
    Format(String),

    /// General errors
    Other(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidAlgorithm(msg) => write!(f, "Invalid algorithm: {}", msg),
            SearchError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            SearchError::Io(msg) => write!(f, "I/O error: {}", msg),
            SearchError::Format(msg) => write!(f, "Format error: {}", msg),
            SearchError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        SearchError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Format(err.to_string())
    }
}

impl From<String> for SearchError {
    fn from(msg: String) -> Self {
        SearchError::Other(msg)
    }
}

impl From<&str> for SearchError {
    fn from(msg: &str) -> Self {
        SearchError::Other(msg.to_string())
    }
}
