/// Unified error type for quotefix
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotefixError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is not valid UTF-8: {}", .0.display())]
    InvalidUtf8(PathBuf),

    // Traversal errors
    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias using QuotefixError
pub type Result<T> = std::result::Result<T, QuotefixError>;

impl QuotefixError {
    /// Create a root-not-found error
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound(path.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether the error should stop the whole run rather than a single file
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::RootNotFound(_) | Self::InvalidConfig(_) | Self::Config(_)
        )
    }
}

impl From<String> for QuotefixError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}

impl From<&str> for QuotefixError {
    fn from(msg: &str) -> Self {
        Self::Other(msg.to_string())
    }
}
