/// Error types for termroast
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for termroast operations
#[derive(Error, Debug)]
pub enum RoastError {
    /// I/O errors (history file open/read failures)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment/configuration error (missing home directory, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for termroast operations
pub type Result<T> = std::result::Result<T, RoastError>;

/// Convert RoastError to a user-friendly error message
impl RoastError {
    pub fn user_message(&self) -> String {
        match self {
            RoastError::Io(e) => {
                format!("Could not read your history file. Check permissions. Details: {}", e)
            }
            RoastError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
        }
    }
}
