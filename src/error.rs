/// Error types for study-compass
///
/// The planner and voice interpreter are total functions and never fail;
/// errors only arise at the snapshot-loading boundary and in the CLI.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for study-compass operations
#[derive(Error, Debug)]
pub enum CompassError {
    /// I/O errors (snapshot file reads, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input supplied to the CLI
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for study-compass operations
pub type Result<T> = std::result::Result<T, CompassError>;

/// Convert CompassError to a user-friendly error message
impl CompassError {
    pub fn user_message(&self) -> String {
        match self {
            CompassError::Io(e) => {
                format!("File system error. Check the snapshot path. Details: {}", e)
            }
            CompassError::Serialization(e) => {
                format!("Snapshot format error: {}", e)
            }
            CompassError::InvalidInput(msg) => {
                format!("Invalid input: {}", msg)
            }
            CompassError::Generic(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = CompassError::InvalidInput("missing snapshot path".to_string());
        assert!(err.user_message().contains("missing snapshot path"));

        let err = CompassError::Generic("boom".to_string());
        assert_eq!(err.user_message(), "boom");
    }

    #[test]
    fn test_error_display() {
        let err = CompassError::InvalidInput("empty transcript".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Invalid input"));
    }
}
