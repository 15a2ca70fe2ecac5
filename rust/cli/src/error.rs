//! Error types for the CLI application.
//!
//! `CliError` covers everything a command handler can fail with and maps to
//! exit code `2`. `BatchValidationError<T>` tags a failure with the item it
//! came from (a line number in a history file, for example).

use std::fmt;

use blackjack_engine::errors::{GameError, SessionError};

use crate::config::ConfigError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<SessionError> for CliError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::Io(e) => CliError::Io(e),
            other => CliError::Engine(other.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

/// Failure attached to the item that produced it.
///
/// ```rust
/// use blackjack_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 5,
///     message: "missing field `outcomes`".to_string(),
/// };
/// assert_eq!(error.to_string(), "5: missing field `outcomes`");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_io_errors_stay_io() {
        let err: CliError = SessionError::Io(std::io::Error::other("pipe")).into();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn game_errors_become_engine_errors() {
        let err: CliError = GameError::EmptyDeck.into();
        assert!(matches!(err, CliError::Engine(_)));
        assert!(err.to_string().starts_with("Engine error: "));
    }

    #[test]
    fn batch_error_with_path_context() {
        let error = BatchValidationError {
            item_context: "rounds.jsonl:3".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(error.to_string(), "rounds.jsonl:3: expected value");
    }
}
