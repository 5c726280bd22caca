//! Error types for ticket-desk
//!
//! The store itself never fails: unknown ids and invalid input are no-ops.
//! These errors come from the optional guards layered on top of the store,
//! from configuration loading, and from the terminal front-end.

use crate::core::Status;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TicketDeskError>;

/// Errors surfaced by guards, configuration and the presentation layer
#[derive(Error, Debug)]
pub enum TicketDeskError {
    /// A status change that is not a single forward step
    #[error("Cannot move ticket from {from} to {to}")]
    LifecycleViolation { from: Status, to: Status },

    /// Title/description edits after the ticket left `Created`
    #[error("Ticket can no longer be edited (status: {status})")]
    EditNotAllowed { status: Status },

    /// A required text field was empty after trimming
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// Rating value outside 1..=5
    #[error("Invalid rating {value}: ratings range from 1 to 5")]
    InvalidRating { value: i64 },

    /// Rating attempted before the ticket was completed
    #[error("Only completed tickets can be rated (status: {status})")]
    RatingNotAllowed { status: Status },

    /// Rating attempted on a ticket that already carries one
    #[error("Ticket is already rated ({rating})")]
    AlreadyRated { rating: u8 },

    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Dialog(#[from] dialoguer::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TicketDeskError {
    /// Message shown to the user on the terminal
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(e) => format!("Failed to load configuration: {e}"),
            Self::Dialog(_) => "Interactive prompt was interrupted".to_string(),
            other => other.to_string(),
        }
    }

    /// Hints for recovering from the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LifecycleViolation { from, .. } => {
                let mut hints =
                    vec!["Tickets move Created → Under Assistance → Completed".to_string()];
                if let Some(next) = from.next() {
                    hints.push(format!("The next step from {from} is {next}"));
                }
                hints
            },
            Self::EditNotAllowed { .. } => {
                vec!["Only tickets that have not been started can be edited".to_string()]
            },
            Self::RatingNotAllowed { .. } => {
                vec!["Complete the ticket before rating it".to_string()]
            },
            Self::InvalidRating { .. } => vec!["Use a whole number from 1 to 5".to_string()],
            Self::TicketNotFound { .. } => vec![
                "Refer to tickets by their list position (1 = newest) or full id".to_string(),
                "Run 'list' to see current tickets".to_string(),
            ],
            Self::Config(_) => vec![
                "Check the file passed with --config".to_string(),
                "Environment overrides use the TICKET_DESK_ prefix".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// Whether the session can continue after this error
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::Io(_) | Self::Dialog(_))
    }

    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_violation_message() {
        let err = TicketDeskError::LifecycleViolation {
            from: Status::Completed,
            to: Status::Created,
        };
        assert_eq!(err.to_string(), "Cannot move ticket from Completed to Created");
        assert!(err.is_recoverable());
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_suggestions_name_next_step() {
        let err = TicketDeskError::LifecycleViolation {
            from: Status::Created,
            to: Status::Completed,
        };
        let hints = err.suggestions();
        assert!(hints.iter().any(|h| h.contains("Under Assistance")));
    }

    #[test]
    fn test_io_error_is_not_recoverable() {
        let err = TicketDeskError::from(std::io::Error::other("boom"));
        assert!(!err.is_recoverable());
        assert!(err.suggestions().is_empty());
    }
}
