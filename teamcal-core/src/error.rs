//! Error types for teamcal.

use thiserror::Error;

/// Errors that can occur in teamcal operations.
#[derive(Error, Debug)]
pub enum TeamcalError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Unsupported export format '{0}'. Expected one of: ics, csv, json")]
    UnsupportedFormat(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Member not found: {0}")]
    MemberNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("No recipients: select members or add attendees to the event")]
    NoRecipients,

    #[error("An item with id '{0}' already exists")]
    DuplicateId(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for teamcal operations.
pub type TeamcalResult<T> = Result<T, TeamcalError>;
