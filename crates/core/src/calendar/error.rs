use thiserror::Error;

/// Errors that can occur when validating an event before it reaches the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("End date must be after or equal to start date")]
    InvalidDateRange,
    #[error("End time must be after or equal to start time")]
    InvalidTimeRange,
    #[error("Invalid time format: {0}")]
    InvalidTime(String),
    #[error("Invalid external link: {0}")]
    InvalidLink(String),
    #[error("Category not found: {0}")]
    UnknownCategory(String),
}
