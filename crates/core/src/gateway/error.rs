use thiserror::Error;

use crate::calendar::EventError;

/// Errors that can occur when talking to the remote data gateway.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Backend is not configured")]
    NotConfigured,
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Validation(#[from] EventError),
}

impl GatewayError {
    pub fn event_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Event",
            id: id.into(),
        }
    }

    /// Returns true if the caller should prompt for sign-in.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
