//! Errors raised across the booking flow.
use thiserror::Error;

use crate::validation::ValidationError;

pub const SUBMISSION_FAILED_MESSAGE: &str = "Bokningen kunde inte genomföras, försök igen";

/// Failure talking to the booking endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Booking endpoint answered with status {0}")]
    Status(u16),
    #[error("Unreadable response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Everything that can stop a booking from completing.
///
/// `E` is the error type of the confirmation storage in use.
#[derive(Debug, Error)]
pub enum BookingError<E> {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Submission failed: {0}")]
    SubmissionFailed(ApiError),
    #[error("Storage error: {0}")]
    Storage(E),
}

impl<E> BookingError<E> {
    /// Message to show next to the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::SubmissionFailed(_) | Self::Storage(_) => SUBMISSION_FAILED_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::SubmissionFailed(_))
    }
}
