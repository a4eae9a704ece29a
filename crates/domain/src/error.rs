//! Domain error types.

use thiserror::Error;

use crate::hotel::ValidationError;

/// Errors returned by [`Hotel::apply`](crate::Hotel::apply) and
/// [`Hotel::undo_last`](crate::Hotel::undo_last).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotelError {
    /// The operation was rejected before touching any state.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// There is no applied operation left to undo.
    #[error("No operations to undo")]
    EmptyHistory,
}

impl HotelError {
    /// Returns the validation error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            HotelError::Validation(err) => Some(err),
            HotelError::EmptyHistory => None,
        }
    }
}
