//! Service error types.

use hotel_domain::HotelError;
use thiserror::Error;

/// Errors surfaced by [`HotelService`](crate::HotelService).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The hotel rejected the request.
    #[error(transparent)]
    Hotel(#[from] HotelError),

    /// A previous caller panicked while holding the hotel lock.
    #[error("Hotel lock poisoned")]
    LockPoisoned,

    /// A global tracing subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),
}

impl ServiceError {
    /// Returns the hotel error, if this is one.
    pub fn as_hotel(&self) -> Option<&HotelError> {
        match self {
            ServiceError::Hotel(err) => Some(err),
            _ => None,
        }
    }
}
