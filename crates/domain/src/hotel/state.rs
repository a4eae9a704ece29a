//! Booking status state machine.

use serde::{Deserialize, Serialize};

/// The status of a booking in its lifecycle.
///
/// State transitions:
/// ```text
/// Booked ──┬──► CheckedIn ──► CheckedOut
///          │
///          └──► Cancelled
/// ```
///
/// `CheckedOut` and `Cancelled` have no forward exits. They are left only by
/// undoing the operation that entered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Reserved, guest has not arrived yet.
    #[default]
    Booked,

    /// Guest is staying in the room.
    CheckedIn,

    /// Guest has left (terminal state).
    CheckedOut,

    /// Booking was cancelled (terminal state).
    Cancelled,
}

impl BookingStatus {
    /// Returns true if a check-in is allowed from this status.
    pub fn can_check_in(&self) -> bool {
        matches!(self, BookingStatus::Booked)
    }

    /// Returns true if a check-out is allowed from this status.
    pub fn can_check_out(&self) -> bool {
        matches!(self, BookingStatus::CheckedIn)
    }

    /// Returns true if a booking in this status still occupies its room
    /// for availability purposes.
    pub fn blocks_room(&self) -> bool {
        matches!(self, BookingStatus::Booked | BookingStatus::CheckedIn)
    }

    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::CheckedOut | BookingStatus::Cancelled)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Booked => "booked",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
