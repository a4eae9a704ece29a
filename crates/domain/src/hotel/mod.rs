//! Hotel aggregate, its records, and the operations that mutate it.

mod aggregate;
mod availability;
mod operations;
mod records;
mod state;
mod value_objects;

pub use aggregate::Hotel;
pub use operations::{
    AddRoom, CancelBooking, CheckIn, CheckOut, CreateBooking, HotelOperation, RegisterGuest,
};
pub use records::{Booking, Guest, Room};
pub use state::BookingStatus;
pub use value_objects::{Money, StayRange};

use chrono::NaiveDate;
use hotel_common::{BookingId, GuestId, RoomNumber};
use thiserror::Error;

/// Reasons an operation refuses to execute.
///
/// Every variant is raised before any mutation, so a rejected operation
/// leaves the hotel exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A room with this number already exists.
    #[error("Room {room} already exists")]
    DuplicateRoom { room: RoomNumber },

    /// Rooms must hold at least one guest.
    #[error("Room {room} must have a capacity of at least 1")]
    InvalidCapacity { room: RoomNumber },

    /// No guest with this id is registered.
    #[error("Guest not found: {guest_id}")]
    UnknownGuest { guest_id: GuestId },

    /// No room with this number exists.
    #[error("Room not found: {room}")]
    UnknownRoom { room: RoomNumber },

    /// Check-out must be strictly after check-in.
    #[error("Invalid date range: check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// Another active booking holds the room for an overlapping range.
    #[error("Room {room} is unavailable: overlaps booking {conflicting}")]
    RoomUnavailable {
        room: RoomNumber,
        conflicting: BookingId,
    },

    /// No booking with this id exists.
    #[error("Booking not found: {booking_id}")]
    UnknownBooking { booking_id: BookingId },

    /// The guest already left; the booking can no longer be cancelled.
    #[error("Booking {booking_id} is already checked out")]
    AlreadyCheckedOut { booking_id: BookingId },

    /// The booking is already cancelled.
    #[error("Booking {booking_id} is already cancelled")]
    AlreadyCancelled { booking_id: BookingId },

    /// The booking's status does not allow the requested transition.
    #[error("Invalid status transition for booking {booking_id}: cannot {action} from {current}")]
    InvalidTransition {
        booking_id: BookingId,
        current: BookingStatus,
        action: &'static str,
    },
}
