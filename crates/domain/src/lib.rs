//! Hotel rooms, guests and bookings managed through reversible operations.
//!
//! Every change to a [`Hotel`] is a [`HotelOperation`] handed to
//! [`Hotel::apply`]. Each operation knows its own exact inverse, and the hotel
//! records applied operations so the most recent one can be rolled back with
//! [`Hotel::undo_last`]:
//! - [`AddRoom`], [`RegisterGuest`], [`CreateBooking`]
//! - [`CancelBooking`], [`CheckIn`], [`CheckOut`]

pub mod error;
pub mod hotel;
pub mod operation;

pub use error::HotelError;
pub use hotel::{
    AddRoom, Booking, BookingStatus, CancelBooking, CheckIn, CheckOut, CreateBooking, Guest,
    Hotel, HotelOperation, Money, RegisterGuest, Room, StayRange, ValidationError,
};
pub use hotel_common::{BookingId, GuestId, RoomNumber};
pub use operation::OperationKind;
