//! Shared identifier types for the hotel workspace.
//!
//! Room numbers are chosen by the caller; guest and booking ids are handed
//! out by the hotel aggregate from an [`IdSequence`].

mod ids;
mod sequence;

pub use ids::{BookingId, GuestId, RoomNumber};
pub use sequence::IdSequence;
