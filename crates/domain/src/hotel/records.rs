//! Plain data records owned by the hotel aggregate.

use chrono::NaiveDate;
use hotel_common::{BookingId, GuestId, RoomNumber};
use serde::{Deserialize, Serialize};

use super::{BookingStatus, Money, StayRange};

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Caller-assigned room number.
    pub number: RoomNumber,

    /// Maximum number of guests.
    pub capacity: u32,

    /// Price for one night.
    pub price_per_night: Money,
}

impl Room {
    /// Creates a new room record.
    pub fn new(number: RoomNumber, capacity: u32, price_per_night: Money) -> Self {
        Self {
            number,
            capacity,
            price_per_night,
        }
    }
}

/// A registered guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub guest_id: GuestId,
    pub name: String,
}

impl Guest {
    /// Creates a new guest record.
    pub fn new(guest_id: GuestId, name: impl Into<String>) -> Self {
        Self {
            guest_id,
            name: name.into(),
        }
    }
}

/// A reservation of one room by one guest for a stay range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: BookingId,
    pub guest_id: GuestId,
    pub room_number: RoomNumber,
    pub stay: StayRange,
    pub status: BookingStatus,
}

impl Booking {
    /// Creates a booking in the initial `booked` status.
    pub fn new(
        booking_id: BookingId,
        guest_id: GuestId,
        room_number: RoomNumber,
        stay: StayRange,
    ) -> Self {
        Self {
            booking_id,
            guest_id,
            room_number,
            stay,
            status: BookingStatus::Booked,
        }
    }

    /// First night of the stay.
    pub fn check_in_date(&self) -> NaiveDate {
        self.stay.check_in()
    }

    /// Departure day.
    pub fn check_out_date(&self) -> NaiveDate {
        self.stay.check_out()
    }

    /// The half-open stay range.
    pub fn date_range(&self) -> StayRange {
        self.stay
    }

    /// Number of nights booked.
    pub fn nights(&self) -> u32 {
        self.stay.nights()
    }
}
