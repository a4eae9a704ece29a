//! Room availability: the conflict check used when creating bookings.
//!
//! A room is available for a stay when no booking on that room that still
//! blocks it (`booked` or `checked_in`) overlaps the stay. Overlap is
//! half-open, so back-to-back stays sharing a check-out/check-in day are fine.
//! The check is a linear scan over bookings.

use hotel_common::RoomNumber;

use super::{Booking, Hotel, Room, StayRange};

impl Hotel {
    /// Returns every blocking booking on `room` that overlaps `stay`.
    pub fn conflicting_bookings<'a>(
        &'a self,
        room: RoomNumber,
        stay: &StayRange,
    ) -> impl Iterator<Item = &'a Booking> + use<'a> {
        let stay = *stay;
        self.bookings_for_room(room)
            .filter(|booking| booking.status.blocks_room())
            .filter(move |booking| booking.stay.overlaps(&stay))
    }

    /// Returns the first booking that prevents `stay` on `room`, if any.
    pub fn find_conflict(&self, room: RoomNumber, stay: &StayRange) -> Option<&Booking> {
        self.conflicting_bookings(room, stay).next()
    }

    /// Returns true if `room` is free for the whole of `stay`.
    ///
    /// Says nothing about whether the room exists.
    pub fn is_room_available(&self, room: RoomNumber, stay: &StayRange) -> bool {
        self.find_conflict(room, stay).is_none()
    }

    /// Returns rooms that can hold `min_capacity` guests and are free for
    /// `stay`, ordered by room number.
    pub fn available_rooms<'a>(
        &'a self,
        stay: &StayRange,
        min_capacity: u32,
    ) -> impl Iterator<Item = &'a Room> + use<'a> {
        let stay = *stay;
        self.rooms()
            .filter(move |room| room.capacity >= min_capacity)
            .filter(move |room| self.is_room_available(room.number, &stay))
    }
}
