//! Hotel aggregate implementation.

use std::collections::BTreeMap;

use hotel_common::{BookingId, GuestId, IdSequence, RoomNumber};

use crate::error::HotelError;
use crate::operation::Operation;

use super::{Booking, Guest, HotelOperation, Money, Room};

/// Hotel aggregate root.
///
/// Owns every room, guest and booking, the id counters, and the history of
/// applied operations. State changes only through [`apply`](Self::apply) and
/// [`undo_last`](Self::undo_last).
#[derive(Debug, Clone, Default)]
pub struct Hotel {
    rooms: BTreeMap<RoomNumber, Room>,
    guests: BTreeMap<GuestId, Guest>,
    bookings: BTreeMap<BookingId, Booking>,

    guest_ids: IdSequence,
    booking_ids: IdSequence,

    /// Successfully applied operations, oldest first.
    history: Vec<HotelOperation>,
}

impl Hotel {
    /// Creates an empty hotel with both id counters at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes an operation and records it in the history.
    ///
    /// A rejected operation leaves the hotel untouched and is not recorded.
    /// On success the recorded entry is returned so the caller can read any
    /// id it was assigned.
    pub fn apply(
        &mut self,
        operation: impl Into<HotelOperation>,
    ) -> Result<&HotelOperation, HotelError> {
        let mut operation = operation.into();
        let kind = operation.kind();

        if let Err(err) = operation.execute(self) {
            tracing::debug!(operation = %kind, error = %err, "operation rejected");
            return Err(err.into());
        }

        let index = self.history.len();
        self.history.push(operation);
        tracing::debug!(operation = %kind, depth = index + 1, "operation applied");

        Ok(&self.history[index])
    }

    /// Reverses the most recently applied operation and drops it from the
    /// history.
    ///
    /// The undone operation is handed back to the caller.
    pub fn undo_last(&mut self) -> Result<HotelOperation, HotelError> {
        let mut operation = self.history.pop().ok_or(HotelError::EmptyHistory)?;
        operation.undo(self);
        tracing::debug!(
            operation = %operation.kind(),
            depth = self.history.len(),
            "operation undone"
        );
        Ok(operation)
    }
}

// Query methods
impl Hotel {
    /// Returns a room by number.
    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.get(&number)
    }

    /// Returns a guest by id.
    pub fn guest(&self, guest_id: GuestId) -> Option<&Guest> {
        self.guests.get(&guest_id)
    }

    /// Returns a booking by id.
    pub fn booking(&self, booking_id: BookingId) -> Option<&Booking> {
        self.bookings.get(&booking_id)
    }

    /// Returns all rooms ordered by number.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Returns all guests ordered by id.
    pub fn guests(&self) -> impl Iterator<Item = &Guest> {
        self.guests.values()
    }

    /// Returns all bookings ordered by id.
    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values()
    }

    /// Returns the bookings made for a room, in any status.
    pub fn bookings_for_room(&self, room: RoomNumber) -> impl Iterator<Item = &Booking> {
        self.bookings.values().filter(move |b| b.room_number == room)
    }

    /// Returns the bookings made by a guest, in any status.
    pub fn bookings_for_guest(&self, guest_id: GuestId) -> impl Iterator<Item = &Booking> {
        self.bookings
            .values()
            .filter(move |b| b.guest_id == guest_id)
    }

    /// Returns the applied operations, oldest first.
    pub fn history(&self) -> &[HotelOperation] {
        &self.history
    }

    /// Returns true if there is an operation to undo.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns the id the next registered guest will receive.
    pub fn next_guest_id(&self) -> GuestId {
        GuestId::new(self.guest_ids.peek())
    }

    /// Returns the id the next created booking will receive.
    pub fn next_booking_id(&self) -> BookingId {
        BookingId::new(self.booking_ids.peek())
    }

    /// Returns the total price of a booking: nights times the room's
    /// nightly price.
    ///
    /// `None` if the booking or its room no longer exists.
    pub fn booking_cost(&self, booking_id: BookingId) -> Option<Money> {
        let booking = self.bookings.get(&booking_id)?;
        let room = self.rooms.get(&booking.room_number)?;
        Some(room.price_per_night.multiply(booking.nights()))
    }
}

// Mutation primitives used by operations
impl Hotel {
    pub(crate) fn contains_room(&self, number: RoomNumber) -> bool {
        self.rooms.contains_key(&number)
    }

    pub(crate) fn contains_guest(&self, guest_id: GuestId) -> bool {
        self.guests.contains_key(&guest_id)
    }

    pub(crate) fn insert_room(&mut self, room: Room) {
        self.rooms.insert(room.number, room);
    }

    pub(crate) fn remove_room(&mut self, number: RoomNumber) -> Option<Room> {
        self.rooms.remove(&number)
    }

    pub(crate) fn allocate_guest_id(&mut self) -> GuestId {
        self.guest_ids.next_id()
    }

    pub(crate) fn insert_guest(&mut self, guest: Guest) {
        self.guests.insert(guest.guest_id, guest);
    }

    pub(crate) fn remove_guest(&mut self, guest_id: GuestId) -> Option<Guest> {
        self.guests.remove(&guest_id)
    }

    pub(crate) fn allocate_booking_id(&mut self) -> BookingId {
        self.booking_ids.next_id()
    }

    pub(crate) fn insert_booking(&mut self, booking: Booking) {
        self.bookings.insert(booking.booking_id, booking);
    }

    pub(crate) fn remove_booking(&mut self, booking_id: BookingId) -> Option<Booking> {
        self.bookings.remove(&booking_id)
    }

    pub(crate) fn booking_mut(&mut self, booking_id: BookingId) -> Option<&mut Booking> {
        self.bookings.get_mut(&booking_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel::{
        AddRoom, BookingStatus, CancelBooking, CheckIn, CheckOut, CreateBooking, RegisterGuest,
        ValidationError,
    };
    use crate::operation::OperationKind;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(number: u32) -> RoomNumber {
        RoomNumber::new(number)
    }

    fn add_room(number: u32, capacity: u32, price: u64) -> AddRoom {
        AddRoom::new(room(number), capacity, Money::from_major(price))
    }

    fn hotel_with_booking() -> (Hotel, GuestId, BookingId) {
        let mut hotel = Hotel::new();
        hotel.apply(add_room(101, 2, 3500)).unwrap();
        let guest_id = hotel
            .apply(RegisterGuest::new("Guest"))
            .unwrap()
            .assigned_guest_id()
            .unwrap();
        let booking_id = hotel
            .apply(CreateBooking::new(
                guest_id,
                room(101),
                date(2026, 1, 25),
                date(2026, 1, 28),
            ))
            .unwrap()
            .assigned_booking_id()
            .unwrap();
        (hotel, guest_id, booking_id)
    }

    #[test]
    fn test_new_hotel_is_empty() {
        let hotel = Hotel::new();
        assert_eq!(hotel.rooms().count(), 0);
        assert_eq!(hotel.guests().count(), 0);
        assert_eq!(hotel.bookings().count(), 0);
        assert!(hotel.history().is_empty());
        assert!(!hotel.can_undo());
        assert_eq!(hotel.next_guest_id(), GuestId::new(1));
        assert_eq!(hotel.next_booking_id(), BookingId::new(1));
    }

    #[test]
    fn test_undo_on_empty_history_fails() {
        let mut hotel = Hotel::new();
        assert_eq!(hotel.undo_last().unwrap_err(), HotelError::EmptyHistory);
    }

    #[test]
    fn test_apply_records_history() {
        let (hotel, _, _) = hotel_with_booking();
        let kinds: Vec<_> = hotel.history().iter().map(|op| op.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                OperationKind::AddRoom,
                OperationKind::RegisterGuest,
                OperationKind::CreateBooking
            ]
        );
    }

    #[test]
    fn test_rejected_operation_is_not_recorded() {
        let mut hotel = Hotel::new();
        hotel.apply(add_room(101, 2, 3500)).unwrap();

        let err = hotel.apply(add_room(101, 4, 9900)).unwrap_err();
        assert_eq!(
            err,
            HotelError::Validation(ValidationError::DuplicateRoom {
                room: RoomNumber::new(101)
            })
        );
        assert_eq!(hotel.history().len(), 1);
        assert_eq!(hotel.room(RoomNumber::new(101)).unwrap().capacity, 2);
    }

    #[test]
    fn test_undo_last_returns_operation() {
        let (mut hotel, _, booking_id) = hotel_with_booking();
        hotel.apply(CheckIn::new(booking_id)).unwrap();

        let undone = hotel.undo_last().unwrap();
        assert_eq!(undone.kind(), OperationKind::CheckIn);
        assert_eq!(
            hotel.booking(booking_id).unwrap().status,
            BookingStatus::Booked
        );
        assert_eq!(hotel.history().len(), 3);
    }

    #[test]
    fn test_undo_walks_back_through_history() {
        let (mut hotel, _, _) = hotel_with_booking();
        hotel.undo_last().unwrap();
        hotel.undo_last().unwrap();
        hotel.undo_last().unwrap();

        assert_eq!(hotel.rooms().count(), 0);
        assert_eq!(hotel.guests().count(), 0);
        assert_eq!(hotel.bookings().count(), 0);
        assert_eq!(hotel.undo_last().unwrap_err(), HotelError::EmptyHistory);

        // Counters stay where they were.
        assert_eq!(hotel.next_guest_id(), GuestId::new(2));
        assert_eq!(hotel.next_booking_id(), BookingId::new(2));
    }

    #[test]
    fn test_booking_queries() {
        let (mut hotel, guest_id, booking_id) = hotel_with_booking();
        hotel.apply(add_room(102, 3, 4500)).unwrap();

        assert_eq!(hotel.bookings_for_room(RoomNumber::new(101)).count(), 1);
        assert_eq!(hotel.bookings_for_room(RoomNumber::new(102)).count(), 0);
        let mine: Vec<_> = hotel
            .bookings_for_guest(guest_id)
            .map(|b| b.booking_id)
            .collect();
        assert_eq!(mine, vec![booking_id]);
    }

    #[test]
    fn test_booking_cost() {
        let (mut hotel, _, booking_id) = hotel_with_booking();
        assert_eq!(hotel.booking_cost(booking_id), Some(Money::from_major(10500)));
        assert_eq!(hotel.booking_cost(BookingId::new(99)), None);

        // Cancelling does not change the quoted cost.
        hotel.apply(CancelBooking::new(booking_id)).unwrap();
        assert_eq!(hotel.booking_cost(booking_id), Some(Money::from_major(10500)));
    }

    #[test]
    fn test_full_status_cycle_through_apply_and_undo() {
        let (mut hotel, _, booking_id) = hotel_with_booking();
        hotel.apply(CheckIn::new(booking_id)).unwrap();
        hotel.apply(CheckOut::new(booking_id)).unwrap();
        assert_eq!(
            hotel.booking(booking_id).unwrap().status,
            BookingStatus::CheckedOut
        );

        hotel.undo_last().unwrap();
        assert_eq!(
            hotel.booking(booking_id).unwrap().status,
            BookingStatus::CheckedIn
        );
    }
}
