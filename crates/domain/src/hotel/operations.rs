//! The six hotel operations and the closed sum type stored in history.

use chrono::NaiveDate;
use hotel_common::{BookingId, GuestId, RoomNumber};

use crate::operation::{Operation, OperationKind};

use super::{Booking, BookingStatus, Guest, Hotel, Money, Room, StayRange, ValidationError};

/// Adds a room to the hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRoom {
    pub number: RoomNumber,
    pub capacity: u32,
    pub price_per_night: Money,

    added: bool,
}

impl AddRoom {
    /// Creates a new AddRoom operation.
    pub fn new(number: RoomNumber, capacity: u32, price_per_night: Money) -> Self {
        Self {
            number,
            capacity,
            price_per_night,
            added: false,
        }
    }

    /// Returns true once this operation has inserted its room.
    pub fn is_added(&self) -> bool {
        self.added
    }
}

impl Operation for AddRoom {
    fn execute(&mut self, hotel: &mut Hotel) -> Result<(), ValidationError> {
        if hotel.contains_room(self.number) {
            return Err(ValidationError::DuplicateRoom { room: self.number });
        }

        if self.capacity == 0 {
            return Err(ValidationError::InvalidCapacity { room: self.number });
        }

        hotel.insert_room(Room::new(self.number, self.capacity, self.price_per_night));
        self.added = true;
        Ok(())
    }

    fn undo(&mut self, hotel: &mut Hotel) {
        if !std::mem::take(&mut self.added) {
            return;
        }

        if hotel.remove_room(self.number).is_none() {
            tracing::debug!(room = %self.number, "room already gone, nothing to undo");
        }
    }
}

/// Registers a guest under the next guest id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterGuest {
    pub name: String,

    guest_id: Option<GuestId>,
}

impl RegisterGuest {
    /// Creates a new RegisterGuest operation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guest_id: None,
        }
    }

    /// The id assigned by the last successful execute.
    pub fn guest_id(&self) -> Option<GuestId> {
        self.guest_id
    }
}

impl Operation for RegisterGuest {
    fn execute(&mut self, hotel: &mut Hotel) -> Result<(), ValidationError> {
        let guest_id = hotel.allocate_guest_id();
        hotel.insert_guest(Guest::new(guest_id, self.name.clone()));
        self.guest_id = Some(guest_id);
        Ok(())
    }

    fn undo(&mut self, hotel: &mut Hotel) {
        let Some(guest_id) = self.guest_id.take() else {
            return;
        };

        if hotel.remove_guest(guest_id).is_none() {
            tracing::debug!(%guest_id, "guest already gone, nothing to undo");
        }
    }
}

/// Books a room for a guest over `[check_in, check_out)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBooking {
    pub guest_id: GuestId,
    pub room_number: RoomNumber,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,

    booking_id: Option<BookingId>,
}

impl CreateBooking {
    /// Creates a new CreateBooking operation.
    pub fn new(
        guest_id: GuestId,
        room_number: RoomNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            guest_id,
            room_number,
            check_in,
            check_out,
            booking_id: None,
        }
    }

    /// The id assigned by the last successful execute.
    pub fn booking_id(&self) -> Option<BookingId> {
        self.booking_id
    }
}

impl Operation for CreateBooking {
    fn execute(&mut self, hotel: &mut Hotel) -> Result<(), ValidationError> {
        if !hotel.contains_guest(self.guest_id) {
            return Err(ValidationError::UnknownGuest {
                guest_id: self.guest_id,
            });
        }

        if !hotel.contains_room(self.room_number) {
            return Err(ValidationError::UnknownRoom {
                room: self.room_number,
            });
        }

        let stay = StayRange::new(self.check_in, self.check_out)?;

        if let Some(conflict) = hotel.find_conflict(self.room_number, &stay) {
            return Err(ValidationError::RoomUnavailable {
                room: self.room_number,
                conflicting: conflict.booking_id,
            });
        }

        let booking_id = hotel.allocate_booking_id();
        hotel.insert_booking(Booking::new(
            booking_id,
            self.guest_id,
            self.room_number,
            stay,
        ));
        self.booking_id = Some(booking_id);
        Ok(())
    }

    fn undo(&mut self, hotel: &mut Hotel) {
        let Some(booking_id) = self.booking_id.take() else {
            return;
        };

        if hotel.remove_booking(booking_id).is_none() {
            tracing::debug!(%booking_id, "booking already gone, nothing to undo");
        }
    }
}

/// Cancels a booking that has not been checked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelBooking {
    pub booking_id: BookingId,

    previous_status: Option<BookingStatus>,
}

impl CancelBooking {
    /// Creates a new CancelBooking operation.
    pub fn new(booking_id: BookingId) -> Self {
        Self {
            booking_id,
            previous_status: None,
        }
    }

    /// The status the booking had before this cancellation.
    pub fn previous_status(&self) -> Option<BookingStatus> {
        self.previous_status
    }
}

impl Operation for CancelBooking {
    fn execute(&mut self, hotel: &mut Hotel) -> Result<(), ValidationError> {
        let booking_id = self.booking_id;
        self.previous_status = Some(set_status(hotel, booking_id, |current| match current {
            BookingStatus::CheckedOut => Err(ValidationError::AlreadyCheckedOut { booking_id }),
            BookingStatus::Cancelled => Err(ValidationError::AlreadyCancelled { booking_id }),
            BookingStatus::Booked | BookingStatus::CheckedIn => Ok(BookingStatus::Cancelled),
        })?);
        Ok(())
    }

    fn undo(&mut self, hotel: &mut Hotel) {
        restore_status(hotel, self.booking_id, self.previous_status.take());
    }
}

/// Moves a booking from `booked` to `checked_in`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub booking_id: BookingId,

    previous_status: Option<BookingStatus>,
}

impl CheckIn {
    /// Creates a new CheckIn operation.
    pub fn new(booking_id: BookingId) -> Self {
        Self {
            booking_id,
            previous_status: None,
        }
    }

    /// The status the booking had before check-in.
    pub fn previous_status(&self) -> Option<BookingStatus> {
        self.previous_status
    }
}

impl Operation for CheckIn {
    fn execute(&mut self, hotel: &mut Hotel) -> Result<(), ValidationError> {
        let booking_id = self.booking_id;
        self.previous_status = Some(set_status(hotel, booking_id, |current| {
            if current.can_check_in() {
                Ok(BookingStatus::CheckedIn)
            } else {
                Err(ValidationError::InvalidTransition {
                    booking_id,
                    current,
                    action: "check in",
                })
            }
        })?);
        Ok(())
    }

    fn undo(&mut self, hotel: &mut Hotel) {
        restore_status(hotel, self.booking_id, self.previous_status.take());
    }
}

/// Moves a booking from `checked_in` to `checked_out`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOut {
    pub booking_id: BookingId,

    previous_status: Option<BookingStatus>,
}

impl CheckOut {
    /// Creates a new CheckOut operation.
    pub fn new(booking_id: BookingId) -> Self {
        Self {
            booking_id,
            previous_status: None,
        }
    }

    /// The status the booking had before check-out.
    pub fn previous_status(&self) -> Option<BookingStatus> {
        self.previous_status
    }
}

impl Operation for CheckOut {
    fn execute(&mut self, hotel: &mut Hotel) -> Result<(), ValidationError> {
        let booking_id = self.booking_id;
        self.previous_status = Some(set_status(hotel, booking_id, |current| {
            if current.can_check_out() {
                Ok(BookingStatus::CheckedOut)
            } else {
                Err(ValidationError::InvalidTransition {
                    booking_id,
                    current,
                    action: "check out",
                })
            }
        })?);
        Ok(())
    }

    fn undo(&mut self, hotel: &mut Hotel) {
        restore_status(hotel, self.booking_id, self.previous_status.take());
    }
}

/// Looks up a booking, asks `next` for its new status, and writes it.
///
/// Returns the status that was replaced. Nothing is written if the booking
/// is missing or `next` refuses.
fn set_status(
    hotel: &mut Hotel,
    booking_id: BookingId,
    next: impl FnOnce(BookingStatus) -> Result<BookingStatus, ValidationError>,
) -> Result<BookingStatus, ValidationError> {
    let booking = hotel
        .booking_mut(booking_id)
        .ok_or(ValidationError::UnknownBooking { booking_id })?;

    let previous = booking.status;
    booking.status = next(previous)?;
    Ok(previous)
}

fn restore_status(hotel: &mut Hotel, booking_id: BookingId, previous: Option<BookingStatus>) {
    let Some(previous) = previous else {
        return;
    };

    match hotel.booking_mut(booking_id) {
        Some(booking) => booking.status = previous,
        None => tracing::debug!(%booking_id, "booking already gone, nothing to undo"),
    }
}

/// Any of the six hotel operations.
///
/// This is what the hotel keeps in its history. Operations only take effect
/// through [`Hotel::apply`]; their forward and inverse steps are not callable
/// from outside this crate.
///
/// ```compile_fail
/// use hotel_domain::operation::Operation;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelOperation {
    AddRoom(AddRoom),
    RegisterGuest(RegisterGuest),
    CreateBooking(CreateBooking),
    CancelBooking(CancelBooking),
    CheckIn(CheckIn),
    CheckOut(CheckOut),
}

impl HotelOperation {
    /// Returns which variant this is.
    pub fn kind(&self) -> OperationKind {
        match self {
            HotelOperation::AddRoom(_) => OperationKind::AddRoom,
            HotelOperation::RegisterGuest(_) => OperationKind::RegisterGuest,
            HotelOperation::CreateBooking(_) => OperationKind::CreateBooking,
            HotelOperation::CancelBooking(_) => OperationKind::CancelBooking,
            HotelOperation::CheckIn(_) => OperationKind::CheckIn,
            HotelOperation::CheckOut(_) => OperationKind::CheckOut,
        }
    }

    /// The guest id assigned by a successful `RegisterGuest`.
    pub fn assigned_guest_id(&self) -> Option<GuestId> {
        match self {
            HotelOperation::RegisterGuest(op) => op.guest_id(),
            _ => None,
        }
    }

    /// The booking id assigned by a successful `CreateBooking`.
    pub fn assigned_booking_id(&self) -> Option<BookingId> {
        match self {
            HotelOperation::CreateBooking(op) => op.booking_id(),
            _ => None,
        }
    }

    fn as_operation_mut(&mut self) -> &mut dyn Operation {
        match self {
            HotelOperation::AddRoom(op) => op,
            HotelOperation::RegisterGuest(op) => op,
            HotelOperation::CreateBooking(op) => op,
            HotelOperation::CancelBooking(op) => op,
            HotelOperation::CheckIn(op) => op,
            HotelOperation::CheckOut(op) => op,
        }
    }
}

impl Operation for HotelOperation {
    fn execute(&mut self, hotel: &mut Hotel) -> Result<(), ValidationError> {
        self.as_operation_mut().execute(hotel)
    }

    fn undo(&mut self, hotel: &mut Hotel) {
        self.as_operation_mut().undo(hotel)
    }
}

macro_rules! impl_from_operation {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for HotelOperation {
                fn from(op: $variant) -> Self {
                    HotelOperation::$variant(op)
                }
            }
        )*
    };
}

impl_from_operation!(
    AddRoom,
    RegisterGuest,
    CreateBooking,
    CancelBooking,
    CheckIn,
    CheckOut,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(number: u32) -> RoomNumber {
        RoomNumber::new(number)
    }

    fn add_room(number: u32) -> AddRoom {
        AddRoom::new(room(number), 2, Money::from_major(3500))
    }

    /// Hotel with room 101, guest 1, and booking 1 for 25..28 Jan.
    fn booked_hotel() -> (Hotel, BookingId) {
        let mut hotel = Hotel::new();
        add_room(101).execute(&mut hotel).unwrap();
        RegisterGuest::new("Guest").execute(&mut hotel).unwrap();
        let mut booking = CreateBooking::new(
            GuestId::new(1),
            room(101),
            date(2026, 1, 25),
            date(2026, 1, 28),
        );
        booking.execute(&mut hotel).unwrap();
        (hotel, booking.booking_id().unwrap())
    }

    fn status(hotel: &Hotel, booking_id: BookingId) -> BookingStatus {
        hotel.booking(booking_id).unwrap().status
    }

    #[test]
    fn test_add_room_and_undo() {
        let mut hotel = Hotel::new();
        let mut op = add_room(101);

        op.execute(&mut hotel).unwrap();
        assert!(op.is_added());
        assert!(hotel.room(room(101)).is_some());

        op.undo(&mut hotel);
        assert!(!op.is_added());
        assert!(hotel.room(room(101)).is_none());
    }

    #[test]
    fn test_add_duplicate_room_fails() {
        let mut hotel = Hotel::new();
        add_room(101).execute(&mut hotel).unwrap();

        let mut dup = add_room(101);
        let err = dup.execute(&mut hotel).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateRoom { room: room(101) });
        assert!(!dup.is_added());

        // Undo of a failed add must not remove the existing room.
        dup.undo(&mut hotel);
        assert!(hotel.room(room(101)).is_some());
    }

    #[test]
    fn test_add_room_with_zero_capacity_fails() {
        let mut hotel = Hotel::new();
        let err = AddRoom::new(room(101), 0, Money::zero())
            .execute(&mut hotel)
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidCapacity { room: room(101) });
        assert_eq!(hotel.rooms().count(), 0);
    }

    #[test]
    fn test_register_guest_assigns_increasing_ids() {
        let mut hotel = Hotel::new();
        let mut first = RegisterGuest::new("A");
        let mut second = RegisterGuest::new("B");
        first.execute(&mut hotel).unwrap();
        second.execute(&mut hotel).unwrap();

        assert_eq!(first.guest_id(), Some(GuestId::new(1)));
        assert_eq!(second.guest_id(), Some(GuestId::new(2)));
        assert_eq!(hotel.guest(GuestId::new(2)).unwrap().name, "B");
    }

    #[test]
    fn test_register_guest_undo_keeps_counter() {
        let mut hotel = Hotel::new();
        let mut first = RegisterGuest::new("A");
        first.execute(&mut hotel).unwrap();
        first.undo(&mut hotel);
        assert!(hotel.guest(GuestId::new(1)).is_none());
        assert_eq!(first.guest_id(), None);

        let mut second = RegisterGuest::new("B");
        second.execute(&mut hotel).unwrap();
        assert_eq!(second.guest_id(), Some(GuestId::new(2)));
    }

    #[test]
    fn test_create_booking_validation_order() {
        let mut hotel = Hotel::new();

        // Unknown guest is reported before unknown room and bad dates.
        let err = CreateBooking::new(
            GuestId::new(1),
            room(999),
            date(2026, 1, 28),
            date(2026, 1, 25),
        )
        .execute(&mut hotel)
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownGuest {
                guest_id: GuestId::new(1)
            }
        );

        RegisterGuest::new("Guest").execute(&mut hotel).unwrap();
        let err = CreateBooking::new(
            GuestId::new(1),
            room(999),
            date(2026, 1, 28),
            date(2026, 1, 25),
        )
        .execute(&mut hotel)
        .unwrap_err();
        assert_eq!(err, ValidationError::UnknownRoom { room: room(999) });

        add_room(101).execute(&mut hotel).unwrap();
        let err = CreateBooking::new(
            GuestId::new(1),
            room(101),
            date(2026, 1, 25),
            date(2026, 1, 25),
        )
        .execute(&mut hotel)
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDateRange { .. }));
        assert_eq!(hotel.bookings().count(), 0);
        assert_eq!(hotel.next_booking_id(), BookingId::new(1));
    }

    #[test]
    fn test_create_booking_conflict_does_not_consume_id() {
        let (mut hotel, booking_id) = booked_hotel();
        let err = CreateBooking::new(
            GuestId::new(1),
            room(101),
            date(2026, 1, 27),
            date(2026, 1, 29),
        )
        .execute(&mut hotel)
        .unwrap_err();

        assert_eq!(
            err,
            ValidationError::RoomUnavailable {
                room: room(101),
                conflicting: booking_id,
            }
        );
        assert_eq!(hotel.next_booking_id(), BookingId::new(2));
    }

    #[test]
    fn test_create_booking_undo_removes_only_its_booking() {
        let (mut hotel, first) = booked_hotel();
        let mut second = CreateBooking::new(
            GuestId::new(1),
            room(101),
            date(2026, 2, 1),
            date(2026, 2, 3),
        );
        second.execute(&mut hotel).unwrap();
        assert_eq!(second.booking_id(), Some(BookingId::new(2)));

        second.undo(&mut hotel);
        assert!(hotel.booking(BookingId::new(2)).is_none());
        assert!(hotel.booking(first).is_some());
    }

    #[test]
    fn test_check_in_and_undo() {
        let (mut hotel, booking_id) = booked_hotel();
        let mut op = CheckIn::new(booking_id);

        op.execute(&mut hotel).unwrap();
        assert_eq!(op.previous_status(), Some(BookingStatus::Booked));
        assert_eq!(status(&hotel, booking_id), BookingStatus::CheckedIn);

        op.undo(&mut hotel);
        assert_eq!(status(&hotel, booking_id), BookingStatus::Booked);
    }

    #[test]
    fn test_check_in_requires_booked() {
        let (mut hotel, booking_id) = booked_hotel();
        CheckIn::new(booking_id).execute(&mut hotel).unwrap();
        CheckOut::new(booking_id).execute(&mut hotel).unwrap();

        let err = CheckIn::new(booking_id).execute(&mut hotel).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidTransition {
                booking_id,
                current: BookingStatus::CheckedOut,
                action: "check in",
            }
        );
        assert_eq!(status(&hotel, booking_id), BookingStatus::CheckedOut);
    }

    #[test]
    fn test_check_out_requires_checked_in() {
        let (mut hotel, booking_id) = booked_hotel();
        let err = CheckOut::new(booking_id).execute(&mut hotel).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidTransition {
                booking_id,
                current: BookingStatus::Booked,
                action: "check out",
            }
        );
        assert_eq!(status(&hotel, booking_id), BookingStatus::Booked);
    }

    #[test]
    fn test_cancel_from_booked_and_checked_in() {
        let (mut hotel, booking_id) = booked_hotel();
        let mut cancel = CancelBooking::new(booking_id);
        cancel.execute(&mut hotel).unwrap();
        assert_eq!(cancel.previous_status(), Some(BookingStatus::Booked));
        assert_eq!(status(&hotel, booking_id), BookingStatus::Cancelled);
        cancel.undo(&mut hotel);
        assert_eq!(status(&hotel, booking_id), BookingStatus::Booked);

        CheckIn::new(booking_id).execute(&mut hotel).unwrap();
        let mut cancel = CancelBooking::new(booking_id);
        cancel.execute(&mut hotel).unwrap();
        cancel.undo(&mut hotel);
        assert_eq!(status(&hotel, booking_id), BookingStatus::CheckedIn);
    }

    #[test]
    fn test_cancel_rejections() {
        let (mut hotel, booking_id) = booked_hotel();
        CancelBooking::new(booking_id).execute(&mut hotel).unwrap();
        let err = CancelBooking::new(booking_id)
            .execute(&mut hotel)
            .unwrap_err();
        assert_eq!(err, ValidationError::AlreadyCancelled { booking_id });

        let (mut hotel, booking_id) = booked_hotel();
        CheckIn::new(booking_id).execute(&mut hotel).unwrap();
        CheckOut::new(booking_id).execute(&mut hotel).unwrap();
        let err = CancelBooking::new(booking_id)
            .execute(&mut hotel)
            .unwrap_err();
        assert_eq!(err, ValidationError::AlreadyCheckedOut { booking_id });

        let err = CancelBooking::new(BookingId::new(42))
            .execute(&mut hotel)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownBooking {
                booking_id: BookingId::new(42)
            }
        );
    }

    #[test]
    fn test_status_undo_is_noop_when_booking_missing() {
        let (mut hotel, booking_id) = booked_hotel();
        let mut check_in = CheckIn::new(booking_id);
        check_in.execute(&mut hotel).unwrap();

        hotel.remove_booking(booking_id);
        check_in.undo(&mut hotel);
        assert!(hotel.booking(booking_id).is_none());
    }

    #[test]
    fn test_undo_without_execute_is_noop() {
        let (mut hotel, booking_id) = booked_hotel();
        CheckIn::new(booking_id).undo(&mut hotel);
        RegisterGuest::new("never").undo(&mut hotel);
        CreateBooking::new(
            GuestId::new(1),
            room(101),
            date(2026, 3, 1),
            date(2026, 3, 2),
        )
        .undo(&mut hotel);

        assert_eq!(status(&hotel, booking_id), BookingStatus::Booked);
        assert_eq!(hotel.guests().count(), 1);
        assert_eq!(hotel.bookings().count(), 1);
    }

    #[test]
    fn test_hotel_operation_dispatch() {
        let mut hotel = Hotel::new();
        let mut op = HotelOperation::from(RegisterGuest::new("Guest"));
        assert_eq!(op.kind(), OperationKind::RegisterGuest);
        assert_eq!(op.assigned_guest_id(), None);

        op.execute(&mut hotel).unwrap();
        assert_eq!(op.assigned_guest_id(), Some(GuestId::new(1)));
        assert_eq!(op.assigned_booking_id(), None);

        op.undo(&mut hotel);
        assert_eq!(hotel.guests().count(), 0);
    }
}
