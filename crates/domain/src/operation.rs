//! The reversible operation contract.

use serde::{Deserialize, Serialize};

use crate::hotel::{Hotel, ValidationError};

/// Discriminates the six operation variants.
///
/// Used for logging and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    AddRoom,
    RegisterGuest,
    CreateBooking,
    CancelBooking,
    CheckIn,
    CheckOut,
}

impl OperationKind {
    /// Returns the operation name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::AddRoom => "add_room",
            OperationKind::RegisterGuest => "register_guest",
            OperationKind::CreateBooking => "create_booking",
            OperationKind::CancelBooking => "cancel_booking",
            OperationKind::CheckIn => "check_in",
            OperationKind::CheckOut => "check_out",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reversible unit of state change against a [`Hotel`].
///
/// Implementations are small mementos: `execute` validates everything up
/// front, mutates, and caches exactly what `undo` needs to put the hotel
/// back. Nothing outside the instance is consulted to reverse it.
///
/// Only [`Hotel::apply`] and [`Hotel::undo_last`] drive these methods, so
/// every executed operation is in history and every undone one has left it.
pub(crate) trait Operation {
    /// Performs the forward action.
    ///
    /// On error the hotel must be untouched.
    fn execute(&mut self, hotel: &mut Hotel) -> Result<(), ValidationError>;

    /// Reverses a previously successful `execute`.
    ///
    /// Never fails. If the record it would touch is gone, this is a no-op.
    fn undo(&mut self, hotel: &mut Hotel);
}
