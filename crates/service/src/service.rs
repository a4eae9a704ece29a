//! Hotel service serializing every mutation behind one lock.

use std::sync::{Arc, Mutex, MutexGuard};

use hotel_domain::{Hotel, HotelError, HotelOperation};

use crate::error::ServiceError;

/// Shared handle to a single [`Hotel`].
///
/// `apply` and `undo_last` each run as one critical section under an
/// exclusive lock, so validation inside an operation always sees the same
/// state it then mutates. Reads take the same lock.
///
/// Cloning the service shares the underlying hotel.
#[derive(Debug, Clone, Default)]
pub struct HotelService {
    hotel: Arc<Mutex<Hotel>>,
}

impl HotelService {
    /// Creates a service around an empty hotel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service around an existing hotel.
    pub fn with_hotel(hotel: Hotel) -> Self {
        Self {
            hotel: Arc::new(Mutex::new(hotel)),
        }
    }

    /// Applies an operation.
    ///
    /// Returns a copy of the recorded operation so the caller can read any
    /// id it was assigned.
    #[tracing::instrument(skip_all, fields(operation = tracing::field::Empty))]
    pub fn apply(
        &self,
        operation: impl Into<HotelOperation>,
    ) -> Result<HotelOperation, ServiceError> {
        let operation = operation.into();
        let kind = operation.kind();
        tracing::Span::current().record("operation", kind.as_str());

        let mut hotel = self.lock()?;
        match hotel.apply(operation) {
            Ok(recorded) => {
                let recorded = recorded.clone();
                metrics::counter!("hotel_operations_applied_total", "operation" => kind.as_str())
                    .increment(1);
                metrics::gauge!("hotel_history_depth").set(hotel.history().len() as f64);
                tracing::info!("operation applied");
                Ok(recorded)
            }
            Err(err) => {
                metrics::counter!("hotel_operations_rejected_total", "operation" => kind.as_str())
                    .increment(1);
                tracing::info!(error = %err, "operation rejected");
                Err(err.into())
            }
        }
    }

    /// Undoes the most recently applied operation and returns it.
    #[tracing::instrument(skip_all, fields(operation = tracing::field::Empty))]
    pub fn undo_last(&self) -> Result<HotelOperation, ServiceError> {
        let mut hotel = self.lock()?;
        let undone = hotel.undo_last().inspect_err(|err| {
            if matches!(err, HotelError::EmptyHistory) {
                tracing::info!("nothing to undo");
            }
        })?;

        let kind = undone.kind();
        tracing::Span::current().record("operation", kind.as_str());
        metrics::counter!("hotel_operations_undone_total", "operation" => kind.as_str())
            .increment(1);
        metrics::gauge!("hotel_history_depth").set(hotel.history().len() as f64);
        tracing::info!("operation undone");

        Ok(undone)
    }

    /// Runs `f` against a consistent view of the hotel.
    pub fn read<R>(&self, f: impl FnOnce(&Hotel) -> R) -> Result<R, ServiceError> {
        let hotel = self.lock()?;
        Ok(f(&hotel))
    }

    /// Returns a copy of the whole hotel.
    pub fn snapshot(&self) -> Result<Hotel, ServiceError> {
        self.read(Hotel::clone)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Hotel>, ServiceError> {
        self.hotel.lock().map_err(|_| ServiceError::LockPoisoned)
    }
}
