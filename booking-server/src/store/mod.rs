//! Reservation storage layer
//!
//! The HTTP pipeline only ever talks to [`ReservationStore`]; the in-memory
//! implementation behind it is swappable for a persistent store without
//! touching the API or the submission pipeline.
//!
//! # Operations
//!
//! | Operation | Purpose |
//! |-----------|---------|
//! | `get` | Unavailability record for one date |
//! | `all_records` | Every unavailability record, date-ordered |
//! | `list` | All reservations, insertion order |
//! | `append` | Raw append (seeding/imports, no availability side effect) |
//! | `mark_unavailable` | Block one slot for a date |
//! | `commit` | Table assignment + append + mark-unavailable, atomic |

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use shared::models::{Reservation, ReservationRequest, UnavailabilityRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    /// Every table for this date and seating time is already committed
    #[error("No free table remains for {date} {slot}")]
    FullyBooked { date: NaiveDate, slot: String },

    /// The reservation time is not a `YYYY-MM-DDTHH:MM` composite
    #[error("Invalid reservation time: {0}")]
    InvalidTime(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Injected storage seam for reservations and per-date availability
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Unavailability record for `date`; `None` when nothing is blocked
    async fn get(&self, date: NaiveDate) -> StoreResult<Option<UnavailabilityRecord>>;

    /// Every unavailability record, ordered by date
    async fn all_records(&self) -> StoreResult<Vec<UnavailabilityRecord>>;

    /// All reservations in insertion order
    async fn list(&self) -> StoreResult<Vec<Reservation>>;

    /// Append a reservation as-is, without touching availability
    async fn append(&self, reservation: Reservation) -> StoreResult<()>;

    /// Mark one seating time unavailable for `date`
    async fn mark_unavailable(&self, date: NaiveDate, slot: NaiveTime) -> StoreResult<()>;

    /// Assign a free table for the request's date+slot, then append the
    /// reservation and mark the slot unavailable as one atomic step
    ///
    /// Fails [`StoreError::FullyBooked`] when no table remains for that
    /// exact date and seating time.
    async fn commit(&self, request: ReservationRequest) -> StoreResult<Reservation>;

    /// Unavailable slot values for `date` (empty when none recorded)
    async fn unavailable_slots(&self, date: NaiveDate) -> StoreResult<Vec<String>> {
        Ok(self
            .get(date)
            .await?
            .map(|record| record.time_slots)
            .unwrap_or_default())
    }
}
