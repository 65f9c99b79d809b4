//! Shared types for the booking workspace
//!
//! Common types used across booking-server and booking-client: wire
//! models, the unified error system, seating schedule math, and the
//! reservation field validators.

pub mod error;
pub mod models;
pub mod schedule;
pub mod validate;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    AvailabilityDump, AvailabilityResponse, Reservation, ReservationConfirmation,
    ReservationList, ReservationRequest, TimeSlot, UnavailabilityRecord,
};
pub use schedule::{SeatingWindow, ServiceHours};
pub use validate::{Field, ReservationDraft};
