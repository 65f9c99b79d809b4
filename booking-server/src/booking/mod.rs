//! Booking domain for the reservation server
//!
//! - **service**: submission pipeline from raw request to confirmation
//! - **tables**: numbered dining table pool with random free-table assignment

mod service;
mod tables;

pub use service::BookingService;
pub use tables::{DEFAULT_TABLE_COUNT, TablePool};
