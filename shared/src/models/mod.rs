//! Data models
//!
//! Wire types shared between booking-server and client consumers.
//! Keys are camelCase on the wire (`tableNumber`, `unavailableTimeSlots`),
//! matching what the booking frontend already speaks.

pub mod availability;
pub mod reservation;
pub mod slot;

// Re-exports
pub use availability::*;
pub use reservation::*;
pub use slot::*;
