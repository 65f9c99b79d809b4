//! Booking Client - reservation form engine for the booking server
//!
//! Drives the restaurant reservation flow end to end: slot
//! availability resolution, per-field validation with the touch model,
//! and submission over HTTP. Frontends embed [`ReservationForm`] and
//! render from its state; tests swap the transport for a mock.

pub mod availability;
pub mod config;
pub mod error;
pub mod form;
pub mod notice;
pub mod transport;

pub use availability::{SlotOption, SlotResolver, SlotView};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::ReservationForm;
pub use notice::{Notice, NoticeKind};
pub use transport::{BookingTransport, HttpTransport};

// Re-export shared types for convenience
pub use shared::models::{AvailabilityResponse, ReservationConfirmation, ReservationRequest};
pub use shared::schedule::ServiceHours;
pub use shared::validate::{Field, ReservationDraft};
