//! Time Slot Model

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A bookable seating slot
///
/// `value` is the machine form (`"19:00"`), `label` the display form
/// (`"7:00 PM"`) the booking frontend renders in its slot picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub value: String,
    pub label: String,
}

impl TimeSlot {
    /// Build the slot pair for a seating time
    pub fn at(time: NaiveTime) -> Self {
        Self {
            value: time.format("%H:%M").to_string(),
            label: time.format("%-I:%M %p").to_string(),
        }
    }
}
