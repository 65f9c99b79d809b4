//! Availability Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-date unavailability record
///
/// `time_slots` holds the `HH:MM` slot values that can no longer be booked
/// for `date`, sorted ascending (lexicographic order on `HH:MM` is
/// chronological order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnavailabilityRecord {
    pub date: NaiveDate,
    pub time_slots: Vec<String>,
}

impl UnavailabilityRecord {
    pub fn new(date: NaiveDate, time_slots: Vec<String>) -> Self {
        Self { date, time_slots }
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.time_slots.iter().any(|s| s == slot)
    }
}

/// `GET /api/availability?date=...` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    pub unavailable_time_slots: Vec<String>,
}

/// `GET /api/availability` (no date) response body: every record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityDump {
    pub unavailable_slots: Vec<UnavailabilityRecord>,
}
