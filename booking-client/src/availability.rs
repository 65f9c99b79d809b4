//! Slot availability resolution
//!
//! Turns a chosen date into the list of selectable seating slots by
//! combining the weekday calendar with the server's unavailability
//! lookup. Lookups are raced: each refresh takes a fresh token and a
//! result that comes back after a newer refresh started is dropped, so
//! the picker always reflects the most recently chosen date.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Datelike;

use shared::schedule::{self, ServiceHours};

use crate::{BookingTransport, ClientResult};

/// One entry in the slot picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotOption {
    /// Machine form, e.g. `"19:00"`
    pub value: String,
    /// Display form, e.g. `"7:00 PM"`
    pub label: String,
    /// False when the server reported the slot as taken
    pub available: bool,
}

/// The resolved picker contents for one date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotView {
    pub date: String,
    pub slots: Vec<SlotOption>,
    /// True when the unavailability lookup failed and every calendar
    /// slot was offered anyway
    pub fail_open: bool,
}

/// Resolves the slot picker for a chosen reservation date
pub struct SlotResolver {
    transport: Arc<dyn BookingTransport>,
    hours: ServiceHours,
    fail_open: bool,
    token: AtomicU64,
}

impl SlotResolver {
    pub fn new(transport: Arc<dyn BookingTransport>) -> Self {
        Self {
            transport,
            hours: ServiceHours::default(),
            fail_open: true,
            token: AtomicU64::new(0),
        }
    }

    /// Override the seating schedule
    pub fn with_hours(mut self, hours: ServiceHours) -> Self {
        self.hours = hours;
        self
    }

    /// Set the lookup failure policy
    ///
    /// Fail-open (the default) offers every calendar slot when the
    /// unavailability lookup errors; fail-closed surfaces the error.
    pub fn fail_open(mut self, fail_open: bool) -> Self {
        self.fail_open = fail_open;
        self
    }

    /// Resolve the slot view for `date` (`YYYY-MM-DD`)
    ///
    /// Returns `Ok(None)` when a newer refresh started while this one
    /// was waiting on the network; the caller keeps its current view.
    pub async fn refresh(&self, date: &str) -> ClientResult<Option<SlotView>> {
        let token = self.token.fetch_add(1, Ordering::SeqCst) + 1;

        // An unparseable date renders an empty picker
        let Ok(parsed) = schedule::parse_date(date) else {
            return Ok(Some(SlotView {
                date: date.to_string(),
                slots: Vec::new(),
                fail_open: false,
            }));
        };

        let calendar = self.hours.calendar_for(parsed.weekday());

        let (unavailable, fail_open) = match self.transport.fetch_unavailable(date).await {
            Ok(response) => (response.unavailable_time_slots, false),
            Err(err) if self.fail_open => {
                tracing::warn!("Availability lookup failed, offering all slots: {}", err);
                (Vec::new(), true)
            }
            Err(err) => return Err(err),
        };

        // A newer refresh superseded this one while the lookup was in
        // flight
        if self.token.load(Ordering::SeqCst) != token {
            return Ok(None);
        }

        let slots = calendar
            .into_iter()
            .map(|slot| {
                let available = !unavailable.contains(&slot.value);
                SlotOption {
                    value: slot.value,
                    label: slot.label,
                    available,
                }
            })
            .collect();

        Ok(Some(SlotView {
            date: date.to_string(),
            slots,
            fail_open,
        }))
    }
}
