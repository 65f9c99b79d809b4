//! Seating schedule math
//!
//! The dining room seats on fixed 30-minute slots. Slot generation and
//! the `YYYY-MM-DDTHH:MM` composite both live here so the calendar shown
//! to guests and the values accepted at the HTTP boundary cannot drift.

use chrono::{Duration, NaiveDate, NaiveTime, Weekday};

use crate::error::{AppError, AppResult};
use crate::models::TimeSlot;

/// Minutes between consecutive seating slots
pub const SLOT_STEP_MINUTES: i64 = 30;

/// First/last seating pair for one day class
///
/// `last` is inclusive: the dining room still seats at `last` even though
/// doors close later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatingWindow {
    pub first: NaiveTime,
    pub last: NaiveTime,
}

impl SeatingWindow {
    pub fn new(first: NaiveTime, last: NaiveTime) -> Self {
        Self { first, last }
    }

    /// All seating times in the window, stepping [`SLOT_STEP_MINUTES`]
    ///
    /// Empty when `first > last`. Stops rather than wrapping past midnight.
    pub fn seatings(&self) -> Vec<NaiveTime> {
        let mut out = Vec::new();
        let mut t = self.first;
        while t <= self.last {
            out.push(t);
            let (next, wrapped) = t.overflowing_add_signed(Duration::minutes(SLOT_STEP_MINUTES));
            if wrapped != 0 {
                break;
            }
            t = next;
        }
        out
    }
}

/// Weekly service hours: one window Monday through Saturday, a reduced
/// window on Sunday
///
/// Injected wherever slots are generated so tests (and a future settings
/// surface) can supply their own hours instead of editing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceHours {
    pub standard: SeatingWindow,
    pub sunday: SeatingWindow,
}

impl ServiceHours {
    pub fn new(standard: SeatingWindow, sunday: SeatingWindow) -> Self {
        Self { standard, sunday }
    }

    /// The seating window in effect on `weekday`
    pub fn window_for(&self, weekday: Weekday) -> SeatingWindow {
        match weekday {
            Weekday::Sun => self.sunday,
            _ => self.standard,
        }
    }

    /// The full slot calendar for `weekday`, in ascending order
    pub fn calendar_for(&self, weekday: Weekday) -> Vec<TimeSlot> {
        self.window_for(weekday)
            .seatings()
            .into_iter()
            .map(TimeSlot::at)
            .collect()
    }

    /// Whether `slot` is a seating time offered on `weekday`
    pub fn offers(&self, weekday: Weekday, slot: NaiveTime) -> bool {
        self.window_for(weekday).seatings().contains(&slot)
    }
}

impl Default for ServiceHours {
    /// Monday-Saturday 17:00 with last seating 22:30; Sunday 17:00 with
    /// last seating 20:30 (doors 23:00 / 21:00)
    fn default() -> Self {
        Self {
            standard: SeatingWindow::new(hm(17, 0), hm(22, 30)),
            sunday: SeatingWindow::new(hm(17, 0), hm(20, 30)),
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Parse a slot value string (HH:MM)
pub fn parse_slot(slot: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(slot, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid time slot format: {}", slot)))
}

/// Format a seating time back to its `HH:MM` slot value
pub fn format_slot(slot: NaiveTime) -> String {
    slot.format("%H:%M").to_string()
}

/// Derive the composite reservation time from its two halves
///
/// Pure: `""` whenever either half is empty, otherwise
/// `{date}T{timeSlot}`. Never stored independently of its inputs.
pub fn derive_time(date: &str, time_slot: &str) -> String {
    if date.is_empty() || time_slot.is_empty() {
        String::new()
    } else {
        format!("{}T{}", date, time_slot)
    }
}

/// Split a composite `YYYY-MM-DDTHH:MM` back into date and seating time
///
/// `None` when the shape or either half does not parse.
pub fn split_time(time: &str) -> Option<(NaiveDate, NaiveTime)> {
    let (date, slot) = time.split_once('T')?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let slot = NaiveTime::parse_from_str(slot, "%H:%M").ok()?;
    Some((date, slot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_calendar_bounds() {
        let hours = ServiceHours::default();

        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ] {
            let calendar = hours.calendar_for(weekday);
            assert_eq!(calendar.len(), 12, "{:?}", weekday);
            assert_eq!(calendar.first().unwrap().value, "17:00");
            assert_eq!(calendar.last().unwrap().value, "22:30");
            assert!(calendar.iter().all(|s| s.value.as_str() < "23:00"));
        }
    }

    #[test]
    fn test_sunday_calendar_bounds() {
        let hours = ServiceHours::default();
        let calendar = hours.calendar_for(Weekday::Sun);

        assert_eq!(calendar.len(), 8);
        assert_eq!(calendar.first().unwrap().value, "17:00");
        assert_eq!(calendar.last().unwrap().value, "20:30");
        assert!(calendar.iter().all(|s| s.value.as_str() < "21:00"));
    }

    #[test]
    fn test_calendar_step_is_thirty_minutes() {
        let hours = ServiceHours::default();
        let seatings = hours.window_for(Weekday::Fri).seatings();

        for pair in seatings.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::minutes(30));
        }
    }

    #[test]
    fn test_calendar_labels() {
        let hours = ServiceHours::default();
        let calendar = hours.calendar_for(Weekday::Mon);

        assert_eq!(calendar[0].label, "5:00 PM");
        assert_eq!(calendar[4].label, "7:00 PM");
        assert_eq!(calendar[11].label, "10:30 PM");
    }

    #[test]
    fn test_offers() {
        let hours = ServiceHours::default();

        assert!(hours.offers(Weekday::Mon, hm(17, 0)));
        assert!(hours.offers(Weekday::Mon, hm(22, 30)));
        assert!(!hours.offers(Weekday::Mon, hm(23, 0)));
        assert!(!hours.offers(Weekday::Mon, hm(17, 15)));

        assert!(hours.offers(Weekday::Sun, hm(20, 30)));
        assert!(!hours.offers(Weekday::Sun, hm(21, 0)));
    }

    #[test]
    fn test_empty_window() {
        let window = SeatingWindow::new(hm(22, 0), hm(17, 0));
        assert!(window.seatings().is_empty());
    }

    #[test]
    fn test_window_never_wraps_midnight() {
        let window = SeatingWindow::new(hm(23, 0), hm(23, 59));
        let seatings = window.seatings();
        assert_eq!(seatings, vec![hm(23, 0), hm(23, 30)]);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-08-23").unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 23).unwrap()
        );
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_slot() {
        assert_eq!(parse_slot("19:00").unwrap(), hm(19, 0));
        assert!(parse_slot("25:00").is_err());
        assert!(parse_slot("19").is_err());
    }

    #[test]
    fn test_derive_time() {
        assert_eq!(derive_time("2025-08-23", "19:00"), "2025-08-23T19:00");
        assert_eq!(derive_time("", "19:00"), "");
        assert_eq!(derive_time("2025-08-23", ""), "");
        assert_eq!(derive_time("", ""), "");
    }

    #[test]
    fn test_split_time() {
        let (date, slot) = split_time("2025-08-23T19:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, 23).unwrap());
        assert_eq!(slot, hm(19, 0));

        assert!(split_time("2025-08-23").is_none());
        assert!(split_time("2025-08-23T25:00").is_none());
        assert!(split_time("bogusT19:00").is_none());
        assert!(split_time("").is_none());
    }

    #[test]
    fn test_split_round_trips_derive() {
        let time = derive_time("2025-08-23", "19:00");
        let (date, slot) = split_time(&time).unwrap();
        assert_eq!(date.to_string(), "2025-08-23");
        assert_eq!(format_slot(slot), "19:00");
    }
}
