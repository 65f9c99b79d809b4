//! Reservation field validation
//!
//! One rule set shared by the client form (per-field messages for the
//! error map) and the HTTP boundary (structured rejection). Messages are
//! the exact strings the booking frontend displays.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::ReservationRequest;
use crate::schedule::{derive_time, split_time};

// ==================== Limits ====================

/// Smallest bookable party
pub const MIN_GUESTS: u32 = 1;

/// Largest bookable party
pub const MAX_GUESTS: u32 = 12;

/// Minimum name length after trimming
pub const MIN_NAME_LEN: usize = 2;

// ==================== Field identity ====================

/// The six reservation form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Date,
    TimeSlot,
    Guests,
    Name,
    Email,
    Phone,
}

impl Field {
    pub fn all() -> [Field; 6] {
        [
            Field::Date,
            Field::TimeSlot,
            Field::Guests,
            Field::Name,
            Field::Email,
            Field::Phone,
        ]
    }

    /// Wire/form name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::TimeSlot => "timeSlot",
            Field::Guests => "guests",
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ==================== Draft ====================

/// Editable reservation draft, one value per [`Field`]
///
/// `guests` uses the numeric coercion the form applies on edit: anything
/// unparsable becomes 0 and fails the range rule instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    pub date: String,
    pub time_slot: String,
    pub guests: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            date: String::new(),
            time_slot: String::new(),
            guests: 1,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

impl ReservationDraft {
    /// Recompute the composite `YYYY-MM-DDTHH:MM` from the two halves
    pub fn derived_time(&self) -> String {
        derive_time(&self.date, &self.time_slot)
    }

    /// Required fields present (not necessarily valid)
    pub fn has_required_fields(&self) -> bool {
        !self.derived_time().is_empty() && !self.name.is_empty() && !self.email.is_empty()
    }

    /// Build the submission payload; empty phone becomes absent
    pub fn to_request(&self) -> ReservationRequest {
        ReservationRequest {
            time: self.derived_time(),
            guests: self.guests,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: if self.phone.trim().is_empty() {
                None
            } else {
                Some(self.phone.clone())
            },
        }
    }
}

// ==================== Single-field rules ====================
// Each returns None when valid, or the message the form displays.

/// Date must be present, well-formed, and today or later
pub fn validate_date(value: &str, today: NaiveDate) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Date is required");
    }
    let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
        return Some("Please enter a valid date");
    };
    if date < today {
        return Some("Please choose today or a later date");
    }
    None
}

/// Time slot must be present and shaped `HH:MM`
///
/// Calendar membership is not checked here: which slots are offered or
/// disabled is the availability view's concern, and the server re-checks
/// on submission anyway.
pub fn validate_time_slot(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Time slot is required");
    }
    if NaiveTime::parse_from_str(value, "%H:%M").is_err() {
        return Some("Please select a valid time slot");
    }
    None
}

/// Party size must be between [`MIN_GUESTS`] and [`MAX_GUESTS`]
pub fn validate_guests(guests: u32) -> Option<&'static str> {
    if guests < MIN_GUESTS {
        return Some("At least 1 guest is required");
    }
    if guests > MAX_GUESTS {
        return Some("Maximum 12 guests allowed");
    }
    None
}

/// Name must be present and at least [`MIN_NAME_LEN`] characters after trimming
pub fn validate_name(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Name is required");
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Some("Name must be at least 2 characters");
    }
    None
}

/// Email must be present and look like `local@domain.tld`
pub fn validate_email(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Email is required");
    }
    if !is_valid_email(value) {
        return Some("Please enter a valid email address");
    }
    None
}

/// Phone is optional; when present it must be `+` (optional), a leading
/// 1-9, then up to 15 further digits
pub fn validate_phone(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return None;
    }
    if !is_valid_phone(value) {
        return Some("Please enter a valid phone number");
    }
    None
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // a dot with at least one character on each side
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}

fn is_valid_phone(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    let mut chars = rest.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_digit() || first == '0' {
        return false;
    }
    let tail = chars.as_str();
    tail.len() <= 15 && tail.bytes().all(|b| b.is_ascii_digit())
}

// ==================== Aggregates ====================

/// Validate one field of a draft
pub fn validate_field(field: Field, draft: &ReservationDraft, today: NaiveDate) -> Option<&'static str> {
    match field {
        Field::Date => validate_date(&draft.date, today),
        Field::TimeSlot => validate_time_slot(&draft.time_slot),
        Field::Guests => validate_guests(draft.guests),
        Field::Name => validate_name(&draft.name),
        Field::Email => validate_email(&draft.email),
        Field::Phone => validate_phone(&draft.phone),
    }
}

/// Validate every field; the returned map holds only the failures
pub fn validate_draft(
    draft: &ReservationDraft,
    today: NaiveDate,
) -> BTreeMap<Field, &'static str> {
    Field::all()
        .into_iter()
        .filter_map(|field| validate_field(field, draft, today).map(|msg| (field, msg)))
        .collect()
}

// ==================== HTTP boundary ====================

/// Validate a submission payload at the server boundary
///
/// Returns the parsed date and seating time on success so the pipeline
/// does not re-parse the composite.
pub fn validate_request(
    request: &ReservationRequest,
    today: NaiveDate,
) -> AppResult<(NaiveDate, NaiveTime)> {
    let Some((date, slot)) = split_time(&request.time) else {
        return Err(
            AppError::validation("Invalid reservation data.").with_detail("field", "time")
        );
    };
    if date < today {
        return Err(AppError::new(ErrorCode::DateInPast).with_detail("field", "date"));
    }
    if let Some(msg) = validate_guests(request.guests) {
        return Err(AppError::with_message(ErrorCode::ValueOutOfRange, msg)
            .with_detail("field", "guests"));
    }
    if let Some(msg) = validate_name(&request.name) {
        return Err(AppError::validation(msg).with_detail("field", "name"));
    }
    if let Some(msg) = validate_email(&request.email) {
        return Err(AppError::validation(msg).with_detail("field", "email"));
    }
    if let Some(phone) = &request.phone
        && let Some(msg) = validate_phone(phone)
    {
        return Err(AppError::validation(msg).with_detail("field", "phone"));
    }
    Ok((date, slot))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 23).unwrap()
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(validate_date("", today()), Some("Date is required"));
        assert_eq!(validate_date("  ", today()), Some("Date is required"));
        assert_eq!(
            validate_date("23/08/2025", today()),
            Some("Please enter a valid date")
        );
        assert_eq!(
            validate_date("2025-08-22", today()),
            Some("Please choose today or a later date")
        );
        assert_eq!(validate_date("2025-08-23", today()), None);
        assert_eq!(validate_date("2025-08-24", today()), None);
    }

    #[test]
    fn test_validate_time_slot() {
        assert_eq!(validate_time_slot(""), Some("Time slot is required"));
        assert_eq!(
            validate_time_slot("25:00"),
            Some("Please select a valid time slot")
        );
        assert_eq!(
            validate_time_slot("7pm"),
            Some("Please select a valid time slot")
        );
        assert_eq!(validate_time_slot("19:00"), None);
        assert_eq!(validate_time_slot("17:30"), None);
    }

    #[test]
    fn test_validate_guests_bounds() {
        assert_eq!(validate_guests(0), Some("At least 1 guest is required"));
        assert_eq!(validate_guests(1), None);
        assert_eq!(validate_guests(12), None);
        assert_eq!(validate_guests(13), Some("Maximum 12 guests allowed"));
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name(""), Some("Name is required"));
        assert_eq!(validate_name("   "), Some("Name is required"));
        assert_eq!(validate_name("A"), Some("Name must be at least 2 characters"));
        assert_eq!(validate_name(" A "), Some("Name must be at least 2 characters"));
        assert_eq!(validate_name("Al"), None);
        assert_eq!(validate_name("Alice"), None);
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(""), Some("Email is required"));
        assert_eq!(
            validate_email("not-an-email"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate_email("a@b"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate_email("a@.com"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate_email("a@b."),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate_email("a b@example.com"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate_email("a@@example.com"),
            Some("Please enter a valid email address")
        );
        assert_eq!(validate_email("chef@example.com"), None);
        assert_eq!(validate_email("a@b.c"), None);
        assert_eq!(validate_email("first.last@sub.example.co"), None);
    }

    #[test]
    fn test_validate_phone() {
        // Optional: empty is fine
        assert_eq!(validate_phone(""), None);
        assert_eq!(validate_phone("   "), None);

        assert_eq!(validate_phone("+34612345678"), None);
        assert_eq!(validate_phone("34612345678"), None);
        assert_eq!(validate_phone("9"), None);

        assert_eq!(
            validate_phone("0612345678"),
            Some("Please enter a valid phone number")
        );
        assert_eq!(
            validate_phone("+0612345678"),
            Some("Please enter a valid phone number")
        );
        assert_eq!(
            validate_phone("123-456-7890"),
            Some("Please enter a valid phone number")
        );
        assert_eq!(
            validate_phone("12345678901234567"),
            Some("Please enter a valid phone number")
        );
        // 16 digits total is the limit
        assert_eq!(validate_phone("1234567890123456"), None);
    }

    #[test]
    fn test_draft_derived_time() {
        let mut draft = ReservationDraft::default();
        assert_eq!(draft.derived_time(), "");

        draft.date = "2025-08-23".to_string();
        assert_eq!(draft.derived_time(), "");

        draft.time_slot = "19:00".to_string();
        assert_eq!(draft.derived_time(), "2025-08-23T19:00");

        draft.date.clear();
        assert_eq!(draft.derived_time(), "");
    }

    #[test]
    fn test_draft_defaults() {
        let draft = ReservationDraft::default();
        assert_eq!(draft.guests, 1);
        assert!(!draft.has_required_fields());
    }

    #[test]
    fn test_draft_to_request_drops_blank_phone() {
        let draft = ReservationDraft {
            date: "2025-08-23".to_string(),
            time_slot: "19:00".to_string(),
            guests: 2,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: "  ".to_string(),
        };

        let request = draft.to_request();
        assert_eq!(request.time, "2025-08-23T19:00");
        assert_eq!(request.phone, None);
    }

    #[test]
    fn test_validate_draft_collects_failures() {
        let draft = ReservationDraft {
            guests: 13,
            ..Default::default()
        };

        let errors = validate_draft(&draft, today());
        assert_eq!(errors.get(&Field::Date), Some(&"Date is required"));
        assert_eq!(errors.get(&Field::TimeSlot), Some(&"Time slot is required"));
        assert_eq!(errors.get(&Field::Guests), Some(&"Maximum 12 guests allowed"));
        assert_eq!(errors.get(&Field::Name), Some(&"Name is required"));
        assert_eq!(errors.get(&Field::Email), Some(&"Email is required"));
        assert_eq!(errors.get(&Field::Phone), None);
    }

    #[test]
    fn test_validate_draft_clean() {
        let draft = ReservationDraft {
            date: "2025-08-24".to_string(),
            time_slot: "19:00".to_string(),
            guests: 2,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: String::new(),
        };

        assert!(validate_draft(&draft, today()).is_empty());
    }

    #[test]
    fn test_validate_request_ok() {
        let request = ReservationRequest {
            time: "2025-08-24T19:00".to_string(),
            guests: 2,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
        };

        let (date, slot) = validate_request(&request, today()).unwrap();
        assert_eq!(date.to_string(), "2025-08-24");
        assert_eq!(slot.format("%H:%M").to_string(), "19:00");
    }

    #[test]
    fn test_validate_request_bad_time_shape() {
        let request = ReservationRequest {
            time: "2025-08-24".to_string(),
            guests: 2,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
        };

        let err = validate_request(&request, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Invalid reservation data.");
    }

    #[test]
    fn test_validate_request_past_date() {
        let request = ReservationRequest {
            time: "2025-08-22T19:00".to_string(),
            guests: 2,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
        };

        let err = validate_request(&request, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DateInPast);
    }

    #[test]
    fn test_validate_request_guests_out_of_range() {
        let request = ReservationRequest {
            time: "2025-08-24T19:00".to_string(),
            guests: 13,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
        };

        let err = validate_request(&request, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.message, "Maximum 12 guests allowed");
    }

    #[test]
    fn test_validate_request_bad_phone() {
        let request = ReservationRequest {
            time: "2025-08-24T19:00".to_string(),
            guests: 2,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: Some("123-456-7890".to_string()),
        };

        let err = validate_request(&request, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Please enter a valid phone number");
    }
}
