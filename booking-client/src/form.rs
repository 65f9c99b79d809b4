//! Reservation form state machine
//!
//! Drives the booking form the way the frontend renders it: field
//! edits, blur validation, the date-driven slot picker, and the submit
//! flow. The form owns a [`SlotResolver`] for availability lookups and
//! talks to the reservation API through the injected transport.
//!
//! Error surfacing follows the touch model: a field's message is only
//! shown after the field has been blurred (or a submit touched
//! everything), while editing a field optimistically clears its error
//! until the next blur or submit re-validates it.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use shared::schedule::ServiceHours;
use shared::validate::{self, Field, MAX_GUESTS, MIN_GUESTS, ReservationDraft};

use crate::{BookingTransport, ClientResult, Notice, SlotResolver, SlotView};

/// Interactive state of the reservation form
pub struct ReservationForm {
    draft: ReservationDraft,
    touched: BTreeSet<Field>,
    errors: BTreeMap<Field, &'static str>,
    resolver: SlotResolver,
    transport: Arc<dyn BookingTransport>,
    view: SlotView,
    notice: Option<Notice>,
    submitting: bool,
    slots_loading: bool,
}

impl ReservationForm {
    pub fn new(transport: Arc<dyn BookingTransport>) -> Self {
        Self::with_hours(transport, ServiceHours::default())
    }

    /// Build a form whose slot picker follows a custom schedule
    pub fn with_hours(transport: Arc<dyn BookingTransport>, hours: ServiceHours) -> Self {
        Self {
            resolver: SlotResolver::new(transport.clone()).with_hours(hours),
            transport,
            draft: ReservationDraft::default(),
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            view: SlotView::default(),
            notice: None,
            submitting: false,
            slots_loading: false,
        }
    }

    // ==================== Field transitions ====================

    /// Apply a raw input edit to one field
    ///
    /// Clears the field's error optimistically; the next blur or
    /// submit re-validates it.
    pub fn edit(&mut self, field: Field, raw: &str) {
        match field {
            Field::Date => self.draft.date = raw.to_string(),
            Field::TimeSlot => self.draft.time_slot = raw.to_string(),
            Field::Guests => self.draft.guests = raw.parse().unwrap_or(0),
            Field::Name => self.draft.name = raw.to_string(),
            Field::Email => self.draft.email = raw.to_string(),
            Field::Phone => self.draft.phone = raw.to_string(),
        }
        self.errors.remove(&field);
    }

    /// Change the reservation date and refresh the slot picker
    ///
    /// While the refresh is outstanding slot selection is disabled; a
    /// previously chosen slot that the new date no longer offers is
    /// cleared.
    pub async fn set_date(&mut self, raw: &str) -> ClientResult<()> {
        self.edit(Field::Date, raw);
        self.slots_loading = true;

        match self.resolver.refresh(raw).await {
            Ok(Some(view)) => {
                let still_selectable = view
                    .slots
                    .iter()
                    .any(|s| s.available && s.value == self.draft.time_slot);
                if !self.draft.time_slot.is_empty() && !still_selectable {
                    self.draft.time_slot.clear();
                }
                self.view = view;
                self.slots_loading = false;
            }
            // A newer refresh superseded this one; its result owns the
            // picker state
            Ok(None) => {}
            Err(err) => {
                self.slots_loading = false;
                return Err(err);
            }
        }
        Ok(())
    }

    /// Choose a slot from the picker
    ///
    /// Ignored while the picker is refreshing or when the option is
    /// not selectable for the current date.
    pub fn select_slot(&mut self, value: &str) {
        if self.slots_loading {
            return;
        }
        let selectable = self
            .view
            .slots
            .iter()
            .any(|s| s.available && s.value == value);
        if !selectable {
            return;
        }
        self.edit(Field::TimeSlot, value);
    }

    /// Mark a field touched and validate it
    pub fn blur(&mut self, field: Field) {
        self.blur_at(field, Local::now().date_naive());
    }

    /// [`blur`](Self::blur) against an explicit `today`
    pub fn blur_at(&mut self, field: Field, today: NaiveDate) {
        self.touched.insert(field);
        match validate::validate_field(field, &self.draft, today) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    // ==================== Submission ====================

    /// Validate everything and submit the reservation
    ///
    /// Returns true on success. The outcome lands in the notice
    /// channel either way; a successful submission resets the draft,
    /// a failed one leaves it intact for retry.
    pub async fn submit(&mut self) -> bool {
        self.submit_at(Local::now().date_naive()).await
    }

    /// [`submit`](Self::submit) against an explicit `today`
    pub async fn submit_at(&mut self, today: NaiveDate) -> bool {
        // Surface every message at once before sending anything
        self.errors = validate::validate_draft(&self.draft, today);
        self.touched.extend(Field::all());

        if !self.errors.is_empty() {
            self.notice = Some(Notice::error(
                "Please fix the errors below before submitting.",
            ));
            return false;
        }

        self.submitting = true;
        let result = self
            .transport
            .submit_reservation(&self.draft.to_request())
            .await;
        self.submitting = false;

        match result {
            Ok(confirmation) => {
                let text = if confirmation.message.is_empty() {
                    "Reservation submitted successfully!".to_string()
                } else {
                    confirmation.message
                };
                self.notice = Some(Notice::success(text));
                self.reset();
                true
            }
            Err(err) => {
                tracing::warn!("Reservation submission failed: {}", err);
                self.notice = Some(Notice::error(
                    "Error submitting reservation. Please try again.",
                ));
                false
            }
        }
    }

    fn reset(&mut self) {
        self.draft = ReservationDraft::default();
        self.errors.clear();
        self.touched.clear();
        self.view = SlotView::default();
    }

    // ==================== Render state ====================

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    /// Current slot picker contents
    pub fn view(&self) -> &SlotView {
        &self.view
    }

    /// The field's error message, shown only once the field has been
    /// touched
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.errors.get(&field).copied()
    }

    /// Whether the submit control is disabled; recomputed on every
    /// call, not latched
    pub fn is_submit_disabled(&self) -> bool {
        !self.draft.has_required_fields() || !self.errors.is_empty() || self.submitting
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_loading_slots(&self) -> bool {
        self.slots_loading
    }

    /// Take the pending notice, leaving the channel empty
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Party sizes offered by the guests select
    pub fn guest_options() -> RangeInclusive<u32> {
        MIN_GUESTS..=MAX_GUESTS
    }
}
