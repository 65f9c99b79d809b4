//! Reservation submission pipeline
//!
//! Turns a raw [`ReservationRequest`] into a confirmed reservation, or a
//! typed error the API layer renders as an HTTP response.
//!
//! # Submission Flow
//!
//! ```text
//! submit(request)
//!     ├─ 1. Field validation (time composite, date not past, guests, name, email, phone)
//!     ├─ 2. Service-hours check (weekday vs Sunday seating window)
//!     ├─ 3. Availability check against the date's unavailability record
//!     ├─ 4. Store commit (assign table + append + block slot, atomic)
//!     └─ 5. Confirmation message carrying the assigned table
//! ```

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    AvailabilityDump, AvailabilityResponse, ReservationConfirmation, ReservationList,
    ReservationRequest,
};
use shared::schedule::{ServiceHours, format_slot};
use shared::validate::validate_request;

use crate::store::{ReservationStore, StoreError};

/// 预订提交管线 / Reservation submission pipeline
///
/// 持有存储和营业时间的共享引用；所有 API 处理器经由此服务读写预订数据。
pub struct BookingService {
    store: Arc<dyn ReservationStore>,
    hours: ServiceHours,
}

impl BookingService {
    pub fn new(store: Arc<dyn ReservationStore>, hours: ServiceHours) -> Self {
        Self { store, hours }
    }

    /// 提交预订 / Submit a reservation
    ///
    /// "今天" 取本地日历日期；完整管线见 [`BookingService::submit_at`]。
    pub async fn submit(&self, request: ReservationRequest) -> AppResult<ReservationConfirmation> {
        self.submit_at(request, Local::now().date_naive()).await
    }

    /// Submission pipeline against an explicit `today`, so the date
    /// boundary is testable without the wall clock
    pub async fn submit_at(
        &self,
        request: ReservationRequest,
        today: NaiveDate,
    ) -> AppResult<ReservationConfirmation> {
        let (date, slot) = validate_request(&request, today)?;

        if !self.hours.offers(date.weekday(), slot) {
            return Err(AppError::new(ErrorCode::SlotOutsideHours)
                .with_detail("field", "timeSlot"));
        }

        // 提交前复查档期，已占用的时段直接拒绝
        let slot_value = format_slot(slot);
        let blocked = self.store.unavailable_slots(date).await.map_err(|e| {
            tracing::error!("Availability lookup failed: {}", e);
            AppError::store("Error processing reservation.")
        })?;
        if blocked.contains(&slot_value) {
            return Err(AppError::new(ErrorCode::SlotUnavailable));
        }

        let reservation = self.store.commit(request).await.map_err(|e| match e {
            StoreError::FullyBooked { .. } => AppError::new(ErrorCode::SlotFullyBooked),
            StoreError::InvalidTime(_) => AppError::validation("Invalid reservation data."),
            StoreError::Storage(msg) => {
                tracing::error!("Reservation commit failed: {}", msg);
                AppError::store("Error processing reservation.")
            }
        })?;

        tracing::info!(
            "Reservation confirmed: {} ({}) -> table {}",
            reservation.time,
            reservation.email,
            reservation.table_number
        );

        Ok(ReservationConfirmation::new(reservation))
    }

    /// Unavailable slot values for one date; unknown dates yield an
    /// empty list rather than an error
    pub async fn availability_for(&self, date: NaiveDate) -> AppResult<AvailabilityResponse> {
        let slots = self.store.unavailable_slots(date).await.map_err(|e| {
            tracing::error!("Availability lookup failed: {}", e);
            AppError::store("Error fetching availability.")
        })?;

        Ok(AvailabilityResponse {
            date,
            unavailable_time_slots: slots,
        })
    }

    /// Every unavailability record, date-ordered
    pub async fn availability_dump(&self) -> AppResult<AvailabilityDump> {
        let records = self.store.all_records().await.map_err(|e| {
            tracing::error!("Availability dump failed: {}", e);
            AppError::store("Error fetching availability.")
        })?;

        Ok(AvailabilityDump {
            unavailable_slots: records,
        })
    }

    /// All reservations in insertion order
    pub async fn list_reservations(&self) -> AppResult<ReservationList> {
        let reservations = self.store.list().await.map_err(|e| {
            tracing::error!("Reservation list failed: {}", e);
            AppError::store("Error fetching reservations.")
        })?;

        Ok(ReservationList { reservations })
    }
}
