//! In-memory reservation store
//!
//! Reads go through a DashMap so availability queries never wait on a
//! submission in flight; writes serialize on a single commit lock so two
//! submissions for the same date+slot cannot draw the same table.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use dashmap::DashMap;
use tokio::sync::{Mutex, RwLock};

use shared::models::{Reservation, ReservationRequest, UnavailabilityRecord};
use shared::schedule::{format_slot, split_time};

use super::{ReservationStore, StoreError, StoreResult};
use crate::booking::TablePool;

pub struct MemoryStore {
    reservations: RwLock<Vec<Reservation>>,
    unavailability: DashMap<NaiveDate, BTreeSet<String>>,
    commit_lock: Mutex<()>,
    tables: TablePool,
}

impl MemoryStore {
    pub fn new(tables: TablePool) -> Self {
        Self {
            reservations: RwLock::new(Vec::new()),
            unavailability: DashMap::new(),
            commit_lock: Mutex::new(()),
            tables,
        }
    }

    /// Store pre-loaded with the demo dataset the booking frontend was
    /// developed against: five dates of blocked slots plus one confirmed
    /// reservation
    pub fn with_seed_data(tables: TablePool) -> Self {
        let seeded = Reservation {
            time: "2025-08-23T19:00".to_string(),
            guests: 2,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: Some("123-456-7890".to_string()),
            table_number: 15,
        };

        let store = Self {
            reservations: RwLock::new(vec![seeded]),
            unavailability: DashMap::new(),
            commit_lock: Mutex::new(()),
            tables,
        };

        let seed: [(&str, &[&str]); 5] = [
            ("2025-08-23", &["19:00", "19:30", "20:00", "20:30"]),
            (
                "2025-08-24",
                &["18:00", "18:30", "19:00", "19:30", "20:00", "21:00", "21:30"],
            ),
            ("2025-08-25", &["17:00", "17:30", "18:00", "19:00", "20:00"]),
            (
                "2025-08-26",
                &["18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00"],
            ),
            ("2025-08-28", &["17:30", "18:00", "19:30", "20:00"]),
        ];

        for (date, slots) in seed {
            if let Ok(date) = date.parse::<NaiveDate>() {
                store
                    .unavailability
                    .insert(date, slots.iter().map(|s| s.to_string()).collect());
            }
        }

        store
    }

    /// Tables already committed for an exact reservation time
    async fn tables_taken(&self, time: &str) -> Vec<u32> {
        self.reservations
            .read()
            .await
            .iter()
            .filter(|r| r.time == time)
            .map(|r| r.table_number)
            .collect()
    }
}

#[async_trait]
impl ReservationStore for MemoryStore {
    async fn get(&self, date: NaiveDate) -> StoreResult<Option<UnavailabilityRecord>> {
        Ok(self
            .unavailability
            .get(&date)
            .map(|slots| UnavailabilityRecord::new(date, slots.iter().cloned().collect())))
    }

    async fn all_records(&self) -> StoreResult<Vec<UnavailabilityRecord>> {
        let mut records: Vec<UnavailabilityRecord> = self
            .unavailability
            .iter()
            .map(|entry| UnavailabilityRecord::new(*entry.key(), entry.value().iter().cloned().collect()))
            .collect();
        records.sort_by_key(|record| record.date);
        Ok(records)
    }

    async fn list(&self) -> StoreResult<Vec<Reservation>> {
        Ok(self.reservations.read().await.clone())
    }

    async fn append(&self, reservation: Reservation) -> StoreResult<()> {
        self.reservations.write().await.push(reservation);
        Ok(())
    }

    async fn mark_unavailable(&self, date: NaiveDate, slot: NaiveTime) -> StoreResult<()> {
        self.unavailability
            .entry(date)
            .or_default()
            .insert(format_slot(slot));
        Ok(())
    }

    async fn commit(&self, request: ReservationRequest) -> StoreResult<Reservation> {
        let Some((date, slot)) = split_time(&request.time) else {
            return Err(StoreError::InvalidTime(request.time.clone()));
        };
        let slot_value = format_slot(slot);
        let time = format!("{}T{}", date, slot_value);

        // One commit at a time; the table draw and both writes must see a
        // consistent view.
        let _guard = self.commit_lock.lock().await;

        let taken = self.tables_taken(&time).await;
        let Some(table_number) = self.tables.assign(&taken) else {
            return Err(StoreError::FullyBooked {
                date,
                slot: slot_value,
            });
        };

        let reservation = Reservation {
            time,
            guests: request.guests,
            name: request.name,
            email: request.email,
            phone: request.phone,
            table_number,
        };

        self.reservations.write().await.push(reservation.clone());
        self.unavailability
            .entry(date)
            .or_default()
            .insert(slot_value);

        Ok(reservation)
    }
}
