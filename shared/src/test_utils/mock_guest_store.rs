use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::models::{new_record_id, sort_newest_first, Guest, NewGuest};
use crate::store::GuestStore;

const COLLECTION: &str = "guests";

/// In-memory guests collection with switchable failures.
#[derive(Default)]
pub struct MockGuestStore {
    guests: Mutex<Vec<Guest>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl MockGuestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Seeds a fully-formed record, bypassing the write path.
    pub fn insert_record(&self, guest: Guest) {
        self.guests.lock().unwrap().push(guest);
    }

    /// Raw stored records in insertion order.
    pub fn records(&self) -> Vec<Guest> {
        self.guests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GuestStore for MockGuestStore {
    async fn add_guest(&self, guest: NewGuest) -> StoreResult<String> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::write(COLLECTION, "mock store unavailable"));
        }

        let record = Guest::from_new(new_record_id(), guest, Utc::now());
        let id = record.id.clone();
        self.guests.lock().unwrap().push(record);
        Ok(id)
    }

    async fn get_guests(&self) -> StoreResult<Vec<Guest>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::read(COLLECTION, "mock store unavailable"));
        }

        let mut guests = self.records();
        sort_newest_first(&mut guests);
        Ok(guests)
    }
}
