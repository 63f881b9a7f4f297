use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::models::{new_record_id, sort_newest_first, Intention, NewIntention};
use crate::store::IntentionStore;

const COLLECTION: &str = "intentions";

/// In-memory intentions collection with switchable failures.
#[derive(Default)]
pub struct MockIntentionStore {
    intentions: Mutex<Vec<Intention>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl MockIntentionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn insert_record(&self, intention: Intention) {
        self.intentions.lock().unwrap().push(intention);
    }

    pub fn records(&self) -> Vec<Intention> {
        self.intentions.lock().unwrap().clone()
    }
}

#[async_trait]
impl IntentionStore for MockIntentionStore {
    async fn add_intention(&self, intention: NewIntention) -> StoreResult<String> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::write(COLLECTION, "mock store unavailable"));
        }

        let record = Intention::from_new(new_record_id(), intention, Utc::now());
        let id = record.id.clone();
        self.intentions.lock().unwrap().push(record);
        Ok(id)
    }

    async fn get_intentions(&self) -> StoreResult<Vec<Intention>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::read(COLLECTION, "mock store unavailable"));
        }

        let mut intentions = self.records();
        sort_newest_first(&mut intentions);
        Ok(intentions)
    }
}
