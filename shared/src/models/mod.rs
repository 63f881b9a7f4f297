use chrono::{DateTime, Utc};

mod guest;
mod intention;

pub use guest::{Guest, NewGuest};
pub use intention::{Intention, NewIntention};

/// A stored record that can be ordered by its write time.
pub trait Timestamped {
    fn id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

/// Orders records newest first. Records written at the same instant fall back
/// to ascending id so the order is stable across reads.
pub fn sort_newest_first<T: Timestamped>(records: &mut [T]) {
    records.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
}

/// Fresh identifier for a record about to be written.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
