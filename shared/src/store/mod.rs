use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Guest, Intention, NewGuest, NewIntention};

pub mod dynamo;

/// Access to the `guests` collection.
///
/// Append-only: there is no update or delete.
#[async_trait]
pub trait GuestStore: Send + Sync {
    /// Persists a confirmation and returns the identifier the store assigned.
    async fn add_guest(&self, guest: NewGuest) -> StoreResult<String>;

    /// All confirmations, most recent first.
    async fn get_guests(&self) -> StoreResult<Vec<Guest>>;
}

/// Access to the `intentions` collection.
#[async_trait]
pub trait IntentionStore: Send + Sync {
    async fn add_intention(&self, intention: NewIntention) -> StoreResult<String>;

    /// All decisions, most recent first.
    async fn get_intentions(&self) -> StoreResult<Vec<Intention>>;
}

/// Both collections behind one handle, which is what the router holds.
pub trait RsvpStore: GuestStore + IntentionStore {}

impl<T: GuestStore + IntentionStore> RsvpStore for T {}
