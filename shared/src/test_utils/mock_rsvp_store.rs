use async_trait::async_trait;

use super::mock_guest_store::MockGuestStore;
use super::mock_intention_store::MockIntentionStore;
use crate::error::StoreResult;
use crate::models::{Guest, Intention, NewGuest, NewIntention};
use crate::store::{GuestStore, IntentionStore};

/// Both in-memory collections behind one handle, mirroring `DynamoRsvpStore`.
#[derive(Default)]
pub struct MockRsvpStore {
    pub guests: MockGuestStore,
    pub intentions: MockIntentionStore,
}

impl MockRsvpStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GuestStore for MockRsvpStore {
    async fn add_guest(&self, guest: NewGuest) -> StoreResult<String> {
        self.guests.add_guest(guest).await
    }

    async fn get_guests(&self) -> StoreResult<Vec<Guest>> {
        self.guests.get_guests().await
    }
}

#[async_trait]
impl IntentionStore for MockRsvpStore {
    async fn add_intention(&self, intention: NewIntention) -> StoreResult<String> {
        self.intentions.add_intention(intention).await
    }

    async fn get_intentions(&self) -> StoreResult<Vec<Intention>> {
        self.intentions.get_intentions().await
    }
}
