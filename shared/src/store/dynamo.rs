use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::Utc;
use log::{debug, error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

use super::{GuestStore, IntentionStore};
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{
    new_record_id, sort_newest_first, Guest, Intention, NewGuest, NewIntention, Timestamped,
};

type Item = HashMap<String, AttributeValue>;

/// Builds a DynamoDB client from the default AWS config chain, pointing at
/// `endpoint_url` when one is configured.
pub async fn create_client(config: &StoreConfig) -> Client {
    let aws_config = aws_config::load_from_env().await;

    match &config.endpoint_url {
        Some(endpoint) => {
            info!("Using DynamoDB endpoint override: {}", endpoint);
            let dynamo_config = aws_sdk_dynamodb::config::Builder::from(&aws_config)
                .endpoint_url(endpoint)
                .build();
            Client::from_conf(dynamo_config)
        }
        None => Client::new(&aws_config),
    }
}

/// Writes one record, refusing to replace an existing item with the same id.
async fn put_record<T: Serialize>(client: &Client, table: &str, record: &T) -> StoreResult<()> {
    let item: Item = serde_dynamo::to_item(record).map_err(|e| {
        error!("Failed to serialize record for table {}: {}", table, e);
        StoreError::write(table, e)
    })?;

    client
        .put_item()
        .table_name(table)
        .set_item(Some(item))
        .condition_expression("attribute_not_exists(id)")
        .send()
        .await
        .map_err(|e| {
            let message = DisplayErrorContext(&e).to_string();
            error!("Failed to put item into table {}: {}", table, message);
            StoreError::write(table, message)
        })?;

    Ok(())
}

/// Reads every record in the table, newest first.
///
/// Scan order is undefined, so ordering happens after all pages are in.
async fn scan_records<T>(client: &Client, table: &str) -> StoreResult<Vec<T>>
where
    T: DeserializeOwned + Timestamped,
{
    let mut items: Vec<Item> = Vec::new();
    let mut start_key: Option<Item> = None;

    loop {
        let output = client
            .scan()
            .table_name(table)
            .set_exclusive_start_key(start_key.take())
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!("Failed to scan table {}: {}", table, message);
                StoreError::read(table, message)
            })?;

        if let Some(page) = output.items {
            debug!("Scanned {} items from table {}", page.len(), table);
            items.extend(page);
        }

        match output.last_evaluated_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => break,
        }
    }

    let mut records: Vec<T> = serde_dynamo::from_items(items).map_err(|e| {
        error!("Failed to deserialize records from table {}: {}", table, e);
        StoreError::read(table, e)
    })?;

    sort_newest_first(&mut records);
    Ok(records)
}

/// Guests collection backed by a DynamoDB table keyed on `id`.
pub struct DynamoGuestStore {
    client: Client,
    table_name: String,
}

impl DynamoGuestStore {
    pub fn with_client_and_table(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl GuestStore for DynamoGuestStore {
    async fn add_guest(&self, guest: NewGuest) -> StoreResult<String> {
        let record = Guest::from_new(new_record_id(), guest, Utc::now());
        put_record(&self.client, &self.table_name, &record).await?;

        info!(
            "Stored guest id={} with {} companion(s)",
            record.id,
            record.companion_count()
        );
        Ok(record.id)
    }

    async fn get_guests(&self) -> StoreResult<Vec<Guest>> {
        scan_records(&self.client, &self.table_name).await
    }
}

/// Intentions collection backed by a DynamoDB table keyed on `id`.
pub struct DynamoIntentionStore {
    client: Client,
    table_name: String,
}

impl DynamoIntentionStore {
    pub fn with_client_and_table(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl IntentionStore for DynamoIntentionStore {
    async fn add_intention(&self, intention: NewIntention) -> StoreResult<String> {
        let record = Intention::from_new(new_record_id(), intention, Utc::now());
        put_record(&self.client, &self.table_name, &record).await?;

        info!(
            "Stored intention id={} will_attend={}",
            record.id, record.will_attend
        );
        Ok(record.id)
    }

    async fn get_intentions(&self) -> StoreResult<Vec<Intention>> {
        scan_records(&self.client, &self.table_name).await
    }
}

/// Both DynamoDB collections behind a single handle.
pub struct DynamoRsvpStore {
    guests: DynamoGuestStore,
    intentions: DynamoIntentionStore,
}

impl DynamoRsvpStore {
    pub async fn new() -> Self {
        let config = StoreConfig::from_env();
        let client = create_client(&config).await;
        Self::with_client(client, &config)
    }

    pub fn with_client(client: Client, config: &StoreConfig) -> Self {
        Self {
            guests: DynamoGuestStore::with_client_and_table(
                client.clone(),
                config.guests_table.clone(),
            ),
            intentions: DynamoIntentionStore::with_client_and_table(
                client,
                config.intentions_table.clone(),
            ),
        }
    }
}

#[async_trait]
impl GuestStore for DynamoRsvpStore {
    async fn add_guest(&self, guest: NewGuest) -> StoreResult<String> {
        self.guests.add_guest(guest).await
    }

    async fn get_guests(&self) -> StoreResult<Vec<Guest>> {
        self.guests.get_guests().await
    }
}

#[async_trait]
impl IntentionStore for DynamoRsvpStore {
    async fn add_intention(&self, intention: NewIntention) -> StoreResult<String> {
        self.intentions.add_intention(intention).await
    }

    async fn get_intentions(&self) -> StoreResult<Vec<Intention>> {
        self.intentions.get_intentions().await
    }
}
