use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use log::debug;
use std::collections::HashMap;
use std::env;

use crate::config::StoreConfig;
use crate::store::dynamo::create_client;

const LOCAL_ENDPOINT: &str = "http://localhost:8000";

/// Tests hit DynamoDB Local only when `USE_DYNAMODB=true`.
pub fn use_dynamodb() -> bool {
    env::var("USE_DYNAMODB")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
}

pub async fn create_dynamo_client() -> Client {
    let endpoint = env::var("DYNAMODB_ENDPOINT").unwrap_or_else(|_| LOCAL_ENDPOINT.to_string());
    let config = StoreConfig {
        endpoint_url: Some(endpoint),
        ..StoreConfig::default()
    };
    create_client(&config).await
}

/// Creates a table keyed on string `id`, the shape both collections use.
pub async fn create_record_table(client: &Client, table_name: &str) -> Result<(), String> {
    debug!("Creating test table {}", table_name);

    client
        .create_table()
        .table_name(table_name)
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name("id")
                .attribute_type(ScalarAttributeType::S)
                .build()
                .map_err(|e| e.to_string())?,
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name("id")
                .key_type(KeyType::Hash)
                .build()
                .map_err(|e| e.to_string())?,
        )
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .map_err(|e| DisplayErrorContext(&e).to_string())?;

    Ok(())
}

/// Deletes every item in the table, following scan pages to the end.
pub async fn clear_dynamo_table(client: &Client, table_name: &str) -> Result<(), String> {
    let mut start_key: Option<HashMap<String, AttributeValue>> = None;

    loop {
        let output = client
            .scan()
            .table_name(table_name)
            .set_exclusive_start_key(start_key.take())
            .send()
            .await
            .map_err(|e| DisplayErrorContext(&e).to_string())?;

        for item in output.items.unwrap_or_default() {
            if let Some(id) = item.get("id") {
                client
                    .delete_item()
                    .table_name(table_name)
                    .key("id", id.clone())
                    .send()
                    .await
                    .map_err(|e| DisplayErrorContext(&e).to_string())?;
            }
        }

        match output.last_evaluated_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => break,
        }
    }

    Ok(())
}
