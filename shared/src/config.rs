use log::info;
use std::env;

pub const DEFAULT_GUESTS_TABLE: &str = "guests";
pub const DEFAULT_INTENTIONS_TABLE: &str = "intentions";

/// Where the two RSVP collections live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub guests_table: String,
    pub intentions_table: String,
    /// Endpoint override, set when running against DynamoDB Local.
    pub endpoint_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            guests_table: DEFAULT_GUESTS_TABLE.to_string(),
            intentions_table: DEFAULT_INTENTIONS_TABLE.to_string(),
            endpoint_url: None,
        }
    }
}

impl StoreConfig {
    /// Reads `GUESTS_TABLE`, `INTENTIONS_TABLE` and `DYNAMODB_ENDPOINT`,
    /// falling back to the defaults for anything unset or empty.
    pub fn from_env() -> Self {
        let config = Self {
            guests_table: var_or("GUESTS_TABLE", DEFAULT_GUESTS_TABLE),
            intentions_table: var_or("INTENTIONS_TABLE", DEFAULT_INTENTIONS_TABLE),
            endpoint_url: non_empty_var("DYNAMODB_ENDPOINT"),
        };
        info!(
            "Store config: guests_table={}, intentions_table={}, endpoint={:?}",
            config.guests_table, config.intentions_table, config.endpoint_url
        );
        config
    }
}

/// Whether routes should be mounted without the `/Prod` stage prefix.
pub fn remove_base_path() -> bool {
    env::var("REMOVE_BASE_PATH")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn var_or(key: &str, default: &str) -> String {
    non_empty_var(key).unwrap_or_else(|| {
        info!("{} not set, using default: {}", key, default);
        default.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_collection_names() {
        let config = StoreConfig::default();
        assert_eq!(config.guests_table, "guests");
        assert_eq!(config.intentions_table, "intentions");
        assert!(config.endpoint_url.is_none());
    }
}
