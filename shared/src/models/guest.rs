use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::Timestamped;

/// Input for a new attendance confirmation.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewGuest {
    pub name: String,
    pub has_companions: bool,
    #[serde(default)]
    pub companions: Option<Vec<String>>,
}

/// A stored attendance confirmation.
///
/// `companions` is either absent or holds at least one non-blank name; an
/// empty list is never written or returned.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub name: String,
    pub has_companions: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "companions_or_absent"
    )]
    pub companions: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    /// Shapes an input into the record that gets persisted.
    ///
    /// Companion names are trimmed and blanks dropped. The list is kept only
    /// when `has_companions` is set and something survives the cleanup.
    pub fn from_new(id: String, input: NewGuest, created_at: DateTime<Utc>) -> Self {
        let companions = if input.has_companions {
            input.companions.and_then(clean_companions)
        } else {
            None
        };

        Guest {
            id,
            name: input.name,
            has_companions: input.has_companions,
            companions,
            created_at,
        }
    }

    pub fn companion_count(&self) -> usize {
        self.companions.as_ref().map_or(0, Vec::len)
    }
}

impl Timestamped for Guest {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn clean_companions(names: Vec<String>) -> Option<Vec<String>> {
    let cleaned: Vec<String> = names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

// Records written by other clients may carry an empty list.
fn companions_or_absent<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(names.and_then(clean_companions))
}
