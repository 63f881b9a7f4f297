use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Timestamped;

/// Input for a yes/no attendance decision.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewIntention {
    pub name: String,
    pub will_attend: bool,
}

/// A stored attendance decision.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Intention {
    pub id: String,
    pub name: String,
    pub will_attend: bool,
    pub created_at: DateTime<Utc>,
}

impl Intention {
    pub fn from_new(id: String, input: NewIntention, created_at: DateTime<Utc>) -> Self {
        Intention {
            id,
            name: input.name,
            will_attend: input.will_attend,
            created_at,
        }
    }
}

impl Timestamped for Intention {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
