//! Aggregates the list screens show. Everything here is a pure function of
//! the records passed in.

use serde::Serialize;

use crate::models::{Guest, Intention};

/// Intentions where the visitor said they will not attend, in input order.
pub fn declined(intentions: &[Intention]) -> Vec<Intention> {
    intentions
        .iter()
        .filter(|intention| !intention.will_attend)
        .cloned()
        .collect()
}

/// The guest plus everyone they listed.
pub fn party_size(guest: &Guest) -> usize {
    1 + guest.companion_count()
}

pub fn total_people(guests: &[Guest]) -> usize {
    guests.iter().map(party_size).sum()
}

/// "1 person" / "3 people".
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuestEntry {
    #[serde(flatten)]
    pub guest: Guest,
    pub party_size: usize,
}

/// Everything the confirmed list renders.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmedSummary {
    pub confirmations: usize,
    pub confirmations_label: String,
    pub total_people: usize,
    pub total_people_label: String,
    pub guests: Vec<GuestEntry>,
}

impl ConfirmedSummary {
    pub fn from_guests(guests: Vec<Guest>) -> Self {
        let total_people = total_people(&guests);
        let guests: Vec<GuestEntry> = guests
            .into_iter()
            .map(|guest| GuestEntry {
                party_size: party_size(&guest),
                guest,
            })
            .collect();

        Self {
            confirmations: guests.len(),
            confirmations_label: count_label(guests.len(), "confirmation", "confirmations"),
            total_people,
            total_people_label: count_label(total_people, "person", "people"),
            guests,
        }
    }
}

/// Everything the declined list renders.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeclinedSummary {
    pub count: usize,
    pub label: String,
    pub absences: Vec<Intention>,
}

impl DeclinedSummary {
    pub fn from_intentions(intentions: &[Intention]) -> Self {
        let absences = declined(intentions);
        Self {
            count: absences.len(),
            label: count_label(absences.len(), "absence", "absences"),
            absences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn guest(id: &str, companions: Option<Vec<&str>>) -> Guest {
        Guest {
            id: id.to_string(),
            name: format!("guest-{}", id),
            has_companions: companions.is_some(),
            companions: companions.map(|c| c.into_iter().map(String::from).collect()),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    fn intention(id: &str, will_attend: bool) -> Intention {
        Intention {
            id: id.to_string(),
            name: format!("visitor-{}", id),
            will_attend,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn total_people_counts_guests_and_companions() {
        let guests = vec![
            guest("1", None),
            guest("2", Some(vec!["Bia", "Caio"])),
            guest("3", Some(vec!["Duda"])),
        ];
        assert_eq!(total_people(&guests), 6);
    }

    #[test]
    fn total_people_is_zero_without_guests() {
        assert_eq!(total_people(&[]), 0);
    }

    #[test]
    fn declined_keeps_only_negative_answers_in_order() {
        let intentions = vec![
            intention("a", false),
            intention("b", true),
            intention("c", false),
            intention("d", true),
        ];

        let ids: Vec<_> = declined(&intentions).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn count_label_picks_singular_for_one() {
        assert_eq!(count_label(1, "person", "people"), "1 person");
        assert_eq!(count_label(0, "person", "people"), "0 people");
        assert_eq!(count_label(4, "person", "people"), "4 people");
    }

    #[test]
    fn confirmed_summary_carries_party_sizes() {
        let summary =
            ConfirmedSummary::from_guests(vec![guest("1", Some(vec!["Bia"])), guest("2", None)]);

        assert_eq!(summary.confirmations, 2);
        assert_eq!(summary.total_people, 3);
        assert_eq!(summary.confirmations_label, "2 confirmations");
        assert_eq!(summary.total_people_label, "3 people");
        assert_eq!(summary.guests[0].party_size, 2);
        assert_eq!(summary.guests[1].party_size, 1);
    }

    #[test]
    fn declined_summary_counts_absences() {
        let summary = DeclinedSummary::from_intentions(&[intention("a", true)]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.label, "0 absences");
        assert!(summary.absences.is_empty());
    }
}
