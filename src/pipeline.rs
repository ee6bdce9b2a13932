use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::{models::Registration, store::TIMESTAMP_FORMAT};

/// Counts shown in the listing page stats grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub clubs: usize,
    pub shown: usize,
}

/// Concatenate stored and transient records (stored first), drop later
/// records whose email was already seen, then order newest first.
///
/// The sort is stable, so records sharing a timestamp keep their relative
/// order from the merge.
pub fn merge_unique(stored: &[Registration], transient: &[Registration]) -> Vec<Registration> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Registration> = stored
        .iter()
        .chain(transient.iter())
        .filter(|r| seen.insert(r.email.clone()))
        .cloned()
        .collect();

    unique.sort_by(|a, b| parse_timestamp(&b.timestamp).cmp(&parse_timestamp(&a.timestamp)));
    unique
}

/// Apply the optional search term (case-insensitive substring over name,
/// email, and club) and the optional exact club filter.
pub fn apply_filters(
    records: &[Registration],
    search: Option<&str>,
    club: Option<&str>,
) -> Vec<Registration> {
    records
        .iter()
        .filter(|r| search.is_none_or(|term| matches_search(r, term)))
        .filter(|r| club.is_none_or(|club| r.club == club))
        .cloned()
        .collect()
}

/// Distinct club names, alphabetically sorted, for the filter dropdown.
pub fn distinct_clubs(records: &[Registration]) -> Vec<String> {
    let mut clubs: Vec<String> = records
        .iter()
        .map(|r| r.club.clone())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    clubs.sort();
    clubs
}

fn matches_search(record: &Registration, term: &str) -> bool {
    let term = term.to_lowercase();

    record.name.to_lowercase().contains(&term)
        || record.email.to_lowercase().contains(&term)
        || record.club.to_lowercase().contains(&term)
}

fn parse_timestamp(timestamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).unwrap_or(NaiveDateTime::MIN)
}
