use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Local;
use tracing::warn;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{NewRegistration, Registration},
};

/// Format of the `timestamp` field on every persisted record.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flat-file record store: one pretty-printed JSON array, rewritten
/// wholesale on every append. Insertion order is preserved on disk.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection. A missing or unparsable file means
    /// "no data yet" and never fails the caller.
    pub fn load_all(&self) -> Vec<Registration> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring unparsable record file {}: {e}", self.path.display());
            Vec::new()
        })
    }

    /// Stamp id and timestamp, append, and rewrite the whole file.
    /// Write failures are surfaced to the caller.
    pub fn append(&self, new: NewRegistration) -> Result<Registration, AppError> {
        let record = Registration {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            email: new.email,
            club: new.club,
            phone: new.phone,
            interests: new.interests,
            experience: new.experience,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };

        let mut all = self.load_all();
        all.push(record.clone());
        self.write(&all)?;

        Ok(record)
    }

    fn write(&self, records: &[Registration]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(records)?;

        // Write a sibling first so a crash mid-write cannot truncate the
        // live file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::tempdir;

    fn new_record(name: &str, email: &str) -> NewRegistration {
        NewRegistration {
            name: name.to_string(),
            email: email.to_string(),
            club: "Art Club".to_string(),
            phone: String::new(),
            interests: vec!["Art".to_string()],
            experience: String::new(),
        }
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("registrations.json"));

        assert!(store.load_all().is_empty());
    }

    #[test]
    fn corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("registrations.json");
        fs::write(&path, "{ not json").unwrap();

        let store = RecordStore::new(&path);
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn append_stamps_and_persists() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("registrations.json"));

        let record = store.append(new_record("Al", "al@x.com")).unwrap();
        assert!(!record.id.is_empty());
        NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT).unwrap();

        let all = store.load_all();
        assert_eq!(all, vec![record]);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("registrations.json"));

        store.append(new_record("Al", "al@x.com")).unwrap();
        store.append(new_record("Bea", "bea@x.com")).unwrap();

        let all = store.load_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Al");
        assert_eq!(all[1].name, "Bea");
    }

    #[test]
    fn load_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("registrations.json"));
        store.append(new_record("Al", "al@x.com")).unwrap();

        assert_eq!(store.load_all(), store.load_all());
    }

    #[test]
    fn file_is_a_pretty_json_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("registrations.json");
        let store = RecordStore::new(&path);
        store.append(new_record("Al", "al@x.com")).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &parsed.as_array().unwrap()[0];
        for key in [
            "id",
            "name",
            "email",
            "club",
            "phone",
            "interests",
            "experience",
            "timestamp",
        ] {
            assert!(first.get(key).is_some(), "missing key {key}");
        }
    }
}
