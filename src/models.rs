use serde::{Deserialize, Serialize};

/// One validated, persisted club-signup record.
///
/// All text fields hold the display-safe (HTML-escaped) form; records are
/// appended once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub name: String,
    pub email: String,
    pub club: String,
    pub phone: String,
    pub interests: Vec<String>,
    pub experience: String,
    pub timestamp: String,
}

/// A validated, sanitized registration that has not been persisted yet.
/// The store stamps `id` and `timestamp` at append time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub club: String,
    pub phone: String,
    pub interests: Vec<String>,
    pub experience: String,
}

/// The raw form payload, before any validation.
///
/// `interests[]` is submitted as a repeated key, one entry per checked box.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub club: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "interests[]", default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub experience: String,
}

impl RawSubmission {
    /// Whitespace-trim every text field, matching how the fields are
    /// extracted before validation.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            club: self.club.trim().to_string(),
            phone: self.phone.trim().to_string(),
            interests: self.interests,
            experience: self.experience.trim().to_string(),
        }
    }
}
