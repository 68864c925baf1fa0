use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

/// Key of the activity directory. Compared byte-for-byte, so "chess club"
/// and "Chess Club" are different activities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityName(String);

impl ActivityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Borrow<str> for ActivityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the catalog as served by `GET /activities`. The name is the
/// map key and is not repeated inside the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    // Informational only; signups are never capped.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants
            .extend(participants.iter().map(|email| (*email).to_string()));
        self.dedup_participants();
        self
    }

    /// Keeps the first occurrence of each email, preserving signup order.
    pub fn dedup_participants(&mut self) {
        let mut seen = HashSet::new();
        self.participants.retain(|email| seen.insert(email.clone()));
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
