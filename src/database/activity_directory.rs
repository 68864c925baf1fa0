use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::database::seed;
use crate::error::DirectoryError;
use crate::models::{Activity, ActivityName};

/// Handle shared by every request handler.
pub type SharedDirectory = Arc<RwLock<ActivityDirectory>>;

/// In-memory catalog of activities keyed by name, kept in seed order. The
/// key set is fixed once built; only participant lists change.
#[derive(Debug, Clone, Default)]
pub struct ActivityDirectory {
    activities: IndexMap<ActivityName, Activity>,
}

impl ActivityDirectory {
    /// Later entries win when a name repeats. Repeated emails within one
    /// record collapse to their first occurrence.
    pub fn from_records(records: impl IntoIterator<Item = (ActivityName, Activity)>) -> Self {
        Self {
            activities: records
                .into_iter()
                .map(|(name, mut activity)| {
                    activity.dedup_participants();
                    (name, activity)
                })
                .collect(),
        }
    }

    pub fn seeded() -> Self {
        Self::from_records(seed::mergington_activities())
    }

    pub fn into_shared(self) -> SharedDirectory {
        Arc::new(RwLock::new(self))
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn list(&self) -> IndexMap<ActivityName, Activity> {
        self.activities.clone()
    }

    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotRegistered)?;

        activity.participants.remove(position);
        Ok(())
    }
}
