use indexmap::IndexMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::database::SharedDirectory;
use crate::error::DirectoryError;
use crate::models::{Activity, ActivityName};

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageView {
    pub message: String,
}

pub async fn list_activities(directory: &SharedDirectory) -> IndexMap<ActivityName, Activity> {
    directory.read().await.list()
}

pub async fn signup(
    directory: &SharedDirectory,
    activity_name: &str,
    email: &str,
) -> Result<MessageView, DirectoryError> {
    // Write lock spans the duplicate check and the append.
    let result = directory.write().await.signup(activity_name, email);

    match result {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "signup_ok");
            Ok(MessageView {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup_rejected");
            Err(e)
        }
    }
}

pub async fn unregister(
    directory: &SharedDirectory,
    activity_name: &str,
    email: &str,
) -> Result<MessageView, DirectoryError> {
    let result = directory.write().await.unregister(activity_name, email);

    match result {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "unregister_ok");
            Ok(MessageView {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister_rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ActivityDirectory;

    #[tokio::test]
    async fn concurrent_duplicate_signups_admit_one() {
        let directory = ActivityDirectory::seeded().into_shared();

        let mut handles = Vec::new();
        for _ in 0..16 {
            let directory = directory.clone();
            handles.push(tokio::spawn(async move {
                signup(&directory, "Tennis", "race@mergington.edu").await
            }));
        }

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 1);

        let activities = list_activities(&directory).await;
        let tennis = &activities["Tennis"];
        assert_eq!(
            tennis
                .participants
                .iter()
                .filter(|p| p.as_str() == "race@mergington.edu")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn messages_reference_email_and_activity() {
        let directory = ActivityDirectory::seeded().into_shared();

        let view = signup(&directory, "Art Club", "new@mergington.edu")
            .await
            .unwrap();
        assert_eq!(view.message, "Signed up new@mergington.edu for Art Club");

        let view = unregister(&directory, "Art Club", "new@mergington.edu")
            .await
            .unwrap();
        assert_eq!(view.message, "Unregistered new@mergington.edu from Art Club");
    }

    #[tokio::test]
    async fn list_is_a_snapshot() {
        let directory = ActivityDirectory::seeded().into_shared();
        let before = list_activities(&directory).await;

        signup(&directory, "Debate Team", "late@mergington.edu")
            .await
            .unwrap();

        assert!(!before["Debate Team"].has_participant("late@mergington.edu"));
        assert!(list_activities(&directory).await["Debate Team"]
            .has_participant("late@mergington.edu"));
    }
}
