use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::activities_repo;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

pub async fn list_activities(
    pool: &SqlitePool,
) -> Result<BTreeMap<String, ActivityDetails>, AppError> {
    let rows = activities_repo::list_all(pool).await?;

    let mut activities = BTreeMap::new();
    for row in rows {
        let participants = parse_participants(&row.participants);
        activities.insert(
            row.name,
            ActivityDetails {
                description: row.description,
                schedule: row.schedule,
                max_participants: row.max_participants,
                participants,
            },
        );
    }

    Ok(activities)
}

pub async fn signup(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, AppError> {
    if email.is_empty() {
        return Err(AppError::EmailRequired);
    }

    // One activity per student, checked across the whole catalog.
    if activities_repo::find_with_participant(pool, email)
        .await?
        .is_some()
    {
        return Err(AppError::AlreadySignedUp);
    }

    if activities_repo::find_by_name(pool, activity_name)
        .await?
        .is_none()
    {
        return Err(AppError::ActivityNotFound);
    }

    activities_repo::append_participant(pool, activity_name, email).await?;
    Ok(format!("Signed up {email} for {activity_name}"))
}

pub async fn withdraw(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, AppError> {
    if email.is_empty() {
        return Err(AppError::EmailRequired);
    }

    let Some(activity) = activities_repo::find_by_name(pool, activity_name).await? else {
        return Err(AppError::ActivityNotFound);
    };

    let roster = parse_participants(&activity.participants);
    if !roster.iter().any(|p| p == email) {
        return Err(AppError::ParticipantNotFound);
    }

    activities_repo::remove_participant(pool, activity_name, email).await?;
    Ok(format!("Removed {email} from {activity_name}"))
}

fn parse_participants(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed_service;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn seeded_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        activities_repo::ensure_schema(&pool).await.unwrap();
        seed_service::seed_if_empty(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn lists_every_seeded_activity() {
        let pool = seeded_pool().await;

        let activities = list_activities(&pool).await.unwrap();

        assert_eq!(activities.len(), 9);
        let chess = &activities["Chess Club"];
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn signup_appends_in_order() {
        let pool = seeded_pool().await;

        signup(&pool, "Art Workshop", "ana@mergington.edu")
            .await
            .unwrap();
        signup(&pool, "Art Workshop", "ben@mergington.edu")
            .await
            .unwrap();

        let activities = list_activities(&pool).await.unwrap();
        assert_eq!(
            activities["Art Workshop"].participants,
            vec!["ana@mergington.edu", "ben@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn signup_requires_email() {
        let pool = seeded_pool().await;

        let err = signup(&pool, "Chess Club", "").await.unwrap_err();
        assert!(matches!(err, AppError::EmailRequired));
    }

    #[tokio::test]
    async fn signup_rejects_email_enrolled_anywhere() {
        let pool = seeded_pool().await;

        // michael@ is seeded into Chess Club; every other activity must
        // refuse him too.
        let err = signup(&pool, "Drama Club", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadySignedUp));
    }

    #[tokio::test]
    async fn signup_unknown_activity_is_not_found() {
        let pool = seeded_pool().await;

        let err = signup(&pool, "Knitting Circle", "a@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ActivityNotFound));
    }

    #[tokio::test]
    async fn withdraw_unknown_activity_is_not_found() {
        let pool = seeded_pool().await;

        let err = withdraw(&pool, "Knitting Circle", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ActivityNotFound));
    }

    #[tokio::test]
    async fn withdraw_requires_membership() {
        let pool = seeded_pool().await;

        let err = withdraw(&pool, "Chess Club", "stranger@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ParticipantNotFound));
    }

    #[tokio::test]
    async fn withdraw_reverses_signup() {
        let pool = seeded_pool().await;
        let before = list_activities(&pool).await.unwrap()["Chess Club"]
            .participants
            .clone();

        signup(&pool, "Chess Club", "new@mergington.edu")
            .await
            .unwrap();
        withdraw(&pool, "Chess Club", "new@mergington.edu")
            .await
            .unwrap();

        let after = list_activities(&pool).await.unwrap()["Chess Club"]
            .participants
            .clone();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn withdraw_frees_email_for_new_signup() {
        let pool = seeded_pool().await;

        withdraw(&pool, "Chess Club", "michael@mergington.edu")
            .await
            .unwrap();
        let message = signup(&pool, "Debate Team", "michael@mergington.edu")
            .await
            .unwrap();
        assert_eq!(message, "Signed up michael@mergington.edu for Debate Team");

        let activities = list_activities(&pool).await.unwrap();
        assert!(!activities["Chess Club"]
            .participants
            .iter()
            .any(|p| p == "michael@mergington.edu"));
        assert!(activities["Debate Team"]
            .participants
            .iter()
            .any(|p| p == "michael@mergington.edu"));
    }

    #[tokio::test]
    async fn removal_keeps_other_participants_in_order() {
        let pool = seeded_pool().await;

        withdraw(&pool, "Chess Club", "michael@mergington.edu")
            .await
            .unwrap();

        let activities = list_activities(&pool).await.unwrap();
        assert_eq!(
            activities["Chess Club"].participants,
            vec!["daniel@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn withdraw_requires_email() {
        let pool = seeded_pool().await;

        let err = withdraw(&pool, "Chess Club", "").await.unwrap_err();
        assert!(matches!(err, AppError::EmailRequired));
    }
}
