use sqlx::SqlitePool;

use crate::models::ActivityRow;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  name TEXT PRIMARY KEY,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL,
  participants TEXT NOT NULL DEFAULT '[]'
)
"#;

pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_ACTIVITIES).execute(pool).await?;
    Ok(())
}

const SQL_COUNT_ACTIVITIES: &str = "SELECT COUNT(*) FROM activities";

pub async fn count_activities(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar(SQL_COUNT_ACTIVITIES).fetch_one(pool).await
}

const SQL_INSERT_IF_ABSENT: &str = r#"
INSERT OR IGNORE INTO activities (
  name,
  description,
  schedule,
  max_participants,
  participants
) VALUES (?, ?, ?, ?, ?)
"#;

pub async fn insert_if_absent(
    pool: &SqlitePool,
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: i64,
    participants_json: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_IF_ABSENT)
        .bind(name)
        .bind(description)
        .bind(schedule)
        .bind(max_participants)
        .bind(participants_json)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_LIST_ALL: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants,
  participants
FROM activities
ORDER BY name ASC
"#;

pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ALL)
        .fetch_all(pool)
        .await
}

const SQL_FIND_BY_NAME: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants,
  participants
FROM activities
WHERE name = ?
"#;

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_FIND_BY_NAME)
        .bind(name)
        .fetch_optional(pool)
        .await
}

// Roster containment across the whole catalog: the activity (if any) that
// already holds this email.
const SQL_FIND_WITH_PARTICIPANT: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants,
  participants
FROM activities
WHERE EXISTS (
  SELECT 1 FROM json_each(activities.participants)
  WHERE json_each.value = ?
)
LIMIT 1
"#;

pub async fn find_with_participant(
    pool: &SqlitePool,
    email: &str,
) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_FIND_WITH_PARTICIPANT)
        .bind(email)
        .fetch_optional(pool)
        .await
}

// '$[#]' appends at the end of the JSON array; one atomic statement.
const SQL_APPEND_PARTICIPANT: &str = r#"
UPDATE activities
SET participants = json_insert(participants, '$[#]', ?)
WHERE name = ?
"#;

pub async fn append_participant(pool: &SqlitePool, name: &str, email: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_APPEND_PARTICIPANT)
        .bind(email)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

// Rebuilds the roster without the email in one atomic statement; json_each
// walks the array in order, so remaining entries keep their signup order.
const SQL_REMOVE_PARTICIPANT: &str = r#"
UPDATE activities
SET participants = (
  SELECT json_group_array(je.value)
  FROM json_each(activities.participants) AS je
  WHERE je.value <> ?
)
WHERE name = ?
"#;

pub async fn remove_participant(pool: &SqlitePool, name: &str, email: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_REMOVE_PARTICIPANT)
        .bind(email)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
