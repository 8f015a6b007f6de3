use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::ActivityParticipantsRow;

const SQL_LIST_ALL_PARTICIPANTS: &str = r#"
SELECT
  id,
  activity_name,
  email
FROM activity_participants
ORDER BY id ASC
"#;

pub async fn list_all_participants(
    pool: &SqlitePool,
) -> sqlx::Result<Vec<ActivityParticipantsRow>> {
    sqlx::query_as::<_, ActivityParticipantsRow>(SQL_LIST_ALL_PARTICIPANTS)
        .fetch_all(pool)
        .await
}

const SQL_LIST_PARTICIPANTS_FOR_ACTIVITY: &str = r#"
SELECT
  id,
  activity_name,
  email
FROM activity_participants
WHERE activity_name = ?1
ORDER BY id ASC
"#;

pub async fn list_participants<'e, E>(
    executor: E,
    activity_name: &str,
) -> sqlx::Result<Vec<ActivityParticipantsRow>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, ActivityParticipantsRow>(SQL_LIST_PARTICIPANTS_FOR_ACTIVITY)
        .bind(activity_name)
        .fetch_all(executor)
        .await
}

const SQL_COUNT_PARTICIPANTS: &str = r#"
SELECT COUNT(*)
FROM activity_participants
WHERE activity_name = ?1
"#;

pub async fn count_participants<'e, E>(executor: E, activity_name: &str) -> sqlx::Result<i64>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>(SQL_COUNT_PARTICIPANTS)
        .bind(activity_name)
        .fetch_one(executor)
        .await
}

const SQL_IS_REGISTERED: &str = r#"
SELECT EXISTS (
  SELECT 1
  FROM activity_participants
  WHERE activity_name = ?1
    AND email = ?2
)
"#;

pub async fn is_registered<'e, E>(
    executor: E,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<bool>
where
    E: SqliteExecutor<'e>,
{
    let found = sqlx::query_scalar::<_, i64>(SQL_IS_REGISTERED)
        .bind(activity_name)
        .bind(email)
        .fetch_one(executor)
        .await?;
    Ok(found == 1)
}

const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT INTO activity_participants (
  activity_name,
  email
) VALUES (?, ?)
"#;

pub async fn insert_participant<'e, E>(
    executor: E,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64>
where
    E: SqliteExecutor<'e>,
{
    let res = sqlx::query(SQL_INSERT_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_PARTICIPANT: &str = r#"
DELETE FROM activity_participants
WHERE activity_name = ?
  AND email = ?
"#;

pub async fn delete_participant<'e, E>(
    executor: E,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64>
where
    E: SqliteExecutor<'e>,
{
    let res = sqlx::query(SQL_DELETE_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(executor)
        .await?;
    Ok(res.rows_affected())
}
