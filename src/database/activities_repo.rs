use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::ActivitiesRow;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants
FROM activities
ORDER BY rowid ASC
"#;

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<Vec<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(pool)
        .await
}

// Exact match: SQLite `=` on TEXT is case-sensitive under the default BINARY collation.
const SQL_LOAD_ACTIVITY_BY_NAME: &str = r#"
SELECT
  name,
  description,
  schedule,
  max_participants
FROM activities
WHERE name = ?1
LIMIT 1
"#;

pub async fn load_activity_by_name<'e, E>(
    executor: E,
    name: &str,
) -> sqlx::Result<Option<ActivitiesRow>>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, ActivitiesRow>(SQL_LOAD_ACTIVITY_BY_NAME)
        .bind(name)
        .fetch_optional(executor)
        .await
}
