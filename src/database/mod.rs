use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub mod activities_repo;
pub mod activity_participants_repo;
pub mod schema;
pub mod seed;

/// Opens the activity store, creates the schema and loads the seed roster.
///
/// An in-memory SQLite database only exists inside the connection that
/// created it, so the pool holds exactly one connection and never recycles it.
/// This also serializes every read and write against the store.
pub async fn connect(database_url: &str) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;

    schema::create_tables(&pool).await?;
    seed::seed_activities(&pool).await?;
    Ok(pool)
}

/// Fresh seeded in-memory store.
pub async fn connect_in_memory() -> sqlx::Result<SqlitePool> {
    connect("sqlite::memory:").await
}
