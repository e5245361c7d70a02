use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

pub type Db = SqlitePool;

/// Embedded schema migrations, applied at startup and by the test helpers.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Open the SQLite database at `path`.
///
/// The file must already exist: player profiles and batting statistics are
/// provisioned out of band, and creating an empty database here would only
/// mask a missing download.
pub async fn connect(path: &Path, max_connections: u32) -> anyhow::Result<Db> {
    if !path.exists() {
        anyhow::bail!(
            "database file {} not found; download the stats database first (see README.md)",
            path.display()
        );
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(false)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("failed to open database file {}", path.display()))?;

    Ok(pool)
}

/// In-memory database with the schema applied, for tests.
///
/// Pinned to a single connection: each in-memory connection is its own
/// database, and the database lives only as long as that connection.
pub async fn connect_in_memory() -> anyhow::Result<Db> {
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    MIGRATOR.run(&pool).await?;

    Ok(pool)
}
