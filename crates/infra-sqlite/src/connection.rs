// SQLite Connection Pool Setup

use despacho_core::error::{AppError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Create the SQLite connection pool with WAL mode and a busy timeout.
///
/// The pool is the single store handle: opened once at startup, shared
/// behind `Arc` everywhere else. Foreign keys are enforced per connection
/// so every pooled connection checks the client/supplier links on insert.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::Storage(e.to_string()))?
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    Ok(pool)
}
