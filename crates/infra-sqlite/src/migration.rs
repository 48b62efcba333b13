// Migration Runner

use despacho_core::error::Result;
use sqlx::SqlitePool;
use tracing::info;

use crate::dispatch_store::map_sqlx_error;

/// Run database migrations.
///
/// Idempotent, and tolerant of databases created by the legacy tool:
/// those have the dispatch tables but no version tracking, so they report
/// version 0 and every step must be safe against pre-existing objects.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations...");

    // Check if schema_version table exists
    let table_exists: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='schema_version'",
    )
    .fetch_one(pool)
    .await
    .map_err(map_sqlx_error)?;

    let current_version: i64 = if table_exists > 0 {
        sqlx::query_scalar("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1")
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?
            .unwrap_or(0)
    } else {
        0
    };

    info!("Current schema version: {}", current_version);

    // Apply migrations sequentially
    if current_version < 1 {
        info!("Applying migration 001: Initial schema");
        apply_migration(pool, include_str!("../migrations/001_initial_schema.sql")).await?;
    }

    if current_version < 2 {
        info!("Applying migration 002: Supplier link on processes");
        add_supplier_link_column(pool).await?;
    }

    info!("All migrations applied successfully");
    Ok(())
}

/// Apply a single migration SQL file
async fn apply_migration(pool: &SqlitePool, sql: &str) -> Result<()> {
    // Execute migration in a transaction
    let mut tx = pool.begin().await.map_err(map_sqlx_error)?;

    // Split by semicolon and execute each statement
    for statement in sql.split(';') {
        // Remove comments and trim
        let clean_statement: String = statement
            .lines()
            .filter(|line| !line.trim().starts_with("--"))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        if !clean_statement.is_empty() {
            sqlx::query(&clean_statement)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }
    }

    tx.commit().await.map_err(map_sqlx_error)?;
    Ok(())
}

/// Migration 002: add `Processos.fornecedor_id` where it is missing.
///
/// Databases written before suppliers were linked to processes lack the
/// column. SQLite has no conditional ALTER TABLE, so probe the column
/// list first instead of swallowing a duplicate-column error.
async fn add_supplier_link_column(pool: &SqlitePool) -> Result<()> {
    if !column_exists(pool, "Processos", "fornecedor_id").await? {
        sqlx::query("ALTER TABLE Processos ADD COLUMN fornecedor_id INTEGER")
            .execute(pool)
            .await
            .map_err(map_sqlx_error)?;
    }

    sqlx::query("INSERT INTO schema_version (version) VALUES (2)")
        .execute(pool)
        .await
        .map_err(map_sqlx_error)?;
    Ok(())
}

async fn column_exists(pool: &SqlitePool, table: &str, column: &str) -> Result<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM pragma_table_info(?) WHERE name = ?")
            .bind(table)
            .bind(column)
            .fetch_one(pool)
            .await
            .map_err(map_sqlx_error)?;

    Ok(count > 0)
}
