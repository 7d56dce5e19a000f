//! Tunebook Storage
//!
//! `SQLite` persistence layer for parsed tunes.
//!
//! The query surface mirrors what the CLI needs: bulk insert of a parsed
//! corpus, equality filter on book number, case-insensitive substring
//! filters on title/rhythm/key, and a per-book count aggregation.
//!
//! # Example
//!
//! ```rust,no_run
//! use tunebook_storage::{create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://tunes.db").await?;
//! run_migrations(&pool).await?;
//!
//! let jigs = tunebook_storage::tunes::search_type(&pool, "jig").await?;
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod tunes;

pub use error::StorageError;

use sqlx::sqlite::SqlitePool;

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    // Embedded migrations for reliability across execution contexts
    const MIGRATIONS: &[&str] = &[include_str!("../migrations/20250601000001_create_tunes.sql")];

    for migration in MIGRATIONS {
        sqlx::raw_sql(migration)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }

    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://tunes.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("creating pool for {}", database_url);

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal) // Use WAL mode for better concurrency
        .busy_timeout(std::time::Duration::from_secs(30)); // Wait up to 30s for locks

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
