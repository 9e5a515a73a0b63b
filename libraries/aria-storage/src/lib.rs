//! Aria Player Storage
//!
//! `SQLite` catalog layer for Aria Player.
//!
//! This crate provides persistent storage for the flat song catalog:
//! schema creation, one-time seeding, and ordered listing.
//!
//! # Architecture
//!
//! - **Injected connection**: `SqliteCatalog` owns a pool handed to it at
//!   construction; there is no process-wide database singleton.
//! - **Vertical slicing**: the `songs` module owns all queries over the
//!   `songs` table; `SqliteCatalog` only delegates.
//! - **Typed boundary**: rows become [`aria_core::Track`] values at the
//!   query boundary, nothing downstream touches raw rows.
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_storage::SqliteCatalog;
//! use aria_core::{NewTrack, TrackCatalog};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open (or create) the catalog database and ensure the schema exists
//! let catalog = SqliteCatalog::connect("sqlite://aria.db").await?;
//!
//! // Bootstrap sample data on first launch
//! let defaults = vec![NewTrack::new("Sunny", "Benjamin Tissot", "music/sunny.mp3")];
//! catalog.seed_if_empty(&defaults).await?;
//!
//! // Hand the ordered track list to the playback side
//! let tracks = catalog.list_all().await?;
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;

pub mod songs;

pub use catalog::SqliteCatalog;
pub use error::CatalogError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Safe to call on every startup; applied migrations are skipped.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://aria.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

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
