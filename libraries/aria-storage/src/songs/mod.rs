//! Queries over the `songs` table
//!
//! The single vertical slice of this crate: every statement touching the
//! catalog table lives here. Rows are turned into typed [`Track`] values
//! before they leave this module.

use crate::error::{CatalogError, Result};
use aria_core::{NewTrack, Track, TrackId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::path::PathBuf;
use tracing::{debug, warn};

fn track_from_row(row: &SqliteRow) -> Track {
    Track {
        id: row.get::<TrackId, _>("id"),
        title: row.get("title"),
        artist: row.get("artist"),
        file_path: PathBuf::from(row.get::<String, _>("file_path")),
    }
}

/// Number of rows in the catalog
pub async fn count(pool: &SqlitePool) -> Result<u64> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(pool)
        .await
        .map_err(|e| CatalogError::Query(e.to_string()))?;

    Ok(n as u64)
}

/// Get all tracks in insertion (id) order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Track>> {
    let rows = sqlx::query("SELECT id, title, artist, file_path FROM songs ORDER BY id")
        .fetch_all(pool)
        .await
        .map_err(|e| CatalogError::Query(e.to_string()))?;

    Ok(rows.iter().map(track_from_row).collect())
}

/// Get a track by id
pub async fn get_by_id(pool: &SqlitePool, id: TrackId) -> Result<Option<Track>> {
    let row = sqlx::query("SELECT id, title, artist, file_path FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| CatalogError::Query(e.to_string()))?;

    Ok(row.as_ref().map(track_from_row))
}

/// Insert a draft entry, skipping it when its `file_path` already exists
///
/// Returns the assigned id, or `None` when the row was skipped.
pub async fn insert_or_ignore(pool: &SqlitePool, draft: &NewTrack) -> Result<Option<TrackId>> {
    let result = sqlx::query("INSERT OR IGNORE INTO songs (title, artist, file_path) VALUES (?, ?, ?)")
        .bind(&draft.title)
        .bind(&draft.artist)
        .bind(draft.file_path.to_string_lossy().to_string())
        .execute(pool)
        .await
        .map_err(|e| CatalogError::Query(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    Ok(Some(TrackId::new(result.last_insert_rowid())))
}

/// Insert the given defaults, in order, if the catalog is empty
///
/// Rows whose `file_path` collides with an existing row are skipped, and a
/// row that fails to insert outright is logged and skipped as well; seeding
/// is sample-data bootstrapping, not general insertion, so a partial seed is
/// not an error. Returns the number of rows actually inserted.
pub async fn seed_if_empty(pool: &SqlitePool, defaults: &[NewTrack]) -> Result<u64> {
    if count(pool).await? > 0 {
        debug!("catalog already populated, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0u64;
    for draft in defaults {
        match insert_or_ignore(pool, draft).await {
            Ok(Some(id)) => {
                debug!(track_id = %id, title = %draft.title, "seeded track");
                inserted += 1;
            }
            Ok(None) => {
                warn!(
                    file_path = %draft.file_path.display(),
                    "skipping seed entry with duplicate file path"
                );
            }
            Err(e) => {
                warn!(
                    file_path = %draft.file_path.display(),
                    error = %e,
                    "failed to seed entry, continuing"
                );
            }
        }
    }

    Ok(inserted)
}
