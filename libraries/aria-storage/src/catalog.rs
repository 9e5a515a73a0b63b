use crate::error::CatalogError;
use crate::songs;
use aria_core::{error::Result, NewTrack, Track, TrackCatalog, TrackId};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Track catalog backed by `SQLite`
///
/// Owns its pool; construct with [`SqliteCatalog::connect`] for the common
/// open-and-migrate path, or [`SqliteCatalog::new`] to inject an existing
/// pool (tests, shared pools).
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    /// Wrap an existing pool
    ///
    /// The caller is responsible for having run the migrations.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the catalog database and ensure its schema exists
    ///
    /// Creates the database file when missing. Idempotent across restarts.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] when the store cannot be opened
    /// or the schema cannot be established.
    pub async fn connect(database_url: &str) -> std::result::Result<Self, CatalogError> {
        let pool = crate::create_pool(database_url)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        crate::run_migrations(&pool)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        Ok(Self::new(pool))
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TrackCatalog for SqliteCatalog {
    async fn seed_if_empty(&self, defaults: &[NewTrack]) -> Result<u64> {
        songs::seed_if_empty(&self.pool, defaults)
            .await
            .map_err(Into::into)
    }

    async fn list_all(&self) -> Result<Vec<Track>> {
        songs::get_all(&self.pool).await.map_err(Into::into)
    }

    async fn track_count(&self) -> Result<u64> {
        songs::count(&self.pool).await.map_err(Into::into)
    }

    async fn track_by_id(&self, id: TrackId) -> Result<Option<Track>> {
        songs::get_by_id(&self.pool, id).await.map_err(Into::into)
    }
}
