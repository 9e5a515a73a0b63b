//! Catalog trait for the durable track list

use crate::error::Result;
use crate::types::{NewTrack, Track, TrackId};
use async_trait::async_trait;

/// Durable collection of track metadata
///
/// This trait abstracts catalog operations so the playback side and the
/// embedding application never touch a concrete database handle. The
/// implementation owns its store connection; it is passed in at
/// construction rather than reached through a process-wide singleton.
#[async_trait]
pub trait TrackCatalog: Send + Sync {
    /// Insert the given defaults, in order, if the catalog is empty
    ///
    /// Inserts use insert-or-ignore semantics keyed on `file_path`: a
    /// uniqueness violation skips that row rather than failing the call.
    /// Returns the number of rows actually inserted; zero when the catalog
    /// already had entries.
    async fn seed_if_empty(&self, defaults: &[NewTrack]) -> Result<u64>;

    /// Get all tracks in insertion (id) order
    ///
    /// An empty result is a valid, non-error state.
    async fn list_all(&self) -> Result<Vec<Track>>;

    /// Number of tracks in the catalog
    async fn track_count(&self) -> Result<u64>;

    /// Get a track by id
    async fn track_by_id(&self, id: TrackId) -> Result<Option<Track>>;
}
