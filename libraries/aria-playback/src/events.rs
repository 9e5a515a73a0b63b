//! Playback events
//!
//! Event-based communication for UI synchronization. The embedder drains
//! events with [`crate::PlaybackController::drain_events`] after each batch
//! of transport calls and derives its "now playing" view from them.

use crate::types::PlaybackState;
use aria_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different track was loaded and started
    TrackChanged {
        /// Position of the new track in the list
        index: usize,
        /// Id of the new track
        track_id: TrackId,
    },

    /// The current track finished playing naturally (reached end)
    TrackFinished {
        /// Id of the finished track
        track_id: TrackId,
    },
}
