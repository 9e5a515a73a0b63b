//! Core types for playback control

use serde::{Deserialize, Serialize};

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No handle held
    Idle,

    /// Acquiring the audio resource
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,

    /// The last load or transport action failed; no handle held
    Error,
}

impl PlaybackState {
    /// Whether a transport toggle should pause/resume rather than load
    pub fn has_loaded_audio(self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}
