//! Error types for playback control

use std::path::PathBuf;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The track list is empty
    #[error("No tracks available")]
    NoTracksAvailable,

    /// Index outside the track list
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// The track's resolved file does not exist
    #[error("Track file missing: {}", .0.display())]
    TrackFileMissing(PathBuf),

    /// The audio device failed to load or start the resource
    #[error("Failed to load track: {0}")]
    LoadFailed(String),

    /// Pause/resume failed on the active handle
    #[error("Failed to toggle playback: {0}")]
    ToggleFailed(String),

    /// Audio device error
    #[error("Audio device error: {0}")]
    Device(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

impl From<PlaybackError> for aria_core::AriaError {
    fn from(err: PlaybackError) -> Self {
        aria_core::AriaError::playback(err.to_string())
    }
}
