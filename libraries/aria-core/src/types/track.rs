/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A catalog entry
///
/// `file_path` is stored relative to the media root directory and resolved
/// against it at play time. The catalog enforces uniqueness of `file_path`
/// across all rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier, assigned on insertion
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Playable resource, relative to the media root
    pub file_path: PathBuf,
}

impl Track {
    /// Resolve the track's file path against a media root directory
    pub fn resolve_against(&self, media_root: &Path) -> PathBuf {
        media_root.join(&self.file_path)
    }
}

/// A draft entry for insertion; the catalog assigns the id
///
/// `title` and `artist` are expected to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrack {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Playable resource, relative to the media root
    pub file_path: PathBuf,
}

impl NewTrack {
    /// Create a new draft entry
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            file_path: file_path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_creation() {
        let draft = NewTrack::new("Creative Minds", "Benjamin Tissot", "music/creative-minds.mp3");
        assert_eq!(draft.title, "Creative Minds");
        assert_eq!(draft.artist, "Benjamin Tissot");
        assert_eq!(draft.file_path, PathBuf::from("music/creative-minds.mp3"));
    }

    #[test]
    fn resolve_joins_media_root() {
        let track = Track {
            id: TrackId::new(1),
            title: "Sunny".to_string(),
            artist: "Benjamin Tissot".to_string(),
            file_path: PathBuf::from("music/sunny.mp3"),
        };

        assert_eq!(
            track.resolve_against(Path::new("/data/documents")),
            PathBuf::from("/data/documents/music/sunny.mp3")
        );
    }
}
