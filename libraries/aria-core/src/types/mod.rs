//! Domain types shared across the workspace

mod ids;
mod track;

pub use ids::TrackId;
pub use track::{NewTrack, Track};
