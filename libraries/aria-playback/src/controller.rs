//! Playback controller - core sequencing
//!
//! Owns the single active audio handle and the current track index, and
//! sequences load → play → (pause/resume)* → (finish | skip) → load-next
//! over a flat, wraparound-indexed track list.
//!
//! # Concurrency
//!
//! Every mutating operation takes `&mut self` and the controller is driven
//! from one logical event loop, so transport calls and completion handling
//! are serialized by construction. Handle replacement is
//! release-then-acquire: the previous handle is unloaded and dropped
//! (ending its status subscription) before the device opens the next
//! resource. There is never an instant with two live handles; the brief
//! window with none falls inside the `Loading` state.

use crate::{
    device::{AudioDevice, AudioHandle, HandleStatus},
    error::{PlaybackError, Result},
    events::PlayerEvent,
    types::PlaybackState,
};
use aria_core::Track;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use tracing::debug;

/// The active handle paired with its status subscription
///
/// Dropping this ends the subscription; a completion report from a released
/// handle can never reach the controller again.
struct ActiveHandle {
    handle: Box<dyn AudioHandle>,
    status: Receiver<HandleStatus>,
}

/// Sequences a single audio resource over a linear track list
///
/// Holds at most one live handle at any point. The track list comes from
/// the catalog via [`PlaybackController::set_tracks`]; this crate has no
/// storage dependency.
pub struct PlaybackController {
    device: Box<dyn AudioDevice>,
    media_root: PathBuf,
    tracks: Vec<Track>,
    current_index: usize,
    state: PlaybackState,
    active: Option<ActiveHandle>,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlaybackController {
    /// Create a new controller
    ///
    /// `media_root` is the document-storage root that relative track paths
    /// resolve against at play time.
    pub fn new(device: Box<dyn AudioDevice>, media_root: PathBuf) -> Self {
        Self {
            device,
            media_root,
            tracks: Vec::new(),
            current_index: 0,
            state: PlaybackState::Idle,
            active: None,
            pending_events: Vec::new(),
        }
    }

    /// Install the track list, in catalog order
    ///
    /// Resets the current index when it falls outside the new list. Does
    /// not touch the active handle; the caller decides whether to reload.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        if self.current_index >= self.tracks.len() {
            self.current_index = 0;
        }
    }

    /// The installed track list
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Current position in the track list
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// The track the active handle was loaded from, if any
    pub fn now_playing(&self) -> Option<&Track> {
        if self.active.is_some() {
            self.tracks.get(self.current_index)
        } else {
            None
        }
    }

    // ===== Transport =====

    /// Load the track at `index` and start playback
    ///
    /// Releases the previous handle before acquiring the new one. On
    /// failure the index is still updated (so `next`/`previous` keep
    /// moving) but the controller ends in `Error` with no handle.
    pub fn load(&mut self, index: usize) -> Result<()> {
        if self.tracks.is_empty() {
            return Err(PlaybackError::NoTracksAvailable);
        }
        if index >= self.tracks.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }

        // Release first: the at-most-one-handle invariant holds through
        // every transition.
        self.release_active();

        self.current_index = index;
        self.set_state(PlaybackState::Loading);

        let path = self.tracks[index].resolve_against(&self.media_root);
        if !path.is_file() {
            self.set_state(PlaybackState::Error);
            return Err(PlaybackError::TrackFileMissing(path));
        }

        let mut handle = match self.device.open(&path) {
            Ok(handle) => handle,
            Err(e) => {
                self.set_state(PlaybackState::Error);
                return Err(PlaybackError::LoadFailed(e.to_string()));
            }
        };

        // Subscribe before starting so no status report can be missed.
        let status = handle.subscribe();

        if let Err(e) = handle.play() {
            handle.unload();
            self.set_state(PlaybackState::Error);
            return Err(PlaybackError::LoadFailed(e.to_string()));
        }

        self.active = Some(ActiveHandle { handle, status });
        self.set_state(PlaybackState::Playing);

        let track_id = self.tracks[index].id;
        self.emit(PlayerEvent::TrackChanged { index, track_id });
        debug!(index, %track_id, "track loaded and playing");

        Ok(())
    }

    /// Toggle between playing and paused
    ///
    /// With no loaded audio (`Idle`/`Error`), acts as play: performs a full
    /// `load` of the current index.
    pub fn toggle(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.resume(),
            PlaybackState::Idle | PlaybackState::Loading | PlaybackState::Error => {
                self.load(self.current_index)
            }
        }
    }

    /// Pause the active handle
    ///
    /// With no active handle, acts as play.
    pub fn pause(&mut self) -> Result<()> {
        let Some(active) = self.active.as_mut() else {
            return self.load(self.current_index);
        };

        active
            .handle
            .pause()
            .map_err(|e| PlaybackError::ToggleFailed(e.to_string()))?;
        self.set_state(PlaybackState::Paused);
        Ok(())
    }

    /// Resume the active handle
    ///
    /// With no active handle, acts as play.
    pub fn resume(&mut self) -> Result<()> {
        let Some(active) = self.active.as_mut() else {
            return self.load(self.current_index);
        };

        active
            .handle
            .resume()
            .map_err(|e| PlaybackError::ToggleFailed(e.to_string()))?;
        self.set_state(PlaybackState::Playing);
        Ok(())
    }

    /// Skip to the next track, wrapping past the end
    pub fn next(&mut self) -> Result<()> {
        let n = self.tracks.len();
        if n == 0 {
            return Err(PlaybackError::NoTracksAvailable);
        }
        self.load((self.current_index + 1) % n)
    }

    /// Skip to the previous track, wrapping past the start
    pub fn previous(&mut self) -> Result<()> {
        let n = self.tracks.len();
        if n == 0 {
            return Err(PlaybackError::NoTracksAvailable);
        }
        self.load((self.current_index + n - 1) % n)
    }

    /// Process pending status reports from the active handle
    ///
    /// Called from the embedder's event loop. When the active handle
    /// reported natural completion, advances exactly one track forward and
    /// begins loading it. Reports from handles released earlier cannot
    /// arrive here: their subscriptions died with them.
    pub fn pump(&mut self) -> Result<()> {
        let mut finished = false;
        if let Some(active) = self.active.as_ref() {
            // Drain everything reported since the last pump. A handle
            // completes at most once, so this coalesces to one advance.
            while let Ok(status) = active.status.try_recv() {
                if status.finished {
                    finished = true;
                }
            }
        }

        if !finished {
            return Ok(());
        }

        let finished_id = self.tracks.get(self.current_index).map(|t| t.id);
        if let Some(track_id) = finished_id {
            self.emit(PlayerEvent::TrackFinished { track_id });
            debug!(%track_id, "track finished, auto-advancing");
        }

        self.next()
    }

    /// Release the handle and return to `Idle`
    pub fn shutdown(&mut self) {
        self.release_active();
        self.set_state(PlaybackState::Idle);
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain. The embedder calls
    /// this after each batch of transport calls or pumps.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.emit(PlayerEvent::StateChanged { state });
        }
    }

    fn release_active(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.handle.unload();
            // Dropping `active` drops the status receiver too, ending the
            // subscription.
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.release_active();
    }
}
