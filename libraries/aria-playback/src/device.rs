//! Audio device seam
//!
//! The controller never talks to a concrete audio backend. Platforms
//! implement [`AudioDevice`] and [`AudioHandle`]; the controller owns at
//! most one handle at a time and listens to its status subscription.

use crate::error::Result;
use std::path::Path;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// One status report from a live audio handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleStatus {
    /// Current playback position, when the backend reports one
    pub position: Option<Duration>,

    /// The resource reached end-of-stream without an explicit stop
    pub finished: bool,
}

/// An opaque resource representing one loaded, controllable audio stream
pub trait AudioHandle: Send {
    /// Begin playback from the start of the resource
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the resource loaded
    fn pause(&mut self) -> Result<()>;

    /// Resume paused playback
    fn resume(&mut self) -> Result<()>;

    /// Release the underlying resource
    ///
    /// Called by the controller before the handle is dropped. Must be safe
    /// to call more than once.
    fn unload(&mut self);

    /// Subscribe to this handle's status stream
    ///
    /// Status reports are delivered cooperatively: the embedder drains them
    /// on its own event loop via the controller. Dropping the receiver ends
    /// the subscription, which happens exactly when the controller releases
    /// the handle.
    fn subscribe(&mut self) -> Receiver<HandleStatus>;
}

/// Audio output device: opens resources and hands back handles
pub trait AudioDevice: Send {
    /// Load the resource at `path`, returning a controllable handle
    fn open(&mut self, path: &Path) -> Result<Box<dyn AudioHandle>>;
}
