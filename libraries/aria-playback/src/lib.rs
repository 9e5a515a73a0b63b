//! Aria Player - Playback Control
//!
//! Platform-agnostic playback control for Aria Player.
//!
//! This crate provides:
//! - A single-handle playback lifecycle (load → play → pause/resume →
//!   finish or skip → load-next)
//! - Wraparound next/previous navigation over a flat track list
//! - Auto-advance on natural completion
//! - Events for UI synchronization
//!
//! # Architecture
//!
//! `aria-playback` is completely platform-agnostic:
//! - No dependency on a concrete audio backend
//! - No dependency on `aria-storage` (database)
//!
//! Platform-specific code (audio output) is provided via the
//! [`AudioDevice`]/[`AudioHandle`] traits. The embedding application reads
//! the track list from the catalog and installs it with
//! [`PlaybackController::set_tracks`].
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use aria_playback::{AudioDevice, AudioHandle, HandleStatus, PlaybackController, Result};
//! use std::path::{Path, PathBuf};
//! use std::sync::mpsc::{channel, Receiver, Sender};
//!
//! // Implement the device seam for your platform
//! struct MyHandle {
//!     status: Option<Sender<HandleStatus>>,
//! }
//!
//! impl AudioHandle for MyHandle {
//!     fn play(&mut self) -> Result<()> {
//!         // Start the platform stream
//!         Ok(())
//!     }
//!
//!     fn pause(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn resume(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn unload(&mut self) {
//!         // Release the platform stream
//!     }
//!
//!     fn subscribe(&mut self) -> Receiver<HandleStatus> {
//!         let (tx, rx) = channel();
//!         self.status = Some(tx);
//!         rx
//!     }
//! }
//!
//! struct MyDevice;
//!
//! impl AudioDevice for MyDevice {
//!     fn open(&mut self, _path: &Path) -> Result<Box<dyn AudioHandle>> {
//!         Ok(Box::new(MyHandle { status: None }))
//!     }
//! }
//!
//! // Use with the playback controller
//! let mut controller = PlaybackController::new(Box::new(MyDevice), PathBuf::from("/music"));
//! // controller.set_tracks(tracks);     // From the catalog
//! // controller.toggle().ok();          // Acts as play when idle
//! // controller.pump().ok();            // From the event loop: auto-advance
//! ```

mod controller;
mod device;
mod error;
mod events;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use device::{AudioDevice, AudioHandle, HandleStatus};
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use types::PlaybackState;
