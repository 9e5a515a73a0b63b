//! Aria Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Aria Player.
//!
//! This crate provides the foundational building blocks shared by the
//! storage and playback crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `NewTrack`
//! - **Core Traits**: `TrackCatalog`
//! - **Error Handling**: Unified `AriaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::NewTrack;
//!
//! // A draft entry for the catalog; the catalog assigns the id on insert.
//! let draft = NewTrack::new("Acoustic Breeze", "Benjamin Tissot", "music/acoustic-breeze.mp3");
//! assert_eq!(draft.title, "Acoustic Breeze");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use catalog::TrackCatalog;
pub use error::{AriaError, Result};
pub use types::{NewTrack, Track, TrackId};
