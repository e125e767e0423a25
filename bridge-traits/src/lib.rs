//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the soundboard core and the
//! platform-specific capabilities it consumes. Each trait represents a
//! capability the core requires but that is implemented differently per host
//! (desktop, iOS, Android):
//!
//! - [`SettingsStore`](storage::SettingsStore) - key-value persistence for the
//!   serialized sound collection
//! - [`FileSystemAccess`](storage::FileSystemAccess) - payload file copy and
//!   cleanup inside the app's private documents root
//! - [`AudioEngine`](audio::AudioEngine) - loading, playing, and releasing
//!   audio handles, plus completion notifications
//! - [`AudioRecorder`](audio::AudioRecorder) - microphone capture producing a
//!   transient clip file
//! - [`Clock`](time::Clock) - time source for deterministic testing
//!
//! ## Fail-Fast Strategy
//!
//! The core fails fast with a descriptive error when a required capability is
//! missing; see the builder in `core-service`. Desktop hosts get storage
//! bridges from `bridge-desktop` and are expected to inject their own audio
//! engine.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds to support safe concurrent
//! usage across async tasks, even though the core itself is designed for a
//! single cooperative caller per process.

pub mod audio;
pub mod error;
pub mod storage;
pub mod time;

pub use error::BridgeError;

// Re-export commonly used types
pub use audio::{AudioEngine, AudioHandleId, AudioRecorder, PermissionStatus};
pub use storage::{FileSystemAccess, SettingsStore};
pub use time::{Clock, SystemClock};
