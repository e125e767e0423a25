//! # Playback Module
//!
//! Enforces the application-wide "at most one actively loaded audio resource"
//! rule and owns the recording workflow.
//!
//! ## Overview
//!
//! - [`PlaybackSession`](session::PlaybackSession) tracks which sound (if any)
//!   is currently loaded, pauses in place when the playing sound is tapped
//!   again, and always releases the previous handle before provisioning a new
//!   one.
//! - [`RecordingController`](recorder::RecordingController) drives the
//!   permission/prepare/start/finalize lifecycle of the platform recorder and
//!   measures the finished clip's duration.

pub mod error;
pub mod recorder;
pub mod session;

pub use error::{PlaybackError, Result};
pub use recorder::{RecordedClip, RecordingController};
pub use session::{PlaybackSession, PlaybackStatus};
