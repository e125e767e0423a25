//! Audio bridge traits and supporting types.
//!
//! These abstractions let the playback and recording components talk to a
//! platform audio engine without knowing its concrete type. Hosts provide
//! implementations backed by their native audio stack (AVAudioPlayer,
//! MediaPlayer, rodio, ...) and surface natural end-of-playback through the
//! completion channel.

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::error::Result;

/// Unique identifier for audio handles provisioned by an [`AudioEngine`].
///
/// A handle names one loaded audio resource. The engine owns the native
/// resource; the core references it exclusively through this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioHandleId(Uuid);

impl AudioHandleId {
    /// Generate a new handle identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AudioHandleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AudioHandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a microphone permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Trait for platform audio engines that load and drive audio resources.
///
/// Handles are addressed by [`AudioHandleId`]; an engine may keep any number
/// of resources loaded, and the core is responsible for releasing each handle
/// it provisions via [`AudioEngine::unload`].
#[async_trait]
pub trait AudioEngine: Send + Sync {
    /// Request permission to use the audio subsystem (microphone included).
    async fn request_permission(&self) -> Result<PermissionStatus>;

    /// Load the audio payload at `location` and return a handle to it.
    async fn load(&self, location: &str) -> Result<AudioHandleId>;

    /// Begin or resume playback for the handle.
    async fn play(&self, handle: AudioHandleId) -> Result<()>;

    /// Pause playback without releasing the handle.
    async fn pause(&self, handle: AudioHandleId) -> Result<()>;

    /// Release the native resource associated with the handle.
    async fn unload(&self, handle: AudioHandleId) -> Result<()>;

    /// Query the total duration of the loaded payload, when known.
    async fn duration(&self, handle: AudioHandleId) -> Result<Option<Duration>>;

    /// Subscribe to natural end-of-playback notifications.
    ///
    /// The engine broadcasts the handle id of every resource whose playback
    /// finished on its own (as opposed to being paused or unloaded).
    fn completions(&self) -> broadcast::Receiver<AudioHandleId>;
}

/// Trait for platform recording backends.
///
/// Mirrors the prepare/start/finalize lifecycle native recorders expose. The
/// finalized file lives in a transient location; callers that want to keep it
/// copy it into durable storage themselves.
#[async_trait]
pub trait AudioRecorder: Send + Sync {
    /// Allocate and configure the native recorder.
    async fn prepare(&self) -> Result<()>;

    /// Begin capturing audio.
    async fn start(&self) -> Result<()>;

    /// Stop capturing and finalize the clip file.
    ///
    /// Returns the transient location of the finalized recording.
    async fn stop_and_finalize(&self) -> Result<PathBuf>;
}
