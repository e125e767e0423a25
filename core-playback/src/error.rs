//! Error types for playback and recording operations.

use bridge_traits::error::BridgeError;
use thiserror::Error;

/// Errors that can occur while driving the audio engine or recorder.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// Failed to load the audio payload behind a record.
    #[error("Failed to open audio source: {0}")]
    SourceError(String),

    /// The engine accepted the handle but a play/pause transition failed.
    #[error("Playback operation failed: {0}")]
    PlaybackFailed(String),

    /// The platform recorder failed to prepare, start, or finalize.
    #[error("Recording operation failed: {0}")]
    RecordingFailed(String),

    /// Microphone permission was denied by the user or the platform.
    #[error("Microphone permission denied")]
    PermissionDenied,

    /// A stop was requested but no recording is in progress.
    #[error("No recording in progress")]
    NotRecording,

    /// Error from a host bridge.
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),
}

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, PlaybackError>;
