//! Recording workflow: permission, capture, and duration measurement.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bridge_traits::audio::{AudioEngine, AudioRecorder, PermissionStatus};
use bridge_traits::time::Clock;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{PlaybackError, Result};

/// A finalized recording: where the transient clip lives and how long it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedClip {
    /// Transient location of the finalized file. Callers that want to keep
    /// the clip copy it into durable storage (see the sound repository).
    pub location: PathBuf,
    /// Clip length in whole seconds, never zero.
    pub duration_seconds: u32,
}

/// Drives the platform recorder through its capture lifecycle.
pub struct RecordingController {
    recorder: Arc<dyn AudioRecorder>,
    engine: Arc<dyn AudioEngine>,
    clock: Arc<dyn Clock>,
    started_at: Option<DateTime<Utc>>,
}

impl RecordingController {
    pub fn new(
        recorder: Arc<dyn AudioRecorder>,
        engine: Arc<dyn AudioEngine>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            recorder,
            engine,
            clock,
            started_at: None,
        }
    }

    /// Returns `true` while a capture is in progress.
    pub fn is_recording(&self) -> bool {
        self.started_at.is_some()
    }

    /// Request microphone permission and begin capturing.
    pub async fn start(&mut self) -> Result<()> {
        if let PermissionStatus::Denied = self.engine.request_permission().await? {
            return Err(PlaybackError::PermissionDenied);
        }

        self.recorder
            .prepare()
            .await
            .map_err(|e| PlaybackError::RecordingFailed(e.to_string()))?;
        self.recorder
            .start()
            .await
            .map_err(|e| PlaybackError::RecordingFailed(e.to_string()))?;

        self.started_at = Some(self.clock.now());
        debug!("Recording started");
        Ok(())
    }

    /// Stop capturing and finalize the clip.
    ///
    /// The duration is measured by loading the finished clip into the engine;
    /// when that fails for any reason the wall-clock capture time is used
    /// instead. Either way the reported duration is at least one second.
    pub async fn stop(&mut self) -> Result<RecordedClip> {
        let started_at = self.started_at.take().ok_or(PlaybackError::NotRecording)?;

        let location = self
            .recorder
            .stop_and_finalize()
            .await
            .map_err(|e| PlaybackError::RecordingFailed(e.to_string()))?;

        let duration_seconds = match self.measure_duration(&location).await {
            Ok(Some(secs)) => secs.max(1),
            Ok(None) | Err(_) => {
                let elapsed = (self.clock.now() - started_at).num_seconds().max(1);
                warn!(
                    path = %location.display(),
                    elapsed,
                    "Could not probe clip duration, falling back to capture time"
                );
                elapsed as u32
            }
        };

        debug!(path = %location.display(), duration_seconds, "Recording finalized");
        Ok(RecordedClip {
            location,
            duration_seconds,
        })
    }

    /// Load the clip, ask the engine for its duration, release the handle.
    async fn measure_duration(&self, location: &Path) -> Result<Option<u32>> {
        let handle = self
            .engine
            .load(&location.to_string_lossy())
            .await
            .map_err(|e| PlaybackError::SourceError(e.to_string()))?;
        let duration = self.engine.duration(handle).await;
        if let Err(e) = self.engine.unload(handle).await {
            warn!(%handle, error = %e, "Failed to release duration-probe handle");
        }
        Ok(duration?.map(|d| d.as_secs().min(u32::MAX as u64) as u32))
    }
}
