//! Single-active-playback session state machine.

use std::sync::Arc;

use bridge_traits::audio::{AudioEngine, AudioHandleId};
use core_sounds::models::{SoundId, SoundRecord};
use tracing::{debug, warn};

use crate::error::{PlaybackError, Result};

/// Outcome of a [`PlaybackSession::request_play`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// The requested sound is now playing.
    Playing,
    /// The requested sound was already playing and is now paused in place.
    Paused,
}

struct ActivePlayback {
    sound: SoundId,
    handle: AudioHandleId,
    playing: bool,
}

/// Owns the single active audio handle for the whole application.
///
/// States: idle (no handle) or loaded (one handle, playing or paused,
/// associated with one record id). Every transition that replaces or clears
/// the handle releases the previous one first; release failures are logged
/// and never leak the handle reference.
pub struct PlaybackSession {
    engine: Arc<dyn AudioEngine>,
    current: Option<ActivePlayback>,
}

impl PlaybackSession {
    /// Create an idle session over the given engine.
    pub fn new(engine: Arc<dyn AudioEngine>) -> Self {
        Self {
            engine,
            current: None,
        }
    }

    /// The id of the currently loaded sound, if any.
    pub fn current_sound(&self) -> Option<SoundId> {
        self.current.as_ref().map(|a| a.sound)
    }

    /// Returns `true` if a sound is loaded and actively playing.
    pub fn is_playing(&self) -> bool {
        self.current.as_ref().map(|a| a.playing).unwrap_or(false)
    }

    /// React to the user tapping play on `record`.
    ///
    /// - Same sound, actively playing: pause in place, keep the handle.
    /// - Anything else (different sound, same sound but paused, or idle):
    ///   release the held handle, load the record's payload, start playback.
    ///
    /// On any engine failure the session is idle when this returns; no handle
    /// is ever left referenced without its resource released.
    pub async fn request_play(&mut self, record: &SoundRecord) -> Result<PlaybackStatus> {
        if let Some(mut active) = self.current.take() {
            if active.sound == record.id && active.playing {
                match self.engine.pause(active.handle).await {
                    Ok(()) => {
                        active.playing = false;
                        self.current = Some(active);
                        return Ok(PlaybackStatus::Paused);
                    }
                    Err(e) => {
                        warn!(sound = %record.id, error = %e, "Pause failed, releasing handle");
                        self.release(active.handle).await;
                        return Err(PlaybackError::PlaybackFailed(e.to_string()));
                    }
                }
            }
            // Different sound, or same sound but paused: tear down before
            // starting fresh.
            self.release(active.handle).await;
        }

        let handle = self
            .engine
            .load(&record.audio_location)
            .await
            .map_err(|e| PlaybackError::SourceError(e.to_string()))?;

        if let Err(e) = self.engine.play(handle).await {
            warn!(sound = %record.id, error = %e, "Play failed, releasing fresh handle");
            self.release(handle).await;
            return Err(PlaybackError::PlaybackFailed(e.to_string()));
        }

        debug!(sound = %record.id, %handle, "Playback started");
        self.current = Some(ActivePlayback {
            sound: record.id,
            handle,
            playing: true,
        });
        Ok(PlaybackStatus::Playing)
    }

    /// Handle a natural end-of-playback notification from the engine.
    ///
    /// If `handle` names the current resource the session releases it and
    /// becomes idle, so the caller-visible "currently playing id" is none.
    /// Notifications for stale handles are ignored.
    pub async fn handle_completion(&mut self, handle: AudioHandleId) {
        let matches = self
            .current
            .as_ref()
            .map(|a| a.handle == handle)
            .unwrap_or(false);
        if !matches {
            return;
        }
        if let Some(active) = self.current.take() {
            debug!(sound = %active.sound, "Playback finished");
            // The engine may already have released the finished resource.
            self.release(active.handle).await;
        }
    }

    /// Unconditionally release any held handle and go idle.
    ///
    /// Invoked when the hosting view is no longer active. Release errors are
    /// logged and ignored.
    pub async fn teardown(&mut self) {
        if let Some(active) = self.current.take() {
            debug!(sound = %active.sound, "Tearing down playback session");
            self.release(active.handle).await;
        }
    }

    async fn release(&self, handle: AudioHandleId) {
        if let Err(e) = self.engine.unload(handle).await {
            warn!(%handle, error = %e, "Failed to release audio handle");
        }
    }
}
