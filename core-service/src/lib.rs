//! Soundboard service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (settings store,
//! file system, audio engine, recorder, clock) into the domain components and
//! exposes the operations the application surface calls. Desktop hosts get
//! the storage bridges from `bridge-desktop`; the audio bridges are always
//! host-provided, and [`SoundboardBuilder::build`] fails fast when one is
//! missing.

pub mod error;

pub use error::{CoreError, Result};

use std::sync::Arc;

use bridge_traits::audio::{AudioEngine, AudioHandleId, AudioRecorder};
use bridge_traits::storage::{FileSystemAccess, SettingsStore};
use bridge_traits::time::{Clock, SystemClock};
use core_playback::{PlaybackSession, PlaybackStatus, RecordedClip, RecordingController};
use core_sounds::{
    KvSoundRepository, LibraryError, NewSound, SortOrder, SoundId, SoundPatch, SoundRecord,
    SoundRepository,
};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

/// Collects bridge handles and assembles the service.
///
/// Every capability is mandatory except the clock, which defaults to
/// [`SystemClock`].
#[derive(Default)]
pub struct SoundboardBuilder {
    settings_store: Option<Arc<dyn SettingsStore>>,
    filesystem: Option<Arc<dyn FileSystemAccess>>,
    audio_engine: Option<Arc<dyn AudioEngine>>,
    recorder: Option<Arc<dyn AudioRecorder>>,
    clock: Option<Arc<dyn Clock>>,
}

impl SoundboardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings_store(mut self, settings_store: Arc<dyn SettingsStore>) -> Self {
        self.settings_store = Some(settings_store);
        self
    }

    pub fn with_filesystem(mut self, filesystem: Arc<dyn FileSystemAccess>) -> Self {
        self.filesystem = Some(filesystem);
        self
    }

    pub fn with_audio_engine(mut self, audio_engine: Arc<dyn AudioEngine>) -> Self {
        self.audio_engine = Some(audio_engine);
        self
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn AudioRecorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Assemble the service, failing fast on any missing capability.
    pub fn build(self) -> Result<SoundboardService> {
        let settings_store = self.settings_store.ok_or_else(|| {
            CoreError::capability_missing(
                "SettingsStore",
                "No settings store provided. Desktop: use bridge-desktop's SqliteSettingsStore. \
                 Mobile: inject a platform-native adapter.",
            )
        })?;
        let filesystem = self.filesystem.ok_or_else(|| {
            CoreError::capability_missing(
                "FileSystemAccess",
                "No file system provided. Desktop: use bridge-desktop's TokioFileSystem. \
                 Mobile: inject a platform-native adapter.",
            )
        })?;
        let audio_engine = self.audio_engine.ok_or_else(|| {
            CoreError::capability_missing(
                "AudioEngine",
                "No audio engine provided. Inject the host platform's audio adapter.",
            )
        })?;
        let recorder = self.recorder.ok_or_else(|| {
            CoreError::capability_missing(
                "AudioRecorder",
                "No recorder provided. Inject the host platform's recording adapter.",
            )
        })?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let sounds: Arc<dyn SoundRepository> = Arc::new(KvSoundRepository::new(
            settings_store,
            filesystem,
            clock.clone(),
        ));
        let session = PlaybackSession::new(audio_engine.clone());
        let recording = RecordingController::new(recorder, audio_engine.clone(), clock);

        Ok(SoundboardService {
            sounds,
            engine: audio_engine,
            session: Mutex::new(session),
            recording: Mutex::new(recording),
        })
    }
}

/// Primary façade exposed to host applications.
///
/// The playback session and recording controller sit behind async mutexes:
/// the supported usage model is one cooperative caller (the UI), and the
/// locks keep that safe without imposing ordering on the caller.
pub struct SoundboardService {
    sounds: Arc<dyn SoundRepository>,
    engine: Arc<dyn AudioEngine>,
    session: Mutex<PlaybackSession>,
    recording: Mutex<RecordingController>,
}

impl SoundboardService {
    /// Start building a service from bridge handles.
    pub fn builder() -> SoundboardBuilder {
        SoundboardBuilder::new()
    }

    // ------------------------------------------------------------------
    // Sound collection
    // ------------------------------------------------------------------

    /// List all sounds sorted by creation time.
    pub async fn list_sounds(&self, order: SortOrder) -> Result<Vec<SoundRecord>> {
        Ok(self.sounds.list(order).await?)
    }

    /// Look a single sound up by id.
    pub async fn get_sound(&self, id: &SoundId) -> Result<Option<SoundRecord>> {
        Ok(self.sounds.find(id).await?)
    }

    /// Create a sound record from an already-durable payload.
    pub async fn create_sound(&self, new: NewSound) -> Result<SoundRecord> {
        self.sounds.create(new).await.map_err(|e| {
            error!(error = %e, "Failed to create sound");
            CoreError::from(e)
        })
    }

    /// Apply a partial update to a sound record.
    pub async fn update_sound(&self, id: &SoundId, patch: SoundPatch) -> Result<SoundRecord> {
        self.sounds.update(id, patch).await.map_err(|e| {
            error!(sound = %id, error = %e, "Failed to update sound");
            CoreError::from(e)
        })
    }

    /// Remove a sound record (idempotent) and best-effort delete its payload.
    pub async fn remove_sound(&self, id: &SoundId) -> Result<()> {
        self.sounds.remove(id).await.map_err(|e| {
            error!(sound = %id, error = %e, "Failed to remove sound");
            CoreError::from(e)
        })
    }

    // ------------------------------------------------------------------
    // Recording workflow
    // ------------------------------------------------------------------

    /// Request microphone permission and begin capturing.
    pub async fn start_recording(&self) -> Result<()> {
        Ok(self.recording.lock().await.start().await?)
    }

    /// Stop capturing and finalize the clip.
    pub async fn finish_recording(&self) -> Result<RecordedClip> {
        Ok(self.recording.lock().await.stop().await?)
    }

    /// Persist a finished clip and create its sound record in one step.
    pub async fn create_sound_from_recording(
        &self,
        clip: &RecordedClip,
        title: impl Into<String>,
        description: Option<String>,
        color: Option<String>,
    ) -> Result<SoundRecord> {
        let file_name = clip
            .location
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "recording.m4a".to_string());
        let durable = self
            .sounds
            .save_recording_locally(&clip.location, &file_name)
            .await?;

        let mut new = NewSound::new(title, durable.to_string_lossy())
            .with_duration_seconds(clip.duration_seconds);
        if let Some(description) = description {
            new = new.with_description(description);
        }
        if let Some(color) = color {
            new = new.with_color(color);
        }
        Ok(self.sounds.create(new).await?)
    }

    // ------------------------------------------------------------------
    // Playback
    // ------------------------------------------------------------------

    /// React to the user tapping play on the sound with `id`.
    ///
    /// An unknown id surfaces as `NotFound`. Engine failures are caught here,
    /// logged, and reported as `Ok(None)`: the session is idle and the UI
    /// simply shows no active playback.
    pub async fn toggle_playback(&self, id: &SoundId) -> Result<Option<PlaybackStatus>> {
        let record = self
            .sounds
            .find(id)
            .await?
            .ok_or_else(|| LibraryError::sound_not_found(id))?;

        match self.session.lock().await.request_play(&record).await {
            Ok(status) => Ok(Some(status)),
            Err(e) => {
                error!(sound = %id, error = %e, "Playback request failed");
                Ok(None)
            }
        }
    }

    /// Release any held playback handle (hosting view went away).
    pub async fn stop_playback(&self) {
        self.session.lock().await.teardown().await;
    }

    /// Id of the currently loaded sound, if any.
    pub async fn currently_playing(&self) -> Option<SoundId> {
        self.session.lock().await.current_sound()
    }

    /// Returns `true` if a sound is loaded and actively playing.
    pub async fn is_playing(&self) -> bool {
        self.session.lock().await.is_playing()
    }

    /// Forward one engine completion notification to the session.
    pub async fn handle_audio_completion(&self, handle: AudioHandleId) {
        self.session.lock().await.handle_completion(handle).await;
    }

    /// Spawn a task that forwards engine completion events to the session,
    /// so a clip that finishes naturally clears the "currently playing" id.
    pub fn spawn_completion_listener(self: &Arc<Self>) -> JoinHandle<()> {
        let service = Arc::clone(self);
        let mut rx = self.engine.completions();
        tokio::spawn(async move {
            debug!("Completion listener started");
            loop {
                match rx.recv().await {
                    Ok(handle) => service.handle_audio_completion(handle).await,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Completion listener lagged behind the engine");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            debug!("Completion listener stopped");
        })
    }
}
