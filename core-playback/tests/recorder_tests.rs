//! Tests for the recording controller lifecycle and duration measurement.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use bridge_traits::audio::{AudioEngine, AudioHandleId, AudioRecorder, PermissionStatus};
use bridge_traits::error::{BridgeError, Result as BridgeResult};
use bridge_traits::time::Clock;
use chrono::{DateTime, Duration, TimeZone, Utc};
use core_playback::{PlaybackError, RecordingController};
use tokio::sync::broadcast;

// ============================================================================
// Fixtures
// ============================================================================

struct MockRecorder {
    prepares: Mutex<u32>,
    starts: Mutex<u32>,
    output: PathBuf,
}

impl MockRecorder {
    fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            prepares: Mutex::new(0),
            starts: Mutex::new(0),
            output: output.into(),
        }
    }

    fn prepare_count(&self) -> u32 {
        *self.prepares.lock().unwrap()
    }
}

#[async_trait]
impl AudioRecorder for MockRecorder {
    async fn prepare(&self) -> BridgeResult<()> {
        *self.prepares.lock().unwrap() += 1;
        Ok(())
    }

    async fn start(&self) -> BridgeResult<()> {
        *self.starts.lock().unwrap() += 1;
        Ok(())
    }

    async fn stop_and_finalize(&self) -> BridgeResult<PathBuf> {
        Ok(self.output.clone())
    }
}

struct ProbeEngine {
    permission: PermissionStatus,
    probed_duration: Option<StdDuration>,
    fail_load: bool,
    unloads: Mutex<Vec<AudioHandleId>>,
    completion_tx: broadcast::Sender<AudioHandleId>,
}

impl ProbeEngine {
    fn new() -> Self {
        let (completion_tx, _) = broadcast::channel(8);
        Self {
            permission: PermissionStatus::Granted,
            probed_duration: Some(StdDuration::from_secs(3)),
            fail_load: false,
            unloads: Mutex::new(Vec::new()),
            completion_tx,
        }
    }

    fn denying_permission(mut self) -> Self {
        self.permission = PermissionStatus::Denied;
        self
    }

    fn with_probed_duration(mut self, duration: Option<StdDuration>) -> Self {
        self.probed_duration = duration;
        self
    }

    fn failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    fn unload_count(&self) -> usize {
        self.unloads.lock().unwrap().len()
    }
}

#[async_trait]
impl AudioEngine for ProbeEngine {
    async fn request_permission(&self) -> BridgeResult<PermissionStatus> {
        Ok(self.permission)
    }

    async fn load(&self, location: &str) -> BridgeResult<AudioHandleId> {
        if self.fail_load {
            return Err(BridgeError::OperationFailed(format!(
                "cannot load {location}"
            )));
        }
        Ok(AudioHandleId::new())
    }

    async fn play(&self, _handle: AudioHandleId) -> BridgeResult<()> {
        Ok(())
    }

    async fn pause(&self, _handle: AudioHandleId) -> BridgeResult<()> {
        Ok(())
    }

    async fn unload(&self, handle: AudioHandleId) -> BridgeResult<()> {
        self.unloads.lock().unwrap().push(handle);
        Ok(())
    }

    async fn duration(&self, _handle: AudioHandleId) -> BridgeResult<Option<StdDuration>> {
        Ok(self.probed_duration)
    }

    fn completions(&self) -> broadcast::Receiver<AudioHandleId> {
        self.completion_tx.subscribe()
    }
}

struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()),
        }
    }

    fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

fn controller(engine: ProbeEngine) -> (Arc<MockRecorder>, Arc<ProbeEngine>, Arc<ManualClock>, RecordingController) {
    let recorder = Arc::new(MockRecorder::new("/tmp/clip.m4a"));
    let engine = Arc::new(engine);
    let clock = Arc::new(ManualClock::new());
    let ctrl = RecordingController::new(recorder.clone(), engine.clone(), clock.clone());
    (recorder, engine, clock, ctrl)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn denied_permission_aborts_before_prepare() {
    let (recorder, _engine, _clock, mut ctrl) = controller(ProbeEngine::new().denying_permission());

    let err = ctrl.start().await.unwrap_err();
    assert!(matches!(err, PlaybackError::PermissionDenied));
    assert_eq!(recorder.prepare_count(), 0);
    assert!(!ctrl.is_recording());
}

#[tokio::test]
async fn stop_without_start_is_an_error() {
    let (_recorder, _engine, _clock, mut ctrl) = controller(ProbeEngine::new());

    let err = ctrl.stop().await.unwrap_err();
    assert!(matches!(err, PlaybackError::NotRecording));
}

#[tokio::test]
async fn stop_measures_duration_through_the_engine() {
    let (_recorder, engine, _clock, mut ctrl) =
        controller(ProbeEngine::new().with_probed_duration(Some(StdDuration::from_secs(7))));

    ctrl.start().await.unwrap();
    assert!(ctrl.is_recording());
    let clip = ctrl.stop().await.unwrap();

    assert_eq!(clip.location, PathBuf::from("/tmp/clip.m4a"));
    assert_eq!(clip.duration_seconds, 7);
    // The probe handle was released.
    assert_eq!(engine.unload_count(), 1);
    assert!(!ctrl.is_recording());
}

#[tokio::test]
async fn probe_failure_falls_back_to_capture_time() {
    let (_recorder, _engine, clock, mut ctrl) = controller(ProbeEngine::new().failing_load());

    ctrl.start().await.unwrap();
    clock.advance(Duration::seconds(5));
    let clip = ctrl.stop().await.unwrap();

    assert_eq!(clip.duration_seconds, 5);
}

#[tokio::test]
async fn unknown_duration_falls_back_to_capture_time() {
    let (_recorder, _engine, clock, mut ctrl) =
        controller(ProbeEngine::new().with_probed_duration(None));

    ctrl.start().await.unwrap();
    clock.advance(Duration::seconds(2));
    let clip = ctrl.stop().await.unwrap();

    assert_eq!(clip.duration_seconds, 2);
}

#[tokio::test]
async fn duration_is_never_zero() {
    let (_recorder, _engine, _clock, mut ctrl) =
        controller(ProbeEngine::new().with_probed_duration(Some(StdDuration::from_millis(200))));

    ctrl.start().await.unwrap();
    let clip = ctrl.stop().await.unwrap();

    assert_eq!(clip.duration_seconds, 1);
}
