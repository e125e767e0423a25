//! Sound repository trait and key-value-backed implementation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bridge_traits::storage::{FileSystemAccess, SettingsStore};
use bridge_traits::time::Clock;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{LibraryError, Result};
use crate::models::{NewSound, SortOrder, SoundId, SoundPatch, SoundRecord};

/// Well-known settings key the whole collection is serialized under.
pub const SOUNDS_STORAGE_KEY: &str = "sounds";

/// Sound repository interface for data access operations
#[async_trait]
pub trait SoundRepository: Send + Sync {
    /// List all sound records sorted by creation time.
    ///
    /// An empty collection yields an empty vec, never an error.
    async fn list(&self, order: SortOrder) -> Result<Vec<SoundRecord>>;

    /// Find a sound record by its ID
    ///
    /// # Returns
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if not found
    async fn find(&self, id: &SoundId) -> Result<Option<SoundRecord>>;

    /// Create a new sound record.
    ///
    /// Assigns `id` and `created_at`, prepends the record to the collection,
    /// and persists it.
    ///
    /// # Errors
    /// Returns `InvalidInput` when the title is blank, or a storage error.
    async fn create(&self, new: NewSound) -> Result<SoundRecord>;

    /// Apply a partial update to an existing record.
    ///
    /// Fields absent from the patch are untouched.
    ///
    /// # Errors
    /// Returns `NotFound` when no record has the given id; the collection is
    /// left unmodified in that case.
    async fn update(&self, id: &SoundId, patch: SoundPatch) -> Result<SoundRecord>;

    /// Remove a record by id.
    ///
    /// Idempotent: removing an unknown id succeeds as a no-op. When the
    /// record's payload file lives inside the private documents root it is
    /// deleted best-effort; cleanup failures are logged and swallowed.
    async fn remove(&self, id: &SoundId) -> Result<()>;

    /// Copy a transient recording into durable storage.
    ///
    /// The destination filename is `desired_name` prefixed with the current
    /// Unix-millisecond timestamp to keep concurrent saves from colliding.
    /// Does not create a record; callers pass the returned location to
    /// [`SoundRepository::create`].
    async fn save_recording_locally(&self, source: &Path, desired_name: &str) -> Result<PathBuf>;
}

/// Key-value-backed implementation of [`SoundRepository`].
///
/// The whole collection is one JSON array under [`SOUNDS_STORAGE_KEY`]; every
/// mutation is a full read-modify-write cycle. The cycle is guarded by an
/// async mutex so overlapping mutations within one process cannot observe
/// stale state and drop each other's writes. Reads do not take the lock.
pub struct KvSoundRepository {
    settings: Arc<dyn SettingsStore>,
    filesystem: Arc<dyn FileSystemAccess>,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl KvSoundRepository {
    /// Create a repository over the given storage bridges.
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        filesystem: Arc<dyn FileSystemAccess>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            settings,
            filesystem,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<Vec<SoundRecord>> {
        match self.settings.get_string(SOUNDS_STORAGE_KEY).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    async fn write_all(&self, records: &[SoundRecord]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.settings.set_string(SOUNDS_STORAGE_KEY, &json).await?;
        Ok(())
    }

    /// Delete the payload file behind `record` if it lives inside the
    /// private documents root.
    async fn cleanup_payload(&self, record: &SoundRecord) -> Result<()> {
        let root = self.filesystem.get_documents_directory().await?;
        let payload = Path::new(&record.audio_location);
        if !payload.starts_with(&root) {
            debug!(id = %record.id, "Payload outside documents root, skipping cleanup");
            return Ok(());
        }
        self.filesystem.delete_file(payload).await?;
        debug!(id = %record.id, path = %payload.display(), "Deleted payload file");
        Ok(())
    }
}

#[async_trait]
impl SoundRepository for KvSoundRepository {
    async fn list(&self, order: SortOrder) -> Result<Vec<SoundRecord>> {
        let mut records = self.read_all().await?;
        // Stable sort: ties keep stored order, which is insertion order
        // because create prepends.
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if order == SortOrder::OldestFirst {
            records.reverse();
        }
        Ok(records)
    }

    async fn find(&self, id: &SoundId) -> Result<Option<SoundRecord>> {
        let records = self.read_all().await?;
        Ok(records.into_iter().find(|r| r.id == *id))
    }

    async fn create(&self, new: NewSound) -> Result<SoundRecord> {
        let record = SoundRecord {
            id: SoundId::new(),
            title: new.title,
            description: new.description,
            audio_location: new.audio_location,
            duration_seconds: new.duration_seconds,
            color: new.color,
            created_at: self.clock.now(),
            favorite: new.favorite,
        };
        record
            .validate()
            .map_err(|message| LibraryError::InvalidInput {
                field: "sound".to_string(),
                message,
            })?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.read_all().await?;
        records.insert(0, record.clone());
        self.write_all(&records).await?;

        debug!(id = %record.id, title = %record.title, "Created sound record");
        Ok(record)
    }

    async fn update(&self, id: &SoundId, patch: SoundPatch) -> Result<SoundRecord> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_all().await?;
        let existing = records
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or_else(|| LibraryError::sound_not_found(id))?;

        let mut updated = existing.clone();
        patch.apply(&mut updated);
        updated
            .validate()
            .map_err(|message| LibraryError::InvalidInput {
                field: "sound".to_string(),
                message,
            })?;
        *existing = updated.clone();
        self.write_all(&records).await?;

        debug!(id = %id, "Updated sound record");
        Ok(updated)
    }

    async fn remove(&self, id: &SoundId) -> Result<()> {
        let removed = {
            let _guard = self.write_lock.lock().await;
            let mut records = self.read_all().await?;
            let Some(position) = records.iter().position(|r| r.id == *id) else {
                debug!(id = %id, "Remove of unknown sound id, nothing to do");
                return Ok(());
            };
            let removed = records.remove(position);
            self.write_all(&records).await?;
            removed
        };

        debug!(id = %id, "Removed sound record");
        if let Err(e) = self.cleanup_payload(&removed).await {
            warn!(id = %id, error = %e, "Best-effort payload cleanup failed");
        }
        Ok(())
    }

    async fn save_recording_locally(&self, source: &Path, desired_name: &str) -> Result<PathBuf> {
        let root = self.filesystem.get_documents_directory().await?;
        let file_name = format!("{}-{}", self.clock.unix_timestamp_millis(), desired_name);
        let dest = root.join(file_name);
        self.filesystem.copy_file(source, &dest).await?;

        debug!(from = %source.display(), to = %dest.display(), "Saved recording into documents root");
        Ok(dest)
    }
}
