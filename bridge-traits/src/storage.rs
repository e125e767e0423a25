//! Storage and File System Abstractions
//!
//! Provides platform-agnostic traits for the two persistence capabilities the
//! soundboard core consumes: a key-value settings store holding the serialized
//! sound collection, and a file system for durable copies of recorded clips.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Key-value persistence trait
///
/// Abstracts platform-specific preferences/settings storage:
/// - iOS: UserDefaults
/// - Android: SharedPreferences / DataStore
/// - Desktop: SQLite or config files
///
/// The core stores the whole sound collection as one JSON string under a
/// single well-known key, so string values are the only payload type needed.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Store a string value under `key`, replacing any previous value.
    async fn set_string(&self, key: &str, value: &str) -> Result<()>;

    /// Retrieve the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key doesn't exist.
    async fn get_string(&self, key: &str) -> Result<Option<String>>;

    /// Delete the value stored under `key`, if any.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Check whether a value exists without retrieving it.
    async fn has_key(&self, key: &str) -> Result<bool> {
        Ok(self.get_string(key).await?.is_some())
    }
}

/// File system access trait
///
/// Abstracts file operations on the app's private storage area:
/// - Desktop: a directory under the platform data dir
/// - iOS/Android: the sandboxed documents directory
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::FileSystemAccess;
///
/// async fn persist_clip(fs: &dyn FileSystemAccess, tmp: &Path) -> Result<PathBuf> {
///     let root = fs.get_documents_directory().await?;
///     let dest = root.join("clip.m4a");
///     fs.copy_file(tmp, &dest).await?;
///     Ok(dest)
/// }
/// ```
#[async_trait]
pub trait FileSystemAccess: Send + Sync {
    /// Get the application's private documents directory.
    ///
    /// Files placed here survive app restarts and are owned by the
    /// application; this is the root that payload cleanup is scoped to.
    async fn get_documents_directory(&self) -> Result<PathBuf>;

    /// Check if a file or directory exists.
    async fn exists(&self, path: &Path) -> Result<bool>;

    /// Create a directory and all parent directories if they don't exist.
    async fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Copy a file, creating the destination's parent directory if needed.
    async fn copy_file(&self, from: &Path, to: &Path) -> Result<()>;

    /// Delete a file.
    ///
    /// Deleting a missing file is an error; callers that want idempotent
    /// cleanup swallow the failure on their side.
    async fn delete_file(&self, path: &Path) -> Result<()>;
}
