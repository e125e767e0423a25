//! File System Access Implementation using Tokio

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    storage::FileSystemAccess,
};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Tokio-based file system implementation
///
/// The documents root defaults to a `soundboard` directory under the platform
/// data dir and is created lazily on first access.
pub struct TokioFileSystem {
    documents_dir: PathBuf,
}

impl TokioFileSystem {
    /// Create a file system accessor rooted in the default data directory.
    pub fn new() -> Self {
        let documents_dir = dirs::data_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".local")
                    .join("share")
            })
            .join("soundboard");

        Self { documents_dir }
    }

    /// Create a file system accessor with a custom documents root.
    pub fn with_documents_directory(documents_dir: PathBuf) -> Self {
        Self { documents_dir }
    }

    fn map_io_error(e: std::io::Error) -> BridgeError {
        BridgeError::Io(e)
    }
}

impl Default for TokioFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileSystemAccess for TokioFileSystem {
    async fn get_documents_directory(&self) -> Result<PathBuf> {
        if !self.documents_dir.exists() {
            fs::create_dir_all(&self.documents_dir)
                .await
                .map_err(Self::map_io_error)?;
            debug!(path = ?self.documents_dir, "Created documents directory");
        }
        Ok(self.documents_dir.clone())
    }

    async fn exists(&self, path: &Path) -> Result<bool> {
        Ok(fs::try_exists(path).await.map_err(Self::map_io_error)?)
    }

    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).await.map_err(Self::map_io_error)?;
        debug!(path = ?path, "Created directory");
        Ok(())
    }

    async fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(Self::map_io_error)?;
        }
        fs::copy(from, to).await.map_err(Self::map_io_error)?;
        debug!(from = ?from, to = ?to, "Copied file");
        Ok(())
    }

    async fn delete_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).await.map_err(Self::map_io_error)?;
        debug!(path = ?path, "Deleted file");
        Ok(())
    }
}
