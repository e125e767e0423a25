//! # Desktop Bridge Implementations
//!
//! Concrete desktop adapters for the storage bridge traits:
//!
//! - [`TokioFileSystem`](filesystem::TokioFileSystem) - file operations via
//!   `tokio::fs`, rooted in the platform data directory
//! - [`SqliteSettingsStore`](settings::SqliteSettingsStore) - key-value
//!   persistence backed by SQLite
//!
//! Desktop hosts still inject their own [`AudioEngine`](bridge_traits::audio)
//! and [`AudioRecorder`](bridge_traits::audio) implementations; the service
//! builder fails fast when either is missing.

pub mod filesystem;
pub mod settings;

pub use filesystem::TokioFileSystem;
pub use settings::SqliteSettingsStore;
