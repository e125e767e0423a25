//! # Sound Library Module
//!
//! Owns the durable sound collection and provides the repository pattern for
//! data access.
//!
//! ## Overview
//!
//! This module manages:
//! - The `SoundRecord` domain model and its create/patch input types
//! - CRUD over the collection, serialized as one JSON array under a single
//!   well-known settings key
//! - Durable storage of recorded payload files, and best-effort cleanup of a
//!   record's payload on removal

pub mod error;
pub mod models;
pub mod repository;

pub use error::{LibraryError, Result};
pub use models::{NewSound, SortOrder, SoundId, SoundPatch, SoundRecord};
pub use repository::{KvSoundRepository, SoundRepository, SOUNDS_STORAGE_KEY};
