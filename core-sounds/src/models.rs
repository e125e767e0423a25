//! Domain models for the sound library
//!
//! Rich domain models with validation and the serde mapping used for the
//! persisted collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// ID Types
// =============================================================================

/// Unique identifier for a sound record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundId(pub Uuid);

impl SoundId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for SoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Entities
// =============================================================================

/// Listing order for the sound collection, keyed on `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recently created records first (the default).
    #[default]
    NewestFirst,
    /// Exact reverse of [`SortOrder::NewestFirst`].
    OldestFirst,
}

/// A persisted sound clip: metadata plus a reference to its payload file.
///
/// `id`, `created_at`, and `audio_location` are immutable after creation;
/// the patch type ([`SoundPatch`]) deliberately has no fields for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundRecord {
    pub id: SoundId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URI/path of the audio payload.
    pub audio_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    /// Display tag chosen by the user; not validated beyond being a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Absent in older persisted collections, so it defaults on read.
    #[serde(default)]
    pub favorite: bool,
}

impl SoundRecord {
    /// Validate record invariants.
    ///
    /// Returns a human-readable message on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.audio_location.is_empty() {
            return Err("audio_location must not be empty".to_string());
        }
        Ok(())
    }
}

/// Create payload for a sound record: everything except the fields the
/// repository assigns (`id`, `created_at`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSound {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub audio_location: String,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub favorite: bool,
}

impl NewSound {
    /// Create a payload with the required fields.
    pub fn new(title: impl Into<String>, audio_location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            audio_location: audio_location.into(),
            duration_seconds: None,
            color: None,
            favorite: false,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a duration in whole seconds.
    pub fn with_duration_seconds(mut self, duration_seconds: u32) -> Self {
        self.duration_seconds = Some(duration_seconds);
        self
    }

    /// Attach a display color tag.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Mark the record as a favorite from the start.
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }
}

/// Partial update for a sound record.
///
/// Only fields set to `Some` are applied; everything else is untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoundPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_seconds: Option<u32>,
    pub color: Option<String>,
    pub favorite: Option<bool>,
}

impl SoundPatch {
    /// Returns `true` if the patch would not change any field.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.duration_seconds.is_none()
            && self.color.is_none()
            && self.favorite.is_none()
    }

    /// Merge the present fields over `record`.
    pub fn apply(&self, record: &mut SoundRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = Some(description.clone());
        }
        if let Some(duration_seconds) = self.duration_seconds {
            record.duration_seconds = Some(duration_seconds);
        }
        if let Some(color) = &self.color {
            record.color = Some(color.clone());
        }
        if let Some(favorite) = self.favorite {
            record.favorite = favorite;
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the duration in whole seconds.
    pub fn duration_seconds(mut self, duration_seconds: u32) -> Self {
        self.duration_seconds = Some(duration_seconds);
        self
    }

    /// Set the display color tag.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the favorite flag.
    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = Some(favorite);
        self
    }
}
