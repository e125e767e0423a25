use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },

    #[error("Library error: {0}")]
    Library(#[from] core_sounds::LibraryError),

    #[error("Playback error: {0}")]
    Playback(#[from] core_playback::PlaybackError),
}

impl CoreError {
    pub(crate) fn capability_missing(capability: &str, message: &str) -> Self {
        CoreError::CapabilityMissing {
            capability: capability.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
