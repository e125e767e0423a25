use bridge_traits::error::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid input: {field} - {message}")]
    InvalidInput { field: String, message: String },
}

impl LibraryError {
    /// Shorthand for a missing `SoundRecord`.
    pub fn sound_not_found(id: impl ToString) -> Self {
        LibraryError::NotFound {
            entity_type: "SoundRecord".to_string(),
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
