/// Core error types for Aria Player
use thiserror::Error;

/// Result type alias using `AriaError`
pub type Result<T> = std::result::Result<T, AriaError>;

/// Core error type for Aria Player
#[derive(Error, Debug)]
pub enum AriaError {
    /// Catalog/storage-related errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Playback-related errors
    #[error("Playback error: {0}")]
    Playback(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity that was looked up
        entity: String,
        /// The identifier that produced no result
        id: String,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AriaError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a playback error
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
