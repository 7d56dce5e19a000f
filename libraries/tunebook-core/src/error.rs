/// Core error types for Tunebook
use thiserror::Error;

/// Result type alias using `TunebookError`
pub type Result<T> = std::result::Result<T, TunebookError>;

/// Core error type for Tunebook
#[derive(Error, Debug)]
pub enum TunebookError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Corpus parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl TunebookError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
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

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for TunebookError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
