/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind (e.g. "track", "album")
        entity: &'static str,
        /// Identifier that missed
        id: i64,
    },

    /// Row contained a value the domain type cannot hold
    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    /// Migration error
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

impl From<StorageError> for aria_core::CoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => aria_core::CoreError::not_found(entity, id),
            other => aria_core::CoreError::database(other.to_string()),
        }
    }
}
