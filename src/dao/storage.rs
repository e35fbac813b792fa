use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the score log failed or the backend could not be reached.
    #[error("storage read failed: {message}")]
    Read {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// Appending to the score log failed; nothing was persisted.
    #[error("storage write failed: {message}")]
    Write {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct a read error from any backend failure.
    pub fn read(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Read {
            message,
            source: Box::new(source),
        }
    }

    /// Construct a write error from any backend failure.
    pub fn write(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Write {
            message,
            source: Box::new(source),
        }
    }
}
