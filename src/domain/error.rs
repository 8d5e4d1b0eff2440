//! Error taxonomy for link creation and resolution.
//!
//! Repositories report collisions as [`LinkError::DuplicateCode`] and every
//! other fault as [`LinkError::Storage`]. Services add the input and lookup
//! failures on top. Callers can always tell "retry with a new code" apart from
//! "the store is broken".

use std::time::Duration;

/// Errors produced by the link store and the services built on it.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("original URL cannot be empty")]
    EmptyUrl,

    #[error("code cannot be empty")]
    EmptyCode,

    /// The store already holds a record with this code.
    ///
    /// Recovered inside the shortening service, never shown to clients.
    #[error("short code {0} is already taken")]
    DuplicateCode(String),

    #[error("no free short code found after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },

    #[error("short code {0} not found")]
    CodeNotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Faults of the underlying store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage call timed out after {0:?}")]
    Timeout(Duration),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for LinkError {
    fn from(error: sqlx::Error) -> Self {
        LinkError::Storage(StorageError::Database(error))
    }
}

impl LinkError {
    /// Returns true for failures caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LinkError::EmptyUrl | LinkError::EmptyCode | LinkError::CodeNotFound(_)
        )
    }
}
