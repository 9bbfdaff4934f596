use rusqlite::ffi;
use thiserror::Error;

/// Errors returned by song store operations.
#[derive(Debug, Error)]
pub enum SongStoreError {
    #[error("Song not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type SongStoreResult<T> = Result<T, SongStoreError>;

impl SongStoreError {
    /// Maps unique/primary key violations to `Conflict`, anything else to `Storage`.
    pub(super) fn from_write(
        err: rusqlite::Error,
        conflict_message: impl FnOnce() -> String,
    ) -> Self {
        let is_key_violation = matches!(
            &err,
            rusqlite::Error::SqliteFailure(failure, _)
                if failure.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
        );
        if is_key_violation {
            SongStoreError::Conflict(conflict_message())
        } else {
            SongStoreError::Storage(err)
        }
    }
}
