use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no todos found")]
    Empty,

    #[error("todo {0} not found")]
    NotFound(u64),

    #[error("invalid id: {0:?}")]
    InvalidId(String),

    #[error("invalid status: {0:?}")]
    InvalidStatus(String),

    #[error("title must not be empty")]
    InvalidTitle,

    #[error("failed to read {}: {source}", path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("{} is not a valid todo list: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Unwritable { path: PathBuf, source: io::Error },

    #[error("failed to lock {}: {source}", path.display())]
    Lock { path: PathBuf, source: io::Error },
}

impl StoreError {
    /// Errors caused by the caller's input or by the store's contents, as
    /// opposed to storage failures.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            StoreError::Empty
                | StoreError::NotFound(_)
                | StoreError::InvalidId(_)
                | StoreError::InvalidStatus(_)
                | StoreError::InvalidTitle
        )
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
