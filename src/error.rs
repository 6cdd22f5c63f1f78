//! Error Types
//!
//! Remote store failures and task operation outcomes.

use thiserror::Error;

use crate::models::TaskId;

pub type StoreResult<T> = Result<T, StoreError>;

/// A remote store operation failed.
///
/// Every variant is the same failure for callers; the variant only says where
/// the message came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("remote operation failed: {0}")]
    Transport(String),
    #[error("remote operation failed: {status}: {message}")]
    Status { status: u16, message: String },
    #[error("remote operation failed: unreadable response: {0}")]
    Decode(String),
    #[error("remote operation failed: no row returned for task {0}")]
    MissingRow(TaskId),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}

/// Why a task operation did not change the list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error("no task with id {0}")]
    UnknownTask(TaskId),
    #[error("no task at position {0}")]
    NoTaskAt(usize),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type TaskResult<T> = Result<T, TaskError>;
