//! Remote Store
//!
//! The four table operations the app consumes, behind one trait so the
//! task manager can run against the REST client or an in-memory double.

mod rest;
#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{NewTask, Task, TaskId};

pub use rest::RestStore;

/// Authoritative task table.
///
/// Futures are `?Send`: everything runs on the browser's single event loop.
#[async_trait(?Send)]
pub trait TaskStore {
    /// All rows, newest (highest id) first
    async fn list(&self) -> StoreResult<Vec<Task>>;

    /// Insert one row, returning the stored row(s)
    async fn insert(&self, task: &NewTask) -> StoreResult<Vec<Task>>;

    /// Set the completion flag of one row, returning the updated row(s)
    async fn set_completed(&self, id: TaskId, completed: bool) -> StoreResult<Vec<Task>>;

    /// Delete one row by id
    async fn delete(&self, id: TaskId) -> StoreResult<()>;
}
