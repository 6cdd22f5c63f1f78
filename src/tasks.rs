//! Task List Manager
//!
//! `TaskList` is the local cache of the remote table. `TaskManager` runs the
//! four remote operations and patches the cache only with what the store
//! echoes back; a failed call is logged and leaves the cache untouched.

use std::rc::Rc;

use tracing::{debug, error, info};

use crate::error::{StoreError, StoreResult, TaskError, TaskResult};
use crate::models::{timestamp_now, NewTask, Task, TaskId};
use crate::remote::TaskStore;

/// Ordered task rows, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Replace everything with a fresh load
    pub fn replace_all(&mut self, rows: Vec<Task>) {
        self.tasks = rows;
    }

    /// Put freshly inserted rows in front
    pub fn prepend(&mut self, rows: Vec<Task>) {
        self.tasks.splice(0..0, rows);
    }

    /// Swap in the store's copy of a row. Returns false if the id is gone.
    pub fn replace(&mut self, row: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == row.id) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        Some(self.tasks.remove(index))
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Id of the row currently rendered at `index`
    pub fn id_at(&self, index: usize) -> Option<TaskId> {
        self.tasks.get(index).map(|t| t.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.iter().filter(|t| t.completed).count()
    }
}

/// Access to whatever the task list is when an async call completes
pub trait TaskListHandle: Clone + 'static {
    fn with_list<R>(&self, f: impl FnOnce(&TaskList) -> R) -> R;
    fn update_list(&self, f: impl FnOnce(&mut TaskList));
}

pub struct TaskManager<S, H> {
    store: Rc<S>,
    list: H,
}

impl<S, H: Clone> Clone for TaskManager<S, H> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            list: self.list.clone(),
        }
    }
}

impl<S: TaskStore, H: TaskListHandle> TaskManager<S, H> {
    pub fn new(store: S, list: H) -> Self {
        Self {
            store: Rc::new(store),
            list,
        }
    }

    /// Fetch all rows and rebuild the list. On failure the list keeps its contents.
    pub async fn load(&self) -> TaskResult<usize> {
        let rows = logged("load", None, self.store.list().await)?;
        let count = rows.len();
        self.list.update_list(|list| list.replace_all(rows));
        info!(count, "loaded tasks");
        Ok(count)
    }

    /// Insert a task. Blank titles are rejected without contacting the store.
    pub async fn create(&self, title: &str, description: &str) -> TaskResult<()> {
        let new_task = NewTask::from_input(title, description, timestamp_now()).ok_or(TaskError::EmptyTitle)?;
        let rows = logged("create", None, self.store.insert(&new_task).await)?;
        debug!(ids = ?rows.iter().map(|t| t.id).collect::<Vec<_>>(), "created task");
        self.list.update_list(|list| list.prepend(rows));
        Ok(())
    }

    /// Flip the completion flag of task `id`. Returns the stored flag.
    pub async fn toggle(&self, id: TaskId) -> TaskResult<bool> {
        let completed = self
            .list
            .with_list(|list| list.get(id).map(|t| t.completed))
            .ok_or(TaskError::UnknownTask(id))?;

        let rows = logged("toggle", Some(id), self.store.set_completed(id, !completed).await)?;
        let echoed = rows.into_iter().find(|t| t.id == id).ok_or(StoreError::MissingRow(id));
        let row = logged("toggle", Some(id), echoed)?;
        let stored = row.completed;

        self.list.update_list(|list| {
            if !list.replace(row) {
                debug!(id, "toggled task no longer listed");
            }
        });
        debug!(id, completed = stored, "toggled task");
        Ok(stored)
    }

    /// Toggle the task rendered at `index`
    pub async fn toggle_at(&self, index: usize) -> TaskResult<bool> {
        let id = self.id_at(index)?;
        self.toggle(id).await
    }

    /// Delete task `id` remotely, then drop it locally
    pub async fn delete(&self, id: TaskId) -> TaskResult<()> {
        if !self.list.with_list(|list| list.get(id).is_some()) {
            return Err(TaskError::UnknownTask(id));
        }
        logged("delete", Some(id), self.store.delete(id).await)?;
        self.list.update_list(|list| {
            list.remove(id);
        });
        debug!(id, "deleted task");
        Ok(())
    }

    /// Delete the task rendered at `index`
    pub async fn delete_at(&self, index: usize) -> TaskResult<()> {
        let id = self.id_at(index)?;
        self.delete(id).await
    }

    fn id_at(&self, index: usize) -> TaskResult<TaskId> {
        self.list
            .with_list(|list| list.id_at(index))
            .ok_or(TaskError::NoTaskAt(index))
    }
}

/// Log a failed store call; no retry, the caller just stops.
fn logged<T>(operation: &'static str, id: Option<TaskId>, result: StoreResult<T>) -> TaskResult<T> {
    result.map_err(|err| {
        error!(operation, ?id, error = %err, "remote store call failed");
        TaskError::Store(err)
    })
}
