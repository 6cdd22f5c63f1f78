//! In-memory task store for tests, with failure injection and call counting.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::TaskStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{NewTask, Task, TaskId};

#[derive(Default)]
pub struct MemoryStore {
    rows: RefCell<Vec<Task>>,
    next_id: Cell<TaskId>,
    failing: Cell<bool>,
    calls: Cell<usize>,
}

impl MemoryStore {
    pub fn with_rows(rows: Vec<Task>) -> Self {
        let next_id = rows.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            rows: RefCell::new(rows),
            next_id: Cell::new(next_id),
            ..Default::default()
        }
    }

    /// Make every following call fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Number of store calls made so far, failed ones included
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn rows(&self) -> Vec<Task> {
        self.rows.borrow().clone()
    }

    fn enter(&self) -> StoreResult<()> {
        self.calls.set(self.calls.get() + 1);
        if self.failing.get() {
            Err(StoreError::Transport("simulated outage".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl TaskStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        self.enter()?;
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn insert(&self, task: &NewTask) -> StoreResult<Vec<Task>> {
        self.enter()?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let row = Task {
            id,
            text: task.text.clone(),
            description: task.description.clone(),
            completed: task.completed,
            time: task.time.clone(),
        };
        self.rows.borrow_mut().push(row.clone());
        Ok(vec![row])
    }

    async fn set_completed(&self, id: TaskId, completed: bool) -> StoreResult<Vec<Task>> {
        self.enter()?;
        let mut rows = self.rows.borrow_mut();
        let updated = rows
            .iter_mut()
            .filter(|t| t.id == id)
            .map(|t| {
                t.completed = completed;
                t.clone()
            })
            .collect();
        Ok(updated)
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        self.enter()?;
        self.rows.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }
}
