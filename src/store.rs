//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::tasks::{TaskList, TaskListHandle};
use crate::theme::Theme;
use crate::timer::Stopwatch;

/// The single state container owned by the app root
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local cache of the remote task table, newest first
    pub tasks: TaskList,
    pub stopwatch: Stopwatch,
    pub theme: Theme,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

impl TaskListHandle for AppStore {
    fn with_list<R>(&self, f: impl FnOnce(&TaskList) -> R) -> R {
        self.tasks().with_untracked(f)
    }

    fn update_list(&self, f: impl FnOnce(&mut TaskList)) {
        self.tasks().update(f);
    }
}
