//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::remote::RestStore;
use crate::store::AppStore;
use crate::tasks::TaskManager;

/// Task manager wired to the REST store and the app store
pub type AppTaskManager = TaskManager<RestStore, AppStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Kept in local storage: the REST client is not `Send`
    manager: StoredValue<AppTaskManager, LocalStorage>,
    /// Trigger to reload tasks from the store - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from the store - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(manager: AppTaskManager, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            manager: StoredValue::new_local(manager),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn manager(&self) -> AppTaskManager {
        self.manager.get_value()
    }

    /// Trigger a reload of tasks
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
