//! TaskClock Frontend App
//!
//! Root component: clock, task form and stopwatch panels above the task list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::{debug, warn};

use crate::components::{ClockPanel, NewTaskForm, StopwatchPanel, TaskListView, ThemeToggle};
use crate::config::StoreConfig;
use crate::context::AppContext;
use crate::remote::RestStore;
use crate::store::{AppState, AppStateStoreFields};
use crate::tasks::TaskManager;
use crate::theme::load_theme;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new(load_theme()));
    provide_context(store);

    let config = StoreConfig::from_build_env();
    if !config.is_complete() {
        warn!(url = %config.url, "no store API key configured, remote calls will be rejected");
    }
    let manager = TaskManager::new(RestStore::new(config), store);

    let ctx = AppContext::new(manager, signal(0u32));
    provide_context(ctx);

    // Load tasks on mount and on every refresh
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        debug!(trigger, "loading tasks");
        let manager = ctx.manager();
        spawn_local(async move {
            let _ = manager.load().await;
        });
    });

    view! {
        <div class=move || store.theme().get().class_name()>
            <header class="app-header">
                <h1>"TaskClock"</h1>
                <ThemeToggle />
            </header>

            <div class="panels">
                <ClockPanel />
                <NewTaskForm />
                <StopwatchPanel />
            </div>

            <TaskListView />
        </div>
    }
}
