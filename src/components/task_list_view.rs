//! Task List View Component
//!
//! Scrollable list of tasks, newest first.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let rows = move || store.tasks().with(|list| list.as_slice().to_vec());
    let is_empty = move || store.tasks().with(|list| list.is_empty());

    view! {
        <section class="task-list">
            <div class="task-list-header">
                <h2>"Tasks"</h2>
                <button class="refresh-btn" on:click=move |_| ctx.reload()>"Refresh"</button>
            </div>

            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="task-list-empty">"Nothing to do yet."</p> }
            >
                <ul class="task-rows">
                    <For
                        each=rows
                        // completed is part of the key so a toggle re-renders the row
                        key=|task| (task.id, task.completed)
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>

            <p class="task-count">
                {move || store.tasks().with(|list| format!("{} tasks, {} done", list.len(), list.completed_count()))}
            </p>
        </section>
    }
}
