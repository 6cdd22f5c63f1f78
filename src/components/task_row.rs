//! Task Row Component
//!
//! One task in the list: click to toggle completion, × to delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Task;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let Task {
        id,
        text,
        description,
        completed,
        time,
    } = task;

    let toggle = move |_| {
        let manager = ctx.manager();
        spawn_local(async move {
            let _ = manager.toggle(id).await;
        });
    };

    let delete = Callback::new(move |_: ()| {
        let manager = ctx.manager();
        spawn_local(async move {
            let _ = manager.delete(id).await;
        });
    });

    view! {
        <li class=if completed { "task-row completed" } else { "task-row" } on:click=toggle>
            <span class="task-check">{if completed { "☑" } else { "☐" }}</span>
            <div class="task-body">
                <span class="task-text">{text}</span>
                {(!description.is_empty()).then(move || view! {
                    <p class="task-description">{description}</p>
                })}
                <span class="task-time">{time}</span>
            </div>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=delete />
        </li>
    }
}
