//! New Task Form Component
//!
//! Title plus optional description. Inputs are cleared only once the store
//! has accepted the task, so a failed submit can simply be retried.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get_untracked();
        let desc = description.get_untracked();
        let manager = ctx.manager();

        spawn_local(async move {
            if manager.create(&text, &desc).await.is_ok() {
                set_title.update(|field| clear_if_submitted(field, &text));
                set_description.update(|field| clear_if_submitted(field, &desc));
            }
        });
    };

    view! {
        <section class="panel new-task-panel">
            <h2>"New task"</h2>
            <form class="new-task-form" on:submit=create_task>
                <input
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || title.get().trim().is_empty()>"Add"</button>
            </form>
        </section>
    }
}

/// Clear a form field unless the user edited it while the create was in flight
fn clear_if_submitted(field: &mut String, submitted: &str) {
    if field == submitted {
        field.clear();
    }
}
