//! Theme Toggle Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::theme::save_theme;

/// Switches between the two display modes and remembers the choice
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    let toggle = move |_| {
        let next = store.theme().get_untracked().toggled();
        store.theme().set(next);
        save_theme(next);
    };

    view! {
        <button class="theme-toggle" on:click=toggle>
            {move || store.theme().get().toggle_label()}
        </button>
    }
}
