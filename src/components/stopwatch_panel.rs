//! Stopwatch Panel Component
//!
//! Start/Pause/Reset controls over the stopwatch in the app store. The
//! one-second ticker only exists while the stopwatch is running.

use leptos::prelude::*;
use tracing::debug;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::timer::{IntervalTicker, TICK_MS};

#[component]
pub fn StopwatchPanel() -> impl IntoView {
    let store = use_app_store();
    let running = Memo::new(move |_| store.stopwatch().get().is_running());

    // Recreate the ticker whenever the running flag flips
    let ticker = StoredValue::new_local(IntervalTicker::default());
    Effect::new(move |_| {
        let running = running.get();
        ticker.update_value(|t| {
            t.run_while(running, TICK_MS, move || store.stopwatch().update(|sw| sw.tick()));
            debug!(running, active = t.is_active(), "stopwatch ticker");
        });
    });
    on_cleanup(move || {
        ticker.try_update_value(|t| t.stop());
    });

    let start_pause = move |_| {
        store.stopwatch().update(|sw| {
            if sw.is_running() {
                sw.pause();
            } else {
                sw.start();
            }
        });
    };
    let reset = move |_| store.stopwatch().update(|sw| sw.reset());

    view! {
        <section class="panel stopwatch-panel">
            <h2>"Stopwatch"</h2>
            <div class="stopwatch-display">{move || store.stopwatch().get().display()}</div>
            <div class="stopwatch-controls">
                <button
                    class=move || if running.get() { "stopwatch-btn running" } else { "stopwatch-btn" }
                    on:click=start_pause
                >
                    {move || if running.get() { "Pause" } else { "Start" }}
                </button>
                <button class="stopwatch-btn" on:click=reset>"Reset"</button>
            </div>
        </section>
    }
}
