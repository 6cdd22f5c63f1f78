//! Clock Panel Component
//!
//! Wall-clock display refreshed once a second while mounted.

use leptos::prelude::*;

use crate::timer::{ClockReading, IntervalTicker, TICK_MS};

#[component]
pub fn ClockPanel() -> impl IntoView {
    let (reading, set_reading) = signal(ClockReading::now());

    let ticker = StoredValue::new_local(IntervalTicker::default());
    ticker.update_value(|t| t.start(TICK_MS, move || set_reading.set(ClockReading::now())));
    on_cleanup(move || {
        ticker.try_update_value(|t| t.stop());
    });

    view! {
        <section class="panel clock-panel">
            <h2>"Clock"</h2>
            <div class="clock-time">{move || reading.get().time}</div>
            <div class="clock-date">{move || reading.get().date}</div>
        </section>
    }
}
