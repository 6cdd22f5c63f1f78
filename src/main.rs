//! TaskClock Frontend Entry Point

mod models;
mod error;
mod config;
mod remote;
mod tasks;
mod timer;
mod theme;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(tracing::Level::DEBUG);
    mount_to_body(App);
}
