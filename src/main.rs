//! Feedhub Frontend Entry Point

mod app;
mod components;
mod context;
mod dashboard;
mod local_storage;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    browser_logger::init(LevelFilter::Debug);
    mount_to_body(App);
}
