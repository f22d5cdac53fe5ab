//! Travel Guide Frontend Entry Point

mod app;
mod card;
mod category;
mod components;
mod config;
mod data;
mod error;
mod logging;
mod map;
mod models;
mod price;
mod section;
mod sidebar;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
