//! Chat Widget Entry Point

mod models;
mod config;
mod flash;
mod transcript;
mod store;
mod commands;
mod components;
mod bootstrap;
mod app;

use app::ChatWidget;
use bootstrap::PageBootstrap;
use leptos::mount::{mount_to, mount_to_body};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let PageBootstrap { root, config, username, flashes } = PageBootstrap::read();
    let widget = move || view! { <ChatWidget config=config username=username flashes=flashes /> };

    match root {
        Some(root) => mount_to(root, widget).forget(),
        None => mount_to_body(widget),
    }
}
