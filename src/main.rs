#![allow(warnings)]
//! Todo Widget Frontend Entry Point

mod models;
mod error;
mod config;
mod logger;
mod store;
mod handlers;
mod feedback;
mod context;
mod components;
mod app;


use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = WidgetConfig::from_location();
    logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
