#![allow(warnings)]
//! Todo Board Frontend Entry Point

mod models;
mod config;
mod render;
mod controller;
mod browser;
mod logger;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(BoardConfig::default().log_level);
    mount_to_body(App);
}
