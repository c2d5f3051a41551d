//! HelpDesk Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod store;
mod ticket_view;

use app::App;
use api::HelpDeskApi;
use config::{AppConfig, DEFAULT_API_URL};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = rolling_logger::init(config.log_level) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }

    let api = HelpDeskApi::new(&config.api_base_url).or_else(|e| {
        log::error!("[APP] {}, falling back to {}", e, DEFAULT_API_URL);
        HelpDeskApi::new(DEFAULT_API_URL)
    });

    match api {
        Ok(api) => {
            log::info!("[APP] Using API at {}", api.base_url());
            let notice_timeout = config.notice_timeout;
            mount_to_body(move || view! { <App api=api.clone() notice_timeout=notice_timeout /> });
        }
        Err(e) => log::error!("[APP] Cannot start: {}", e),
    }
}
