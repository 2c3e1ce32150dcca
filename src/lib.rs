pub mod api;
pub mod app;
pub mod auth;
pub mod budget;
pub mod codec;
pub mod components;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod goals;
pub mod models;
pub mod nav;
pub mod notify;
pub mod pages;
pub mod predictions;
pub mod refresh;
pub mod session;
pub mod transactions;

use app::{App, AppProps};
use config::AppConfig;

pub fn run() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("api base {}", config.api_base_url);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
