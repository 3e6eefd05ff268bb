//! Dreams Frontend Entry Point

mod api;
mod app;
mod color;
mod components;
mod config;
mod context;
mod favorite;
mod form;
mod host;
mod markdown;
mod models;
mod pages;
mod paths;
mod single_flight;
mod slug;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    init_tracing(&config);
    tracing::info!(endpoint = %config.graphql_endpoint, "starting dreams frontend");

    mount_to_body(move || view! { <App config=config /> });
}

#[cfg(target_arch = "wasm32")]
fn init_tracing(config: &AppConfig) {
    let layer_config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(config.tracing_level())
        .build();
    tracing_wasm::set_as_global_default_with_config(layer_config);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing(_config: &AppConfig) {}
