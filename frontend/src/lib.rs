use leptos::*;
use leptos_meta::{provide_meta_context, Title};

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use api::ApiClient;
use pages::HomePage;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting HRMS Lite frontend");

    // window.__HRMS_ENV (env.js) takes precedence over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
    });

    mount_to_body(App);
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());

    view! {
        <Title text="HRMS Lite"/>
        <HomePage/>
    }
}
