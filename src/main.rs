#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::api_config;

// Modules
mod components;
mod hooks;
mod routes;
mod services;
mod stores;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting Akesomind client profile view");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(api_config::init_api_config);

    rsx! {
        Router::<routes::Route> {}
    }
}
