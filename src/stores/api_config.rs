use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};

/// Production API host
pub const DEFAULT_API_BASE: &str = "https://api.akesomind.com";

const STORAGE_KEY: &str = "akesomind_api_base";

/// Global API base URL, no trailing slash
pub static API_BASE: GlobalSignal<String> = Signal::global(|| DEFAULT_API_BASE.to_string());

/// Initialize the API base from localStorage, falling back to the default
pub fn init_api_config() {
    let base = match LocalStorage::get::<String>(STORAGE_KEY) {
        Ok(stored) => match sanitize_base(&stored) {
            Some(base) => {
                log::info!("Using API base from storage: {}", base);
                base
            }
            None => {
                log::warn!("Ignoring invalid stored API base: {:?}", stored);
                DEFAULT_API_BASE.to_string()
            }
        },
        Err(_) => DEFAULT_API_BASE.to_string(),
    };

    *API_BASE.write() = base;
}

pub fn api_base() -> String {
    API_BASE.read().clone()
}

/// Accept only absolute http(s) URLs; strip trailing slashes
pub fn sanitize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))?;

    if host.is_empty() || host.contains(char::is_whitespace) {
        return None;
    }

    Some(trimmed.to_string())
}
