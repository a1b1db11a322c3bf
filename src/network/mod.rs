// Re-export network modules
pub mod api_client;
pub mod config;

// Re-export commonly used items
pub use api_client::ApiClient;

use config::ApiConfig;
use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

fn store_config(config: ApiConfig) {
    match API_CONFIG.write() {
        Ok(mut guard) => *guard = Some(config),
        Err(poisoned) => *poisoned.into_inner() = Some(config),
    }
}

/// Initialize the API configuration from build-time settings.  A later
/// `init_config_js()` call overrides it.
pub fn init_api_config() {
    let config = ApiConfig::from_build_env();
    crate::debug_log!(
        "API config: base='{}' pdf={}",
        config.base_url(),
        config.pdf_strategy()
    );
    store_config(config);
}

/// Initialize the configuration from JS, e.g.
/// `init_config_js("https://planner.example.com", "client")`.
#[wasm_bindgen]
pub fn init_config_js(api_base_url: &str, pdf_strategy: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing config from JS: {} ({})", api_base_url, pdf_strategy);
    let config = ApiConfig::from_parts(api_base_url, pdf_strategy)
        .map_err(|e| JsValue::from_str(&e))?;
    store_config(config);
    Ok(())
}

/// Current configuration; defaults (same-origin, server PDF) when nothing
/// was initialised.
pub fn current_config() -> ApiConfig {
    let cached = match API_CONFIG.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    cached.unwrap_or_default()
}
