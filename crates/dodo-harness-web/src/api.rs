//! Browser-side wiring for the harness client

use dodo_harness_core::{ApiClient, HarnessConfig, REDIRECT_DELAY, Result};
use leptos::prelude::*;

const FALLBACK_ORIGIN: &str = "http://localhost:3000";

/// Shared, read-only harness context
#[derive(Clone, Debug)]
pub struct Harness {
    pub config: HarnessConfig,
    pub client: ApiClient,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        let client = ApiClient::new(&config);
        Self { config, client }
    }
}

/// Origin of the current page
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_ORIGIN.into())
}

/// Configuration baked in at build time.
///
/// Without `BACKEND_URL` the page's own origin is used as the backend.
pub fn harness_config() -> Result<HarnessConfig> {
    let backend_url = option_env!("BACKEND_URL").map_or_else(page_origin, str::to_string);
    let environment = option_env!("APP_ENV").unwrap_or(if cfg!(debug_assertions) {
        "development"
    } else {
        "production"
    });

    HarnessConfig::from_parts(
        &backend_url,
        option_env!("DODO_PAYMENTS_API_KEY"),
        option_env!("DODO_PAYMENTS_MODE"),
        Some(environment),
    )
}

/// Open `url` in a new browser context once [`REDIRECT_DELAY`] has passed
pub fn open_after_delay(url: String) {
    set_timeout(
        move || {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.open_with_url_and_target(&url, "_blank") {
                    leptos::logging::error!("could not open {url}: {err:?}");
                }
            }
        },
        REDIRECT_DELAY,
    );
}

/// Full-page navigation
pub fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}
