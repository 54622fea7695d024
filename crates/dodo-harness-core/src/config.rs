//! Harness Configuration

use url::Url;

use crate::error::{HarnessError, Result};

/// Default payment mode when none is configured
pub const DEFAULT_MODE: &str = "test";

/// Default runtime environment name
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Configuration consumed by the harness
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Base URL of the payment backend (the `/api` prefix is added per call)
    pub backend_url: Url,

    /// Whether a client-visible API key was provided
    pub api_key_configured: bool,

    /// Payment mode (`test` or `live`)
    pub mode: String,

    /// Runtime environment name
    pub environment: String,
}

impl HarnessConfig {
    /// Build from already-resolved values.
    ///
    /// Empty `mode`/`environment` fall back to the defaults.
    pub fn from_parts(
        backend_url: &str,
        api_key: Option<&str>,
        mode: Option<&str>,
        environment: Option<&str>,
    ) -> Result<Self> {
        let backend_url = Url::parse(backend_url.trim())
            .map_err(|e| HarnessError::Config(format!("invalid backend URL {backend_url:?}: {e}")))?;

        if backend_url.cannot_be_a_base() {
            return Err(HarnessError::Config(format!(
                "backend URL {backend_url} cannot be used as a base"
            )));
        }

        Ok(Self {
            backend_url,
            api_key_configured: api_key.is_some_and(|key| !key.trim().is_empty()),
            mode: non_empty(mode).unwrap_or(DEFAULT_MODE).to_string(),
            environment: non_empty(environment)
                .unwrap_or(DEFAULT_ENVIRONMENT)
                .to_string(),
        })
    }

    /// Create from environment variables
    ///
    /// Reads `BACKEND_URL` (required), `DODO_PAYMENTS_API_KEY`,
    /// `DODO_PAYMENTS_MODE` and `APP_ENV`.
    pub fn from_env() -> Result<Self> {
        let backend_url = std::env::var("BACKEND_URL")
            .map_err(|_| HarnessError::Config("BACKEND_URL not set".into()))?;
        let api_key = std::env::var("DODO_PAYMENTS_API_KEY").ok();
        let mode = std::env::var("DODO_PAYMENTS_MODE").ok();
        let environment = std::env::var("APP_ENV").ok();

        Self::from_parts(
            &backend_url,
            api_key.as_deref(),
            mode.as_deref(),
            environment.as_deref(),
        )
    }

    /// Backend URL without a trailing slash, for display and joining
    pub fn backend_base(&self) -> &str {
        self.backend_url.as_str().trim_end_matches('/')
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
