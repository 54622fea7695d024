//! Application State

use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Directory holding the built WASM bundle
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: Arc::new(static_dir.into()),
        }
    }
}
