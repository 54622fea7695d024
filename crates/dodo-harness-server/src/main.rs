//! dodo-harness static host
//!
//! Serves the compiled WASM frontend. The payment backend is external; the
//! frontend talks to it directly.

mod handlers;
mod routes;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "dist".into());
    let state = AppState::new(&static_dir);

    if state.static_dir.join("index.html").is_file() {
        tracing::info!(static_dir = %static_dir, "✓ Frontend bundle found");
    } else {
        tracing::warn!(static_dir = %static_dir, "⚠ No index.html - build the frontend with trunk first");
    }

    // Backend settings are baked into the bundle; log what this host sees
    match dodo_harness_core::HarnessConfig::from_env() {
        Ok(config) => tracing::info!(
            backend = %config.backend_base(),
            mode = %config.mode,
            environment = %config.environment,
            "Backend configuration"
        ),
        Err(e) => tracing::warn!("⚠ {e} - the frontend will use its own origin"),
    }

    let app = routes::router(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🦤 dodo-harness running on http://{}", addr);
    tracing::info!("  /               - Home");
    tracing::info!("  /payment-test   - Payment test center");
    tracing::info!("  /health         - Host health check");

    axum::serve(listener, app).await?;

    Ok(())
}
