//! Router

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::health_check;
use crate::state::AppState;

/// Build the application router.
///
/// Unknown paths fall back to `index.html` so client-side routes such as
/// `/payment-success?...` survive a reload.
pub fn router(state: AppState) -> Router {
    let index = state.static_dir.join("index.html");
    let bundle = ServeDir::new(state.static_dir.as_path()).fallback(ServeFile::new(index));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(bundle)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
