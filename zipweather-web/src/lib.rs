//! Browser-facing weather lookup server.
//!
//! Exposes `GET /` (a small Japanese form) and `POST /api/weather` (JSON),
//! both backed by the resolution pipeline in `zipweather-core`.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

use state::AppState;

/// Build the router. Kept separate from `main` so tests can drive it
/// without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/weather", post(handlers::weather))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
