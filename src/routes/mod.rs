//! Router assembly.

mod common;
mod entity;

pub use common::{common_routes_with_ready, not_found};
pub use entity::{collection_routes, entity_routes};

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

/// The full application: common routes at the root, entity routes under `/api`.
/// Oversized bodies are rejected by `JsonBody` like any other unreadable body.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api", entity_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
