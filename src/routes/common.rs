//! Service routes: liveness, store readiness, build version, and the 404
//! fallback used for unknown paths and unrouted methods.

use crate::response::{MessageBody, NOT_FOUND_ELLIPSIS};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Json<StatusBody> {
    Json(StatusBody {
        status: "ok",
        database: None,
    })
}

/// 200 while the store answers `ping`, 503 otherwise.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    let (code, status, database) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "store not ready");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };
    (
        code,
        Json(StatusBody {
            status,
            database: Some(database),
        }),
    )
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn not_found() -> (StatusCode, Json<MessageBody<&'static str>>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageBody {
            message: NOT_FOUND_ELLIPSIS,
        }),
    )
}

pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
