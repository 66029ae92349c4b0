//! API routes for the AgroScan server.

pub mod fields;
pub mod missions;
pub mod observations;
pub mod weather;
mod routes;

use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

pub fn routes() -> axum::Router<std::sync::Arc<crate::state::AppState>> {
    routes::create_router()
}

pub(crate) fn bad_request(message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
}

pub(crate) fn not_found(what: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": format!("{} not found", what) })),
    )
}

pub(crate) fn internal_error(err: anyhow::Error) -> (StatusCode, Json<Value>) {
    tracing::error!("Request failed: {:#}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Internal server error" })),
    )
}
