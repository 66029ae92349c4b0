//! REST API routes.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::api::{fields, missions, observations, weather};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        // Field routes
        .route("/v1/fields", post(fields::create_field))
        .route("/v1/fields", get(fields::list_fields))
        .route("/v1/fields/:id", get(fields::get_field))
        .route("/v1/fields/:id", put(fields::update_field))
        .route("/v1/fields/:id", delete(fields::delete_field))
        .route("/v1/fields/:id/spray-plan", get(fields::get_spray_plan))
        // Mission routes
        .route("/v1/missions", post(missions::create_mission))
        .route("/v1/missions", get(missions::list_missions))
        .route("/v1/missions/last", get(missions::get_last_mission))
        .route("/v1/missions/:id", get(missions::get_mission))
        .route("/v1/missions/:id/path", get(missions::get_mission_path))
        .route("/v1/missions/:id/start", post(missions::start_mission))
        .route("/v1/missions/:id/stop", post(missions::stop_mission))
        .route("/v1/missions/:id/telemetry", get(missions::get_mission_telemetry))
        .route("/v1/missions/:id/report", get(missions::get_mission_report))
        .route(
            "/v1/missions/:id/observations",
            get(observations::list_mission_observations),
        )
        // Observation routes
        .route("/v1/observations", post(observations::create_observation))
        .route("/v1/observations", get(observations::list_observations))
        // Weather passthrough
        .route("/v1/weather", get(weather::get_forecast))
}
