//! Observation API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{bad_request, internal_error, not_found};
use crate::persistence;
use crate::state::AppState;
use agroscan_core::models::{CreateObservationRequest, Observation};

/// Record an observation against a mission.
///
/// Normally the simulator records these itself; the endpoint exists for
/// external annotation tools and manual entries.
pub async fn create_observation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateObservationRequest>,
) -> Result<(StatusCode, Json<Observation>), (StatusCode, Json<Value>)> {
    if !req.lat.is_finite() || req.lat < -90.0 || req.lat > 90.0 {
        return Err(bad_request("Latitude out of range"));
    }
    if !req.lon.is_finite() || req.lon < -180.0 || req.lon > 180.0 {
        return Err(bad_request("Longitude out of range"));
    }

    persistence::missions::load_mission(state.pool(), req.mission_id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| not_found("Mission"))?;

    let id = persistence::observations::insert_observation(
        state.pool(),
        req.mission_id,
        req.lat,
        req.lon,
        &req.message,
        req.anomaly,
    )
    .await
    .map_err(internal_error)?;

    let observation = persistence::observations::load_observation(state.pool(), id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| not_found("Observation"))?;

    Ok((StatusCode::CREATED, Json(observation)))
}

/// List all observations, newest first.
pub async fn list_observations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Observation>>, (StatusCode, Json<Value>)> {
    persistence::observations::load_all_observations(state.pool())
        .await
        .map(Json)
        .map_err(internal_error)
}

/// List one mission's observations in recording order.
pub async fn list_mission_observations(
    State(state): State<Arc<AppState>>,
    Path(mission_id): Path<i64>,
) -> Result<Json<Vec<Observation>>, (StatusCode, Json<Value>)> {
    persistence::observations::load_observations_for_mission(state.pool(), mission_id)
        .await
        .map(Json)
        .map_err(internal_error)
}
