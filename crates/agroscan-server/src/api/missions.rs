//! Mission API endpoints.
//!
//! Mission CRUD, scan-path exposure, and simulated flight control.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{bad_request, internal_error, not_found};
use crate::persistence;
use crate::sim;
use crate::state::{AppState, MissionRun};
use agroscan_core::geometry::PolygonRing;
use agroscan_core::models::{
    CreateMissionRequest, Mission, MissionReport, MissionStatus, MissionTelemetry, Observation,
};
use agroscan_core::planner::{plan_scan_path, ScanConfig};
use agroscan_core::spatial;

/// Create a new mission over a field.
pub async fn create_mission(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMissionRequest>,
) -> Result<(StatusCode, Json<Mission>), (StatusCode, Json<Value>)> {
    let ring = PolygonRing::new(req.polygon);
    let errors = ring.validate();
    if !errors.is_empty() {
        return Err(bad_request(&errors.join("; ")));
    }
    if !req.altitude_m.is_finite() || req.altitude_m <= 0.0 {
        return Err(bad_request("Mission altitude must be positive"));
    }
    if !req.speed_mps.is_finite() || req.speed_mps <= 0.0 {
        return Err(bad_request("Mission speed must be positive"));
    }

    persistence::fields::load_field(state.pool(), req.field_id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| not_found("Field"))?;

    let id = persistence::missions::insert_mission(
        state.pool(),
        req.field_id,
        req.altitude_m,
        req.speed_mps,
        req.task,
        &ring,
    )
    .await
    .map_err(internal_error)?;

    let mission = persistence::missions::load_mission(state.pool(), id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| not_found("Mission"))?;

    tracing::info!("Created mission {} for field {}", id, req.field_id);

    Ok((StatusCode::CREATED, Json(mission)))
}

/// List all missions, newest first.
pub async fn list_missions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Mission>>, (StatusCode, Json<Value>)> {
    persistence::missions::load_all_missions(state.pool())
        .await
        .map(Json)
        .map_err(internal_error)
}

/// Get the most recently created mission.
pub async fn get_last_mission(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Mission>, (StatusCode, Json<Value>)> {
    persistence::missions::load_last_mission(state.pool())
        .await
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(|| not_found("Mission"))
}

/// Get a specific mission by ID.
pub async fn get_mission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Mission>, (StatusCode, Json<Value>)> {
    persistence::missions::load_mission(state.pool(), id)
        .await
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(|| not_found("Mission"))
}

#[derive(Debug, Serialize)]
pub struct MissionPathResponse {
    pub mission_id: i64,
    pub waypoint_count: usize,
    pub waypoints: Vec<[f64; 2]>,
}

/// Compute the scan path for a mission's boundary.
///
/// Planning is deterministic, so recomputing per request returns the same
/// sequence the simulator flies.
pub async fn get_mission_path(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MissionPathResponse>, (StatusCode, Json<Value>)> {
    let mission = persistence::missions::load_mission(state.pool(), id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| not_found("Mission"))?;

    let config = ScanConfig::with_step(state.config().scan_step_deg);
    let waypoints = plan_scan_path(&mission.polygon, &config);

    Ok(Json(MissionPathResponse {
        mission_id: mission.id,
        waypoint_count: waypoints.len(),
        waypoints,
    }))
}

/// Start the simulated flight for a mission.
pub async fn start_mission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<MissionTelemetry>), (StatusCode, Json<Value>)> {
    let mission = persistence::missions::load_mission(state.pool(), id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| not_found("Mission"))?;

    if state.run_active(id) {
        return Err((
            StatusCode::CONFLICT,
            Json(serde_json::json!({ "error": "Mission is already flying" })),
        ));
    }

    let config = ScanConfig::with_step(state.config().scan_step_deg);
    let path = plan_scan_path(&mission.polygon, &config);
    if path.is_empty() {
        return Err(bad_request("Mission polygon has no vertices to fly"));
    }

    let start = path[0];
    let run = MissionRun {
        mission_id: id,
        lat: start[0],
        lon: start[1],
        altitude_m: mission.altitude_m,
        speed_mps: mission.speed_mps,
        battery_pct: 100.0,
        waypoint_index: 0,
        total_waypoints: path.len(),
        observation_count: 0,
        status: MissionStatus::Active,
        last_update: Utc::now(),
    };
    let telemetry = run.telemetry();
    state.insert_run(run);

    persistence::missions::update_mission_status(state.pool(), id, MissionStatus::Active)
        .await
        .map_err(internal_error)?;

    sim::spawn_mission_run(state.clone(), id, Arc::new(path));

    tracing::info!(
        "Started mission {} ({} waypoints)",
        id,
        telemetry.total_waypoints
    );

    Ok((StatusCode::ACCEPTED, Json(telemetry)))
}

/// Ask a flying mission to stop.
pub async fn stop_mission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    if state.request_stop(id) {
        tracing::info!("Stop requested for mission {}", id);
        Ok(StatusCode::ACCEPTED)
    } else {
        Err((
            StatusCode::CONFLICT,
            Json(serde_json::json!({ "error": "Mission is not flying" })),
        ))
    }
}

/// Live telemetry for a started mission.
pub async fn get_mission_telemetry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MissionTelemetry>, (StatusCode, Json<Value>)> {
    state
        .get_run(id)
        .map(|run| Json(run.telemetry()))
        .ok_or_else(|| not_found("Mission telemetry"))
}

/// Post-flight summary for a mission.
pub async fn get_mission_report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MissionReport>, (StatusCode, Json<Value>)> {
    let mission = persistence::missions::load_mission(state.pool(), id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| not_found("Mission"))?;

    let observations = persistence::observations::load_observations_for_mission(state.pool(), id)
        .await
        .map_err(internal_error)?;

    let config = ScanConfig::with_step(state.config().scan_step_deg);
    let path = plan_scan_path(&mission.polygon, &config);

    let anomalies: Vec<Observation> = observations.iter().filter(|o| o.anomaly).cloned().collect();

    Ok(Json(MissionReport {
        mission_id: mission.id,
        field_id: mission.field_id,
        field_name: mission.field_name,
        task: mission.task,
        status: mission.status,
        boundary_area_ha: mission.polygon.area_ha(),
        path_waypoints: path.len(),
        path_length_m: spatial::path_length_m(&path),
        observation_count: observations.len() as u64,
        anomaly_count: anomalies.len() as u64,
        anomalies,
        generated_at: Utc::now(),
    }))
}
