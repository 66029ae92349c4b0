//! Data models shared by the AgroScan server and tooling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::PolygonRing;

/// A registered field with its agronomic metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: i64,
    pub name: String,
    pub crop_type: String,
    /// Working area in hectares, as registered by the operator.
    pub area_ha: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFieldRequest {
    pub name: String,
    pub crop_type: String,
    pub area_ha: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFieldRequest {
    pub name: Option<String>,
    pub crop_type: Option<String>,
    pub area_ha: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionTask {
    /// Camera sweep producing snapshot observations
    Monitoring,
    /// Product application flight
    Spraying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    /// Created but not yet flown
    Pending,
    /// Simulation currently running
    Active,
    /// Flight finished the full path
    Completed,
    /// Stopped by the operator mid-flight
    Cancelled,
}

/// A planned (and possibly flown) flight over one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: i64,
    pub field_id: i64,
    pub altitude_m: f64,
    pub speed_mps: f64,
    pub task: MissionTask,
    /// Boundary the scan path is planned over, stored `[lat, lon]`.
    pub polygon: PolygonRing,
    pub status: MissionStatus,
    pub created_at: DateTime<Utc>,
    /// Joined in by list queries; absent on single-row loads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMissionRequest {
    pub field_id: i64,
    pub altitude_m: f64,
    pub speed_mps: f64,
    pub task: MissionTask,
    /// Accepts both open and pre-closed rings.
    pub polygon: Vec<[f64; 2]>,
}

/// A georeferenced snapshot result recorded during a flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub id: i64,
    pub mission_id: i64,
    pub lat: f64,
    pub lon: f64,
    pub message: String,
    pub anomaly: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateObservationRequest {
    pub mission_id: i64,
    pub lat: f64,
    pub lon: f64,
    pub message: String,
    #[serde(default)]
    pub anomaly: bool,
}

/// Live snapshot of a simulated flight, one per running mission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionTelemetry {
    pub mission_id: i64,
    pub lat: f64,
    pub lon: f64,
    pub altitude_m: f64,
    pub speed_mps: f64,
    pub battery_pct: f64,
    pub waypoint_index: usize,
    pub total_waypoints: usize,
    pub observation_count: u64,
    pub status: MissionStatus,
    pub last_update: DateTime<Utc>,
}

/// Post-flight summary for one mission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionReport {
    pub mission_id: i64,
    pub field_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    pub task: MissionTask,
    pub status: MissionStatus,
    /// Area of the flown boundary, derived from the polygon.
    pub boundary_area_ha: f64,
    pub path_waypoints: usize,
    pub path_length_m: f64,
    pub observation_count: u64,
    pub anomaly_count: u64,
    pub anomalies: Vec<Observation>,
    pub generated_at: DateTime<Utc>,
}
