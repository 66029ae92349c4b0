//! Shared application state.

use agroscan_core::models::{MissionStatus, MissionTelemetry};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::persistence::Database;
use crate::weather::WeatherClient;

/// Live state of one simulated mission flight.
///
/// Entries stay in the map after a flight finishes so telemetry remains
/// queryable; a restarted server simply has no runs.
#[derive(Debug, Clone)]
pub struct MissionRun {
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

impl MissionRun {
    pub fn telemetry(&self) -> MissionTelemetry {
        MissionTelemetry {
            mission_id: self.mission_id,
            lat: self.lat,
            lon: self.lon,
            altitude_m: self.altitude_m,
            speed_mps: self.speed_mps,
            battery_pct: self.battery_pct,
            waypoint_index: self.waypoint_index,
            total_waypoints: self.total_waypoints,
            observation_count: self.observation_count,
            status: self.status,
            last_update: self.last_update,
        }
    }
}

/// Application state - thread-safe store shared by handlers and sim tasks.
pub struct AppState {
    db: Database,
    config: Config,
    weather: WeatherClient,
    runs: DashMap<i64, MissionRun>,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Self {
        let weather = WeatherClient::new(&config.weather_url, config.weather_timeout_s);
        Self {
            db,
            config,
            weather,
            runs: DashMap::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }

    pub fn weather(&self) -> &WeatherClient {
        &self.weather
    }

    /// Register a freshly started flight, replacing any finished run.
    pub fn insert_run(&self, run: MissionRun) {
        self.runs.insert(run.mission_id, run);
    }

    pub fn get_run(&self, mission_id: i64) -> Option<MissionRun> {
        self.runs.get(&mission_id).map(|r| r.value().clone())
    }

    pub fn run_status(&self, mission_id: i64) -> Option<MissionStatus> {
        self.runs.get(&mission_id).map(|r| r.value().status)
    }

    /// Whether a simulation task is currently flying this mission.
    pub fn run_active(&self, mission_id: i64) -> bool {
        matches!(self.run_status(mission_id), Some(MissionStatus::Active))
    }

    /// Mutate a run in place; returns false if no run exists.
    pub fn update_run(&self, mission_id: i64, apply: impl FnOnce(&mut MissionRun)) -> bool {
        match self.runs.get_mut(&mission_id) {
            Some(mut entry) => {
                apply(entry.value_mut());
                true
            }
            None => false,
        }
    }

    /// Ask an active flight to stop; the sim task observes the flag on its
    /// next tick. Returns false if no active run exists.
    pub fn request_stop(&self, mission_id: i64) -> bool {
        match self.runs.get_mut(&mission_id) {
            Some(mut entry) => {
                let run = entry.value_mut();
                if run.status == MissionStatus::Active {
                    run.status = MissionStatus::Cancelled;
                    run.last_update = Utc::now();
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }
}
