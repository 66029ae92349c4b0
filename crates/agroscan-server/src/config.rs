//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub database_path: String,
    pub database_max_connections: u32,
    /// Sampling step for scan-path generation, in degrees.
    pub scan_step_deg: f64,
    /// Simulated flight advances one waypoint per tick.
    pub sim_tick_ms: u64,
    /// A snapshot observation is recorded every Nth waypoint.
    pub sim_snapshot_every: usize,
    /// Battery percentage drained per tick.
    pub sim_battery_drain_pct: f64,
    /// Fixed RNG seed for reproducible snapshot labels; random when unset.
    pub sim_seed: Option<u64>,
    pub weather_url: String,
    pub weather_timeout_s: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("AGRO_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            database_path: env::var("AGRO_DB_PATH")
                .unwrap_or_else(|_| "data/agroscan.db".to_string()),
            database_max_connections: env::var("AGRO_DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            scan_step_deg: env::var("AGRO_SCAN_STEP_DEG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.00003),
            sim_tick_ms: env::var("AGRO_SIM_TICK_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(600),
            sim_snapshot_every: env::var("AGRO_SIM_SNAPSHOT_EVERY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            sim_battery_drain_pct: env::var("AGRO_SIM_BATTERY_DRAIN_PCT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.08),
            sim_seed: env::var("AGRO_SIM_SEED").ok().and_then(|s| s.parse().ok()),
            weather_url: env::var("AGRO_WEATHER_URL")
                .unwrap_or_else(|_| "https://api.open-meteo.com/v1/forecast".to_string()),
            weather_timeout_s: env::var("AGRO_WEATHER_TIMEOUT_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }
}
