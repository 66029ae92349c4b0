//! Timer-driven mission flight simulation.
//!
//! Steps a drone along a planned scan path, one waypoint per tick, and
//! persists a synthetic snapshot observation every few waypoints. The path
//! is computed once at start and never mutated; stopping mid-flight only
//! abandons the remaining waypoints.

use std::sync::Arc;
use std::time::Duration;

use agroscan_core::labeler;
use agroscan_core::models::MissionStatus;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::interval;
use tracing::{info, warn};

use crate::persistence::{missions, observations};
use crate::state::AppState;

/// Spawn the background task that flies one mission.
///
/// The caller must have registered an active `MissionRun` in state first.
pub fn spawn_mission_run(state: Arc<AppState>, mission_id: i64, path: Arc<Vec<[f64; 2]>>) {
    // Per-mission seed so a fixed AGRO_SIM_SEED reproduces every flight's labels.
    let rng = match state.config().sim_seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ mission_id as u64),
        None => StdRng::from_os_rng(),
    };

    tokio::spawn(run_flight(state, mission_id, path, rng));
}

async fn run_flight(
    state: Arc<AppState>,
    mission_id: i64,
    path: Arc<Vec<[f64; 2]>>,
    mut rng: StdRng,
) {
    let tick = Duration::from_millis(state.config().sim_tick_ms.max(1));
    let snapshot_every = state.config().sim_snapshot_every.max(1);
    let drain = state.config().sim_battery_drain_pct;

    let mut ticker = interval(tick);

    for (index, point) in path.iter().enumerate() {
        ticker.tick().await;

        if state.run_status(mission_id) == Some(MissionStatus::Cancelled) {
            if let Err(err) =
                missions::update_mission_status(state.pool(), mission_id, MissionStatus::Cancelled)
                    .await
            {
                warn!(
                    "Failed to persist cancelled status for mission {}: {}",
                    mission_id, err
                );
            }
            info!(
                "Mission {} cancelled at waypoint {}/{}",
                mission_id,
                index,
                path.len()
            );
            return;
        }

        let [lat, lon] = *point;
        state.update_run(mission_id, |run| {
            run.lat = lat;
            run.lon = lon;
            run.waypoint_index = index + 1;
            run.battery_pct = (run.battery_pct - drain).max(0.0);
            run.last_update = Utc::now();
        });

        if index % snapshot_every == 0 {
            let label = labeler::draw_label(&mut rng);
            match observations::insert_observation(
                state.pool(),
                mission_id,
                lat,
                lon,
                label.message(),
                label.is_anomaly(),
            )
            .await
            {
                Ok(_) => {
                    state.update_run(mission_id, |run| run.observation_count += 1);
                }
                Err(err) => {
                    warn!(
                        "Failed to record observation for mission {}: {}",
                        mission_id, err
                    );
                }
            }
        }
    }

    state.update_run(mission_id, |run| {
        run.status = MissionStatus::Completed;
        run.last_update = Utc::now();
    });
    if let Err(err) =
        missions::update_mission_status(state.pool(), mission_id, MissionStatus::Completed).await
    {
        warn!(
            "Failed to persist completed status for mission {}: {}",
            mission_id, err
        );
    }
    info!("Mission {} completed ({} waypoints)", mission_id, path.len());
}
