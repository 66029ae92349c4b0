//! Create a mission over a demo boundary, fly it, and print the results.

use agroscan_cli::ApiClient;
use agroscan_core::models::{CreateFieldRequest, CreateMissionRequest, MissionStatus, MissionTask};
use agroscan_core::spatial::{meters_per_deg_lat, meters_per_deg_lon};
use anyhow::Result;
use clap::Parser;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(about = "Fly a simulated monitoring mission against an AgroScan server")]
struct Args {
    /// Server base URL
    #[arg(long, default_value = "http://localhost:5000")]
    server: String,

    /// Existing field ID; a demo field is created when omitted
    #[arg(long)]
    field_id: Option<i64>,

    /// Boundary center latitude
    #[arg(long, default_value_t = 50.244973)]
    lat: f64,

    /// Boundary center longitude
    #[arg(long, default_value_t = 30.122926)]
    lon: f64,

    /// Boundary side length in meters
    #[arg(long, default_value_t = 60.0)]
    size_m: f64,

    /// Mission task
    #[arg(long, value_enum, default_value = "monitoring")]
    task: TaskArg,

    /// Seconds between telemetry polls
    #[arg(long, default_value_t = 1)]
    poll_secs: u64,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum TaskArg {
    Monitoring,
    Spraying,
}

impl From<TaskArg> for MissionTask {
    fn from(value: TaskArg) -> Self {
        match value {
            TaskArg::Monitoring => MissionTask::Monitoring,
            TaskArg::Spraying => MissionTask::Spraying,
        }
    }
}

/// Square `[lat, lon]` ring of `size_m` meters centered on a point.
fn square_boundary(lat: f64, lon: f64, size_m: f64) -> Vec<[f64; 2]> {
    let half_lat = size_m / 2.0 / meters_per_deg_lat(lat);
    let half_lon = size_m / 2.0 / meters_per_deg_lon(lat);
    vec![
        [lat - half_lat, lon - half_lon],
        [lat - half_lat, lon + half_lon],
        [lat + half_lat, lon + half_lon],
        [lat + half_lat, lon - half_lon],
    ]
}

fn main() -> Result<()> {
    let args = Args::parse();
    let client = ApiClient::new(args.server);

    let field_id = match args.field_id {
        Some(id) => id,
        None => {
            let field = client.create_field(&CreateFieldRequest {
                name: "Demo Field".to_string(),
                crop_type: "wheat".to_string(),
                area_ha: 1.0,
            })?;
            println!("Created demo field {}", field.id);
            field.id
        }
    };

    let mission = client.create_mission(&CreateMissionRequest {
        field_id,
        altitude_m: 40.0,
        speed_mps: 5.0,
        task: args.task.into(),
        polygon: square_boundary(args.lat, args.lon, args.size_m),
    })?;
    println!("Created mission {}", mission.id);

    let telemetry = client.start_mission(mission.id)?;
    println!(
        "Flight started: {} waypoints planned",
        telemetry.total_waypoints
    );

    loop {
        thread::sleep(Duration::from_secs(args.poll_secs.max(1)));
        let telemetry = client.mission_telemetry(mission.id)?;
        println!(
            "[{:>4}/{}] pos ({:.6}, {:.6})  battery {:.1}%  snapshots {}",
            telemetry.waypoint_index,
            telemetry.total_waypoints,
            telemetry.lat,
            telemetry.lon,
            telemetry.battery_pct,
            telemetry.observation_count
        );

        match telemetry.status {
            MissionStatus::Completed | MissionStatus::Cancelled => break,
            _ => {}
        }
    }

    let observations = client.mission_observations(mission.id)?;
    let anomalies = observations.iter().filter(|o| o.anomaly).count();
    println!(
        "Flight done: {} snapshots, {} anomalies",
        observations.len(),
        anomalies
    );
    for observation in observations.iter().filter(|o| o.anomaly) {
        println!(
            "  anomaly at ({:.6}, {:.6}): {}",
            observation.lat, observation.lon, observation.message
        );
    }

    let report = client.mission_report(mission.id)?;
    println!(
        "Report: {:.2} ha boundary, {} waypoints, {:.0} m path",
        report.boundary_area_ha, report.path_waypoints, report.path_length_m
    );

    Ok(())
}
