pub mod geometry;
pub mod labeler;
pub mod models;
pub mod planner;
pub mod spatial;
pub mod spray;

pub use geometry::{BoundingBox, PolygonRing};
pub use labeler::{draw_label, ObservationLabel};
pub use models::{
    CreateFieldRequest, CreateMissionRequest, CreateObservationRequest, Field, Mission,
    MissionReport, MissionStatus, MissionTask, MissionTelemetry, Observation,
    UpdateFieldRequest,
};
pub use planner::{plan_scan_path, ScanConfig};
pub use spatial::haversine_distance;
pub use spray::{plan_spray, SprayError, SprayPlan};
