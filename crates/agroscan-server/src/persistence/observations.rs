//! Observation persistence operations.

use agroscan_core::models::Observation;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Insert an observation and return its row ID.
pub async fn insert_observation(
    pool: &SqlitePool,
    mission_id: i64,
    lat: f64,
    lon: f64,
    message: &str,
    anomaly: bool,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO observations (mission_id, lat, lon, message, anomaly, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(mission_id)
    .bind(lat)
    .bind(lon)
    .bind(message)
    .bind(anomaly)
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Load a single observation by ID.
pub async fn load_observation(pool: &SqlitePool, id: i64) -> Result<Option<Observation>> {
    let row = sqlx::query_as::<_, ObservationRow>(
        "SELECT id, mission_id, lat, lon, message, anomaly, created_at
         FROM observations WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Observation::from))
}

/// Load all observations, newest first.
pub async fn load_all_observations(pool: &SqlitePool) -> Result<Vec<Observation>> {
    let rows = sqlx::query_as::<_, ObservationRow>(
        "SELECT id, mission_id, lat, lon, message, anomaly, created_at
         FROM observations ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Observation::from).collect())
}

/// Load one mission's observations in recording order.
pub async fn load_observations_for_mission(
    pool: &SqlitePool,
    mission_id: i64,
) -> Result<Vec<Observation>> {
    let rows = sqlx::query_as::<_, ObservationRow>(
        "SELECT id, mission_id, lat, lon, message, anomaly, created_at
         FROM observations WHERE mission_id = ?1 ORDER BY id",
    )
    .bind(mission_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Observation::from).collect())
}

// Internal row type for SQLx
#[derive(sqlx::FromRow)]
struct ObservationRow {
    id: i64,
    mission_id: i64,
    lat: f64,
    lon: f64,
    message: String,
    anomaly: bool,
    created_at: String,
}

impl From<ObservationRow> for Observation {
    fn from(row: ObservationRow) -> Self {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Observation {
            id: row.id,
            mission_id: row.mission_id,
            lat: row.lat,
            lon: row.lon,
            message: row.message,
            anomaly: row.anomaly,
            created_at,
        }
    }
}
