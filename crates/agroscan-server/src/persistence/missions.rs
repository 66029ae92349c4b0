//! Mission persistence operations.

use agroscan_core::geometry::PolygonRing;
use agroscan_core::models::{Mission, MissionStatus, MissionTask};
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

const MISSION_COLUMNS: &str =
    "m.id, m.field_id, m.altitude_m, m.speed_mps, m.task, m.polygon, m.status, m.created_at";

/// Insert a new mission and return its row ID.
pub async fn insert_mission(
    pool: &SqlitePool,
    field_id: i64,
    altitude_m: f64,
    speed_mps: f64,
    task: MissionTask,
    polygon: &PolygonRing,
) -> Result<i64> {
    let polygon_json = serde_json::to_string(polygon)?;

    let result = sqlx::query(
        r#"
        INSERT INTO missions (field_id, altitude_m, speed_mps, task, polygon, status, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(field_id)
    .bind(altitude_m)
    .bind(speed_mps)
    .bind(format!("{:?}", task))
    .bind(&polygon_json)
    .bind(format!("{:?}", MissionStatus::Pending))
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Load all missions, newest first, with their field names joined in.
pub async fn load_all_missions(pool: &SqlitePool) -> Result<Vec<Mission>> {
    let query = format!(
        "SELECT {MISSION_COLUMNS}, f.name AS field_name
         FROM missions m LEFT JOIN fields f ON m.field_id = f.id
         ORDER BY m.id DESC"
    );
    let rows = sqlx::query_as::<_, MissionRow>(&query).fetch_all(pool).await?;

    rows.into_iter().map(|r| r.try_into()).collect()
}

/// Load the most recently created mission.
pub async fn load_last_mission(pool: &SqlitePool) -> Result<Option<Mission>> {
    let query = format!(
        "SELECT {MISSION_COLUMNS}, f.name AS field_name
         FROM missions m LEFT JOIN fields f ON m.field_id = f.id
         ORDER BY m.id DESC LIMIT 1"
    );
    let row = sqlx::query_as::<_, MissionRow>(&query)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(r) => Ok(Some(r.try_into()?)),
        None => Ok(None),
    }
}

/// Load a single mission by ID.
pub async fn load_mission(pool: &SqlitePool, id: i64) -> Result<Option<Mission>> {
    let query = format!(
        "SELECT {MISSION_COLUMNS}, f.name AS field_name
         FROM missions m LEFT JOIN fields f ON m.field_id = f.id
         WHERE m.id = ?1"
    );
    let row = sqlx::query_as::<_, MissionRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(r) => Ok(Some(r.try_into()?)),
        None => Ok(None),
    }
}

/// Update a mission's status. Returns false if the mission is missing.
pub async fn update_mission_status(
    pool: &SqlitePool,
    id: i64,
    status: MissionStatus,
) -> Result<bool> {
    let result = sqlx::query("UPDATE missions SET status = ?1 WHERE id = ?2")
        .bind(format!("{:?}", status))
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Internal row type for SQLx
#[derive(sqlx::FromRow)]
struct MissionRow {
    id: i64,
    field_id: i64,
    altitude_m: f64,
    speed_mps: f64,
    task: String,
    polygon: String,
    status: String,
    created_at: String,
    field_name: Option<String>,
}

impl TryFrom<MissionRow> for Mission {
    type Error = anyhow::Error;

    fn try_from(row: MissionRow) -> Result<Self> {
        let task = match row.task.as_str() {
            "Spraying" => MissionTask::Spraying,
            _ => MissionTask::Monitoring,
        };

        let status = match row.status.as_str() {
            "Active" => MissionStatus::Active,
            "Completed" => MissionStatus::Completed,
            "Cancelled" => MissionStatus::Cancelled,
            _ => MissionStatus::Pending,
        };

        let polygon: PolygonRing = serde_json::from_str(&row.polygon)?;

        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(Mission {
            id: row.id,
            field_id: row.field_id,
            altitude_m: row.altitude_m,
            speed_mps: row.speed_mps,
            task,
            polygon,
            status,
            created_at,
            field_name: row.field_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{fields, init_database};
    use agroscan_core::models::CreateFieldRequest;

    #[tokio::test]
    async fn mission_roundtrip_preserves_polygon() {
        let db = init_database(":memory:", 1).await.unwrap();
        let pool = db.pool();

        let field_id = fields::insert_field(
            pool,
            &CreateFieldRequest {
                name: "Corn-2025".to_string(),
                crop_type: "corn".to_string(),
                area_ha: 30.0,
            },
        )
        .await
        .unwrap();

        let ring = PolygonRing::new(vec![
            [50.2440, 30.1220],
            [50.2440, 30.1234],
            [50.2449, 30.1234],
            [50.2449, 30.1220],
        ]);
        let id = insert_mission(pool, field_id, 40.0, 5.0, MissionTask::Monitoring, &ring)
            .await
            .unwrap();

        let mission = load_mission(pool, id).await.unwrap().unwrap();
        assert_eq!(mission.polygon, ring);
        assert_eq!(mission.status, MissionStatus::Pending);
        assert_eq!(mission.field_name.as_deref(), Some("Corn-2025"));

        let last = load_last_mission(pool).await.unwrap().unwrap();
        assert_eq!(last.id, id);

        assert!(update_mission_status(pool, id, MissionStatus::Completed)
            .await
            .unwrap());
        let mission = load_mission(pool, id).await.unwrap().unwrap();
        assert_eq!(mission.status, MissionStatus::Completed);
    }

    #[tokio::test]
    async fn missing_mission_loads_as_none() {
        let db = init_database(":memory:", 1).await.unwrap();
        assert!(load_mission(db.pool(), 999).await.unwrap().is_none());
        assert!(load_last_mission(db.pool()).await.unwrap().is_none());
    }
}
