//! Field persistence operations.

use agroscan_core::models::{CreateFieldRequest, Field, UpdateFieldRequest};
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Insert a new field and return its row ID.
pub async fn insert_field(pool: &SqlitePool, req: &CreateFieldRequest) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO fields (name, crop_type, area_ha, created_at) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&req.name)
    .bind(&req.crop_type)
    .bind(req.area_ha)
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Load all fields.
pub async fn load_all_fields(pool: &SqlitePool) -> Result<Vec<Field>> {
    let rows = sqlx::query_as::<_, FieldRow>(
        "SELECT id, name, crop_type, area_ha, created_at FROM fields ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Field::from).collect())
}

/// Load a single field by ID.
pub async fn load_field(pool: &SqlitePool, id: i64) -> Result<Option<Field>> {
    let row = sqlx::query_as::<_, FieldRow>(
        "SELECT id, name, crop_type, area_ha, created_at FROM fields WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Field::from))
}

/// Apply a partial update to a field. Returns false if the field is missing.
pub async fn update_field(pool: &SqlitePool, id: i64, req: &UpdateFieldRequest) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE fields SET
            name = COALESCE(?1, name),
            crop_type = COALESCE(?2, crop_type),
            area_ha = COALESCE(?3, area_ha)
        WHERE id = ?4
        "#,
    )
    .bind(&req.name)
    .bind(&req.crop_type)
    .bind(req.area_ha)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a field together with its missions and their observations.
/// Returns false if the field is missing.
pub async fn delete_field(pool: &SqlitePool, id: i64) -> Result<bool> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "DELETE FROM observations WHERE mission_id IN (SELECT id FROM missions WHERE field_id = ?1)",
    )
    .bind(id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM missions WHERE field_id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM fields WHERE id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}

// Internal row type for SQLx
#[derive(sqlx::FromRow)]
struct FieldRow {
    id: i64,
    name: String,
    crop_type: String,
    area_ha: f64,
    created_at: String,
}

impl From<FieldRow> for Field {
    fn from(row: FieldRow) -> Self {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Field {
            id: row.id,
            name: row.name,
            crop_type: row.crop_type,
            area_ha: row.area_ha,
            created_at,
        }
    }
}
