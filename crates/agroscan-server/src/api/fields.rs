//! Field API endpoints.
//!
//! CRUD for registered fields plus spray planning from a field's area.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{bad_request, internal_error, not_found};
use crate::persistence;
use crate::state::AppState;
use agroscan_core::models::{CreateFieldRequest, Field, UpdateFieldRequest};
use agroscan_core::spray::{plan_spray, SprayPlan};

/// Create a new field.
pub async fn create_field(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateFieldRequest>,
) -> Result<(StatusCode, Json<Field>), (StatusCode, Json<Value>)> {
    if req.name.trim().is_empty() {
        return Err(bad_request("Field name must not be empty"));
    }
    if !req.area_ha.is_finite() || req.area_ha < 0.0 {
        return Err(bad_request("Field area must be a non-negative number"));
    }

    let id = persistence::fields::insert_field(state.pool(), &req)
        .await
        .map_err(internal_error)?;
    let field = persistence::fields::load_field(state.pool(), id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| not_found("Field"))?;

    tracing::info!("Created field '{}' ({})", field.name, field.id);

    Ok((StatusCode::CREATED, Json(field)))
}

/// List all fields.
pub async fn list_fields(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Field>>, (StatusCode, Json<Value>)> {
    persistence::fields::load_all_fields(state.pool())
        .await
        .map(Json)
        .map_err(internal_error)
}

/// Get a specific field by ID.
pub async fn get_field(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Field>, (StatusCode, Json<Value>)> {
    persistence::fields::load_field(state.pool(), id)
        .await
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(|| not_found("Field"))
}

/// Apply a partial update to a field.
pub async fn update_field(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateFieldRequest>,
) -> Result<Json<Field>, (StatusCode, Json<Value>)> {
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(bad_request("Field name must not be empty"));
        }
    }
    if let Some(area) = req.area_ha {
        if !area.is_finite() || area < 0.0 {
            return Err(bad_request("Field area must be a non-negative number"));
        }
    }

    let updated = persistence::fields::update_field(state.pool(), id, &req)
        .await
        .map_err(internal_error)?;
    if !updated {
        return Err(not_found("Field"));
    }

    persistence::fields::load_field(state.pool(), id)
        .await
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(|| not_found("Field"))
}

/// Delete a field and everything recorded against it.
pub async fn delete_field(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    let deleted = persistence::fields::delete_field(state.pool(), id)
        .await
        .map_err(internal_error)?;
    if deleted {
        tracing::info!("Deleted field {} with its missions and observations", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Field"))
    }
}

#[derive(Debug, Deserialize)]
pub struct SprayQuery {
    pub rate_l_per_ha: Option<f64>,
    pub tank_volume_l: Option<f64>,
}

/// Compute spray logistics for a field from its registered area.
///
/// Defaults match the fleet's spray drone: 2 l/ha application rate, 40 l tank.
pub async fn get_spray_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<SprayQuery>,
) -> Result<Json<SprayPlan>, (StatusCode, Json<Value>)> {
    let field = persistence::fields::load_field(state.pool(), id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| not_found("Field"))?;

    let rate = query.rate_l_per_ha.unwrap_or(2.0);
    let tank = query.tank_volume_l.unwrap_or(40.0);

    plan_spray(field.area_ha, rate, tank)
        .map(Json)
        .map_err(|err| bad_request(&err.to_string()))
}
