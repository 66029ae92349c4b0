//! Weather forecast passthrough endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::bad_request;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Forward a forecast request to the upstream weather service.
pub async fn get_forecast(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if !query.lat.is_finite() || query.lat < -90.0 || query.lat > 90.0 {
        return Err(bad_request("Latitude out of range"));
    }
    if !query.lon.is_finite() || query.lon < -180.0 || query.lon > 180.0 {
        return Err(bad_request("Longitude out of range"));
    }

    match state.weather().forecast(query.lat, query.lon).await {
        Ok(payload) => Ok(Json(payload)),
        Err(err) => {
            tracing::warn!("Weather passthrough failed: {:#}", err);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": "Weather service unavailable" })),
            ))
        }
    }
}
