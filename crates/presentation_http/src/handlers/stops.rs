//! JSON lookup handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::WheelchairAccessibility;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters for the nearest-stop lookup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearestStopQuery {
    /// Free-text place name
    #[serde(default)]
    pub place: String,
}

/// Nearest-stop lookup result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestStopResponse {
    /// Place name as searched (trimmed)
    pub place: String,
    /// Latitude the place resolved to
    pub latitude: f64,
    /// Longitude the place resolved to
    pub longitude: f64,
    /// Name of the nearest stop
    pub stop_name: String,
    /// `accessible`, `not_accessible` or `unknown`
    pub wheelchair_accessible: WheelchairAccessibility,
}

/// Look up the stop nearest to `?place=`
#[instrument(skip(state))]
pub async fn nearest_stop(
    State(state): State<AppState>,
    Query(query): Query<NearestStopQuery>,
) -> Result<Json<NearestStopResponse>, ApiError> {
    let lookup = state.service.find_nearest_stop(&query.place).await?;

    Ok(Json(NearestStopResponse {
        place: lookup.place.as_str().to_string(),
        latitude: lookup.location.latitude(),
        longitude: lookup.location.longitude(),
        stop_name: lookup.stop.name,
        wheelchair_accessible: lookup.stop.wheelchair_accessible,
    }))
}
