//! HTML page handlers
//!
//! The form posts `place` to `/nearest_mbta`; the result or the failure is
//! rendered as a page. Failures keep the status code of their error kind.

use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use infrastructure::StationPageData;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Search form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceForm {
    /// Free-text place name
    #[serde(default)]
    pub place: String,
}

/// Render the search form
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.render_index()?))
}

/// Look up the nearest stop for the submitted place and render the result
#[instrument(skip_all)]
pub async fn nearest_mbta(
    State(state): State<AppState>,
    Form(form): Form<PlaceForm>,
) -> Result<Response, ApiError> {
    match state.service.find_nearest_stop(&form.place).await {
        Ok(lookup) => {
            info!(place = %lookup.place, stop = %lookup.stop.name, "Rendering station page");
            let page = state.templates.render_station(&StationPageData::from(&lookup))?;
            Ok(Html(page).into_response())
        },
        Err(e) => {
            let error = ApiError::from(e);
            warn!(code = error.code(), error = %error, "Lookup failed");
            render_error_page(&state, &error)
        },
    }
}

fn render_error_page(state: &AppState, error: &ApiError) -> Result<Response, ApiError> {
    let page = state.templates.render_error(&error.public_message())?;
    Ok((error.status(), Html(page)).into_response())
}
