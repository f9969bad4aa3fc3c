use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use chrono::{Datelike, Utc};
use storage::dto::wrapped::{WrappedQuery, WrappedResponse};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services::{self, WrappedWindow};

#[utoipa::path(
    get,
    path = "/api/wrapped",
    params(WrappedQuery),
    responses(
        (status = 200, description = "Wrapped awards for the year, or a coming-soon placeholder in early December", body = WrappedResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 404, description = "Wrapped is only available in December")
    ),
    tag = "wrapped"
)]
pub async fn get_wrapped(
    State(state): State<AppState>,
    query: Result<Query<WrappedQuery>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(query) = query.map_err(|rejection| WebError::BadRequest(rejection.body_text()))?;
    query.validate()?;

    let today = Utc::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let preview = services::is_preview(state.wrapped_test_key.as_deref(), query.test.as_deref());
    let window = WrappedWindow::for_day(today, preview);

    if preview {
        tracing::info!("Serving wrapped preview for {}", year);
    }

    let response = services::load_wrapped(state.db.pool(), window, year)
        .await?
        .ok_or_else(|| WebError::NotFound("Wrapped is only available in December".to_string()))?;

    Ok(Json(response).into_response())
}
