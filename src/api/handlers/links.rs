//! Handler for link info endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::shorten::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a stored link and its click count without counting a visit.
///
/// # Endpoint
///
/// `GET /links/{code}`
///
/// # Errors
///
/// - 404 if the code is unknown
/// - 500 on storage failures
pub async fn link_info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.redirector.lookup(&code).await?;
    let short_url = state.short_url(&link.code);

    Ok(Json(LinkResponse::from_link(link, short_url)))
}
