//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL, counting the visit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with 307 Temporary Redirect so browsers come back through the
/// service on every visit and each one is counted.
///
/// # Errors
///
/// - 404 if the code is unknown
/// - 500 on storage failures
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let original_url = state.redirector.resolve(&code).await?;
    Ok(Redirect::temporary(&original_url))
}

/// Handles `GET /`, a redirect request without a code.
///
/// Always answers 400.
pub async fn missing_code_handler(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let original_url = state.redirector.resolve("").await?;
    Ok(Redirect::temporary(&original_url))
}
