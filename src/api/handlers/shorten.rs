//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::HeaderValue};
use serde_json::json;

use crate::api::dto::shorten::{LinkResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "code": "AB12",
///   "original_url": "https://example.com",
///   "click_count": 0,
///   "created_at": "2025-01-01T00:00:00Z",
///   "short_url": "http://localhost:8080/AB12"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is not valid JSON, `url` is empty, or `url` cannot be
///   sent back in a `Location` header (control characters, for instance)
/// - 503 if no free code was found within the retry budget
/// - 500 on storage failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::bad_request("Invalid JSON", json!({ "reason": rejection.body_text() }))
    })?;

    // Redirects carry the URL in a header, so it must be a valid header value.
    if HeaderValue::try_from(request.url.as_str()).is_err() {
        return Err(AppError::bad_request(
            "url cannot be used as a redirect target",
            json!({ "field": "url" }),
        ));
    }

    let link = state.shortener.shorten(&request.url).await?;
    let short_url = state.short_url(&link.code);

    Ok(Json(LinkResponse::from_link(link, short_url)))
}
