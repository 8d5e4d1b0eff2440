//! API route configuration.
//!
//! # Endpoints
//!
//! - `POST /shorten`       - Create a short link
//! - `GET  /links/{code}`  - Link info, does not count a visit
//! - `GET  /health`        - Store health
//! - `GET  /{code}`        - Redirect and count
//! - `GET  /`              - Redirect without code (400)

use crate::api::handlers::{
    health_handler, link_info_handler, missing_code_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All routes, without state or middleware applied.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links/{code}", get(link_info_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .route("/", get(missing_code_handler))
}
