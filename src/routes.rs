//! Top-level router combining routes, state and middleware.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Router with state and tracing applied, without path normalization.
///
/// Used directly by tests; the server wraps it with [`app_router`].
pub fn router(state: AppState) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
