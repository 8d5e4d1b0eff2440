//! HTTP layer translating requests into service calls.
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - Request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
