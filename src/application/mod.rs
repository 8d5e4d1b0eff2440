//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::ShortenerService`] - Code generation, collision retry, persistence
//! - [`services::RedirectService`] - Click-counting resolution and read-only lookup

pub mod services;
