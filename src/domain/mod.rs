//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - Error taxonomy shared by stores and services
//!
//! The domain layer has no dependency on the HTTP layer. Services in
//! [`crate::application::services`] orchestrate it.

pub mod entities;
pub mod error;
pub mod repositories;
