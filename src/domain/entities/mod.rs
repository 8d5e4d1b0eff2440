//! Core domain entities.
//!
//! - [`Link`] - A shortened URL with its click counter
//! - [`NewLink`] - Insert payload for a link
//! - [`LinkTotals`] - Aggregate counts across all links

pub mod link;

pub use link::{Link, LinkTotals, NewLink};
