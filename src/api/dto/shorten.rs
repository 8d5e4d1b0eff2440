//! DTOs for link shortening and link info endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Serialize)]
pub struct ShortenRequest {
    /// The original URL, stored verbatim. Must not be empty.
    pub url: String,
}

/// A stored link as returned by the API.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub short_url: String,
}

impl LinkResponse {
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            code: link.code,
            original_url: link.original_url,
            click_count: link.click_count,
            created_at: link.created_at,
            short_url,
        }
    }
}
