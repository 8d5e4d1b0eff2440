//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{DEFAULT_STORE_TIMEOUT, RedirectService, ShortenerService};
use crate::domain::repositories::LinkRepository;

/// Handles to the services and the store, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub redirector: Arc<RedirectService>,
    pub repository: Arc<dyn LinkRepository>,
    /// Prefix used to build `short_url` in responses, without trailing slash.
    pub base_url: String,
    /// Deadline for store calls made directly by handlers.
    pub store_timeout: Duration,
}

impl AppState {
    pub fn new(
        shortener: Arc<ShortenerService>,
        redirector: Arc<RedirectService>,
        repository: Arc<dyn LinkRepository>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            shortener,
            redirector,
            repository,
            base_url,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Sets the deadline for store calls made directly by handlers.
    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
