//! Short code resolution service.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::{DEFAULT_STORE_TIMEOUT, with_deadline};
use crate::domain::entities::Link;
use crate::domain::error::LinkError;
use crate::domain::repositories::LinkRepository;

/// Resolves short codes to their original URLs.
///
/// A resolve counts the visit and fetches the target in one store operation,
/// so a URL is never returned without its click being recorded.
pub struct RedirectService {
    repository: Arc<dyn LinkRepository>,
    store_timeout: Duration,
}

impl RedirectService {
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            repository,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Sets the deadline applied to each store call.
    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Counts a visit to `code` and returns its original URL.
    ///
    /// # Errors
    ///
    /// - [`LinkError::EmptyCode`] if `code` is empty
    /// - [`LinkError::CodeNotFound`] if no link has this code
    /// - [`LinkError::Storage`] on store failures
    pub async fn resolve(&self, code: &str) -> Result<String, LinkError> {
        if code.is_empty() {
            return Err(LinkError::EmptyCode);
        }

        let link = with_deadline(self.store_timeout, self.repository.increment_click(code))
            .await?
            .ok_or_else(|| LinkError::CodeNotFound(code.to_string()))?;

        debug!(code = %link.code, clicks = link.click_count, "Resolved short code");
        Ok(link.original_url)
    }

    /// Returns the link stored under `code` without counting a visit.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub async fn lookup(&self, code: &str) -> Result<Link, LinkError> {
        if code.is_empty() {
            return Err(LinkError::EmptyCode);
        }

        with_deadline(self.store_timeout, self.repository.find_by_code(code))
            .await?
            .ok_or_else(|| LinkError::CodeNotFound(code.to_string()))
    }
}
