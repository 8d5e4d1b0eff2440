//! Short link creation service.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::{DEFAULT_STORE_TIMEOUT, with_deadline};
use crate::domain::entities::{Link, NewLink};
use crate::domain::error::LinkError;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::CodeGenerator;

/// Default number of codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Service for creating shortened links.
///
/// Draws random codes and lets the repository decide whether a code is free.
/// A collision costs one failed insert and is retried with a new code; any
/// other store failure ends the request.
pub struct ShortenerService {
    repository: Arc<dyn LinkRepository>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
    store_timeout: Duration,
}

impl ShortenerService {
    /// Creates a new shortener with default retry and timeout settings.
    pub fn new(repository: Arc<dyn LinkRepository>, generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            repository,
            generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Sets how many codes are tried per request. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sets the deadline applied to each store call.
    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Creates a short link for `original_url`.
    ///
    /// The URL is stored verbatim; only emptiness is checked.
    ///
    /// # Errors
    ///
    /// - [`LinkError::EmptyUrl`] if `original_url` is empty (nothing is written)
    /// - [`LinkError::CodeSpaceExhausted`] if every attempt collided
    /// - [`LinkError::Storage`] on the first non-collision store failure
    pub async fn shorten(&self, original_url: &str) -> Result<Link, LinkError> {
        if original_url.is_empty() {
            return Err(LinkError::EmptyUrl);
        }

        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();
            debug!(attempt, code = %code, "Trying short code");

            let new_link = NewLink::new(code, original_url);
            match with_deadline(self.store_timeout, self.repository.create(new_link)).await {
                Ok(link) => {
                    info!(code = %link.code, id = link.id, attempt, "Short link created");
                    return Ok(link);
                }
                Err(LinkError::DuplicateCode(code)) => {
                    warn!(attempt, code = %code, "Short code collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            attempts = self.max_attempts,
            "Gave up generating a short code"
        );
        Err(LinkError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }
}
