//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkTotals, NewLink};
use crate::domain::error::LinkError;
use async_trait::async_trait;

/// Storage contract for short links.
///
/// Implementations must guarantee code uniqueness and atomic click increments
/// on their own; callers never lock around these methods.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::DuplicateCode`] if the code is already stored.
    /// The check is made by the store itself, so two concurrent inserts of the
    /// same code can never both succeed.
    ///
    /// Returns [`LinkError::Storage`] on any other failure.
    async fn create(&self, new_link: NewLink) -> Result<Link, LinkError>;

    /// Finds a link by its exact short code.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Storage`] on storage failures.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, LinkError>;

    /// Increments the click counter of a link and returns the updated record.
    ///
    /// Read and write happen in a single atomic operation. Returns `Ok(None)`
    /// when no link has this code.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Storage`] on storage failures.
    async fn increment_click(&self, code: &str) -> Result<Option<Link>, LinkError>;

    /// Counts stored links and sums their clicks.
    async fn totals(&self) -> Result<LinkTotals, LinkError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), LinkError>;
}
