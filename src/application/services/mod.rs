//! Business logic services for the application layer.

pub mod redirect_service;
pub mod shortener_service;

pub use redirect_service::RedirectService;
pub use shortener_service::ShortenerService;

use std::future::Future;
use std::time::Duration;

use crate::domain::error::{LinkError, StorageError};

/// Default upper bound for a single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs a store call, turning an expired deadline into a storage error.
///
/// The in-flight call is dropped when the deadline passes.
pub(crate) async fn with_deadline<T, F>(limit: Duration, call: F) -> Result<T, LinkError>
where
    F: Future<Output = Result<T, LinkError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(StorageError::Timeout(limit).into()),
    }
}
