//! In-memory implementation of link repository.
//!
//! Backs tests and database-less runs. The map entry API gives the same
//! guarantees the unique constraint and `UPDATE ... RETURNING` give in
//! PostgreSQL: insert-if-absent and read-modify-write happen under the
//! shard lock of the affected key.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Link, LinkTotals, NewLink};
use crate::domain::error::LinkError;
use crate::domain::repositories::LinkRepository;

/// Process-local link store keyed by short code.
#[derive(Debug)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, Link>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, LinkError> {
        match self.links.entry(new_link.code) {
            Entry::Occupied(existing) => Err(LinkError::DuplicateCode(existing.key().clone())),
            Entry::Vacant(slot) => {
                let link = Link::new(
                    self.next_id.fetch_add(1, Ordering::Relaxed),
                    slot.key().clone(),
                    new_link.original_url,
                    0,
                    Utc::now(),
                );
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, LinkError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn increment_click(&self, code: &str) -> Result<Option<Link>, LinkError> {
        Ok(self.links.get_mut(code).map(|mut entry| {
            entry.click_count += 1;
            entry.value().clone()
        }))
    }

    async fn totals(&self) -> Result<LinkTotals, LinkError> {
        let mut totals = LinkTotals::default();
        for entry in self.links.iter() {
            totals.links += 1;
            totals.clicks += entry.click_count;
        }
        Ok(totals)
    }

    async fn ping(&self) -> Result<(), LinkError> {
        Ok(())
    }
}
