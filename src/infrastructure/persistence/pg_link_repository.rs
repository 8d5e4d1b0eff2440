//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkTotals, NewLink};
use crate::domain::error::LinkError;
use crate::domain::repositories::LinkRepository;
use crate::utils::db_error::is_unique_violation_on_code;

/// Row shape shared by every query returning a full link.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    original_url: String,
    click_count: i64,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.code,
            row.original_url,
            row.click_count,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Code uniqueness comes from the `links_code_key` constraint and click
/// increments are a single `UPDATE ... RETURNING`, so the database settles
/// every race between concurrent requests.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, LinkError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, original_url)
            VALUES ($1, $2)
            RETURNING id, code, original_url, click_count, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.original_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                LinkError::DuplicateCode(new_link.code.clone())
            } else {
                LinkError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, LinkError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, original_url, click_count, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_click(&self, code: &str) -> Result<Option<Link>, LinkError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET click_count = click_count + 1
            WHERE code = $1
            RETURNING id, code, original_url, click_count, created_at
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn totals(&self) -> Result<LinkTotals, LinkError> {
        let (links, clicks) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COALESCE(SUM(click_count), 0)::BIGINT FROM links",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(LinkTotals { links, clicks })
    }

    async fn ping(&self) -> Result<(), LinkError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
