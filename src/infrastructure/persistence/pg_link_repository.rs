//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct LinkRow {
    code: String,
    long_url: String,
    created_at: DateTime<Utc>,
    ttl_seconds: Option<i64>,
    expires_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for ShortLink {
    fn from(row: LinkRow) -> Self {
        ShortLink {
            code: row.code,
            long_url: row.long_url,
            created_at: row.created_at,
            ttl_seconds: row.ttl_seconds,
            expires_at: row.expires_at,
        }
    }
}

/// PostgreSQL repository for short link storage and retrieval.
///
/// The `short_links_code_key` unique index is the source of truth for code
/// uniqueness; insert races surface as [`AppError::Conflict`] via the
/// store's duplicate-key error.
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
    async fn insert(&self, link: ShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO short_links (code, long_url, created_at, ttl_seconds, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING code, long_url, created_at, ttl_seconds, expires_at
            "#,
        )
        .bind(&link.code)
        .bind(&link.long_url)
        .bind(link.created_at)
        .bind(link.ttl_seconds)
        .bind(link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, long_url, created_at, ttl_seconds, expires_at
            FROM short_links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, long_url, created_at, ttl_seconds, expires_at
            FROM short_links
            WHERE long_url = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_links WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
