//! PostgreSQL implementation of the sequence repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::SequenceRepository;
use crate::error::AppError;

/// PostgreSQL-backed atomic counter.
///
/// The increment is a single upsert statement, so concurrent callers are
/// serialized by the row lock and never observe the same value. The counter
/// row is created lazily on first allocation.
pub struct PgSequenceRepository {
    pool: Arc<PgPool>,
}

impl PgSequenceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SequenceRepository for PgSequenceRepository {
    async fn next(&self, name: &str) -> Result<i64, AppError> {
        let value = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO sequences (name, value)
            VALUES ($1, 1)
            ON CONFLICT (name) DO UPDATE SET value = sequences.value + 1
            RETURNING value
            "#,
        )
        .bind(name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(value)
    }
}
