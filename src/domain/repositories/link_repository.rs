//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the code → long URL mapping.
///
/// Implementations must enforce a uniqueness constraint on `code` at the
/// store level; the application-level existence pre-check is an early exit,
/// not the safety mechanism. A lost check/insert race surfaces from
/// [`LinkRepository::insert`] as [`AppError::Conflict`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken (unique
    /// constraint violation) and [`AppError::Internal`] on store errors.
    async fn insert(&self, link: ShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its exact short code, regardless of expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Finds a link by its normalized long URL.
    ///
    /// Used by the idempotent-reuse path to check whether a URL has already
    /// been shortened.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortLink>, AppError>;

    /// Deletes a link by code, returning whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError>;
}
