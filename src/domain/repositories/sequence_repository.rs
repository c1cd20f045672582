//! Repository trait for atomic sequence allocation.

use crate::error::AppError;
use async_trait::async_trait;

/// Default sequence used for generated short codes.
pub const URL_CODE_SEQUENCE: &str = "url_code";

/// Atomically incremented named counter stored externally.
///
/// Two concurrent calls never receive the same value and the sequence
/// strictly increases by one per call. The counter is created lazily on
/// first allocation and is never reset, so values are not reused across
/// process restarts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SequenceRepository: Send + Sync {
    /// Returns the next value of the named sequence.
    ///
    /// Must be a single atomic increment-and-return against the store; the
    /// caller never fabricates a value when the store is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the increment fails.
    async fn next(&self, name: &str) -> Result<i64, AppError>;
}
