//! In-memory repository implementations.
//!
//! Used by tests and ephemeral deployments. DashMap's sharded locks make the
//! entry-based check-and-insert atomic per key, mirroring the store-level
//! uniqueness constraint the PostgreSQL implementation relies on.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkRepository, SequenceRepository};
use crate::error::AppError;

/// In-memory implementation of [`LinkRepository`].
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, ShortLink>,
}

impl InMemoryLinkRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, link: ShortLink) -> Result<ShortLink, AppError> {
        match self.links.entry(link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "short_links_pkey" }),
            )),
            Entry::Vacant(entry) => {
                entry.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self
            .links
            .iter()
            .find(|entry| entry.value().long_url == long_url)
            .map(|entry| entry.value().clone()))
    }

    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.remove(code).is_some())
    }
}

/// In-memory implementation of [`SequenceRepository`].
///
/// The entry guard holds the shard lock for the duration of the increment,
/// so concurrent callers never observe the same value.
#[derive(Debug, Default)]
pub struct InMemorySequenceRepository {
    counters: DashMap<String, i64>,
}

impl InMemorySequenceRepository {
    /// Creates an empty in-memory sequence store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SequenceRepository for InMemorySequenceRepository {
    async fn next(&self, name: &str) -> Result<i64, AppError> {
        let mut entry = self.counters.entry(name.to_owned()).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn link(code: &str, url: &str) -> ShortLink {
        ShortLink::new(code.to_string(), url.to_string(), Utc::now(), None)
    }

    #[tokio::test]
    async fn test_insert_and_find_by_code() {
        let repo = InMemoryLinkRepository::new();

        repo.insert(link("abc", "https://example.com/")).await.unwrap();

        let found = repo.find_by_code("abc").await.unwrap().unwrap();
        assert_eq!(found.long_url, "https://example.com/");
        assert!(repo.find_by_code("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_code_conflicts() {
        let repo = InMemoryLinkRepository::new();

        repo.insert(link("abc", "https://one.example/")).await.unwrap();
        let result = repo.insert(link("abc", "https://two.example/")).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_find_by_long_url() {
        let repo = InMemoryLinkRepository::new();

        repo.insert(link("abc", "https://example.com/page")).await.unwrap();

        let found = repo
            .find_by_long_url("https://example.com/page")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.code, "abc");
        assert!(
            repo.find_by_long_url("https://example.com/other")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete_by_code() {
        let repo = InMemoryLinkRepository::new();

        repo.insert(link("abc", "https://example.com/")).await.unwrap();

        assert!(repo.delete_by_code("abc").await.unwrap());
        assert!(!repo.delete_by_code("abc").await.unwrap());
        assert!(repo.find_by_code("abc").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sequence_strictly_increases() {
        let repo = InMemorySequenceRepository::new();

        assert_eq!(repo.next("url_code").await.unwrap(), 1);
        assert_eq!(repo.next("url_code").await.unwrap(), 2);
        assert_eq!(repo.next("url_code").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_sequences_are_independent_per_name() {
        let repo = InMemorySequenceRepository::new();

        assert_eq!(repo.next("a").await.unwrap(), 1);
        assert_eq!(repo.next("b").await.unwrap(), 1);
        assert_eq!(repo.next("a").await.unwrap(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_sequence_no_duplicates_under_concurrency() {
        let repo = Arc::new(InMemorySequenceRepository::new());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                let mut values = Vec::new();
                for _ in 0..100 {
                    values.push(repo.next("url_code").await.unwrap());
                }
                values
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.await.unwrap() {
                assert!(seen.insert(value), "duplicate sequence value {value}");
            }
        }
        assert_eq!(seen.len(), 800);
    }
}
