#![allow(dead_code)]

use chrono::{Duration, Utc};
use curtail::application::services::{CodeStrategy, LinkService};
use curtail::domain::entities::ShortLink;
use curtail::domain::repositories::LinkRepository;
use curtail::infrastructure::persistence::{InMemoryLinkRepository, InMemorySequenceRepository};
use curtail::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://s.example.com";

/// Builds an application state backed by in-memory repositories, returning
/// the link repository handle so tests can seed and inspect records.
pub fn create_test_state(
    strategy: CodeStrategy,
    reuse_existing: bool,
) -> (AppState, Arc<InMemoryLinkRepository>) {
    let link_repo = Arc::new(InMemoryLinkRepository::new());
    let seq_repo = Arc::new(InMemorySequenceRepository::new());

    let link_service = Arc::new(LinkService::new(
        link_repo.clone(),
        seq_repo,
        strategy,
        reuse_existing,
    ));

    let state = AppState::new(link_service, BASE_URL.to_string());

    (state, link_repo)
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, code: &str, url: &str) {
    repo.insert(ShortLink::new(
        code.to_string(),
        url.to_string(),
        Utc::now(),
        None,
    ))
    .await
    .unwrap();
}

pub async fn create_expired_link(repo: &InMemoryLinkRepository, code: &str, url: &str) {
    repo.insert(ShortLink::new(
        code.to_string(),
        url.to_string(),
        Utc::now() - Duration::hours(1),
        Some(60),
    ))
    .await
    .unwrap();
}
