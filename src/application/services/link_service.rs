//! Link creation and redirect resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkRepository, SequenceRepository, URL_CODE_SEQUENCE};
use crate::error::AppError;
use crate::utils::base62;
use crate::utils::code_generator::{derive_code, mint_identifier, validate_custom_alias};
use crate::utils::url_normalizer::normalize_url;
use chrono::Utc;
use serde_json::json;

/// Largest accepted TTL, 100 years in seconds. Anything above this is
/// rejected up front so expiry arithmetic stays well inside the range
/// `chrono` can represent.
pub const MAX_TTL_SECONDS: i64 = 100 * 365 * 24 * 60 * 60;

/// Seeding strategy for generated short codes.
///
/// Both strategies feed base62 encoding; they differ only in where the seed
/// integer comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeStrategy {
    /// Atomic store-side counter, yields short monotonically growing codes.
    Sequence,
    /// Freshly minted random identifier, no store round-trip per candidate.
    Identifier,
}

/// Service for creating and resolving shortened links.
///
/// Ties URL normalization, custom-alias handling, uniqueness-checked code
/// derivation, TTL computation, and persistence together.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    sequence_repository: Arc<dyn SequenceRepository>,
    strategy: CodeStrategy,
    /// When enabled, a live mapping for an already-shortened URL is returned
    /// instead of minting a new code; an expired mapping is deleted and
    /// replaced.
    reuse_existing: bool,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        sequence_repository: Arc<dyn SequenceRepository>,
        strategy: CodeStrategy,
        reuse_existing: bool,
    ) -> Self {
        Self {
            link_repository,
            sequence_repository,
            strategy,
            reuse_existing,
        }
    }

    /// Creates a short link.
    ///
    /// # Flow
    ///
    /// 1. Normalize and validate the long URL
    /// 2. Custom alias: validate, check availability, use verbatim;
    ///    otherwise optionally reuse an existing live mapping, else derive
    ///    a unique code from the configured strategy
    /// 3. Compute expiry from the TTL (clock read once)
    /// 4. Persist; a duplicate-key race on a generated code retries the
    ///    cycle, on a custom alias it surfaces as a conflict
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid URL, malformed alias,
    /// or out-of-range TTL; [`AppError::Conflict`] for a taken alias;
    /// [`AppError::Internal`] for store failures or an exhausted retry loop.
    pub async fn create_short_link(
        &self,
        long_url: String,
        custom_alias: Option<String>,
        ttl_seconds: Option<i64>,
    ) -> Result<ShortLink, AppError> {
        let normalized_url = normalize_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(ttl) = ttl_seconds {
            if ttl <= 0 || ttl > MAX_TTL_SECONDS {
                return Err(AppError::bad_request(
                    "ttl_seconds must be between 1 and 3153600000",
                    json!({ "ttl_seconds": ttl, "max": MAX_TTL_SECONDS }),
                ));
            }
        }

        if let Some(alias) = custom_alias {
            return self.create_with_alias(normalized_url, alias, ttl_seconds).await;
        }

        if self.reuse_existing {
            if let Some(existing) = self
                .link_repository
                .find_by_long_url(&normalized_url)
                .await?
            {
                if existing.is_live(Utc::now()) {
                    return Ok(existing);
                }

                // Stale mapping for this URL: delete-and-replace.
                let deleted = self.link_repository.delete_by_code(&existing.code).await?;
                if !deleted {
                    return Err(AppError::internal(
                        "Failed to delete expired link",
                        json!({ "code": existing.code }),
                    ));
                }
            }
        }

        self.create_with_generated_code(normalized_url, ttl_seconds)
            .await
    }

    /// Resolves a short code to its long URL.
    ///
    /// Expired and never-existed codes are indistinguishable to the caller;
    /// the stored URL is returned unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live link matches the code.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let not_found =
            || AppError::not_found("Short link not found", json!({ "code": code }));

        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(not_found)?;

        if !link.is_live(Utc::now()) {
            return Err(not_found());
        }

        Ok(link.long_url)
    }

    /// Constructs the full short URL from the configured base URL and a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Probes the backing store with a cheap lookup.
    ///
    /// `health` is a reserved alias, so the probe never matches a real link.
    pub async fn store_healthy(&self) -> bool {
        self.link_repository.find_by_code("health").await.is_ok()
    }

    async fn create_with_alias(
        &self,
        long_url: String,
        alias: String,
        ttl_seconds: Option<i64>,
    ) -> Result<ShortLink, AppError> {
        validate_custom_alias(&alias)?;

        let alias_taken =
            || AppError::conflict("Custom alias already in use", json!({ "alias": alias }));

        if self.link_repository.find_by_code(&alias).await?.is_some() {
            return Err(alias_taken());
        }

        let link = ShortLink::new(alias.clone(), long_url, Utc::now(), ttl_seconds);
        match self.link_repository.insert(link).await {
            Ok(link) => Ok(link),
            // The check/insert race was lost; report the alias as taken.
            Err(AppError::Conflict { .. }) => Err(alias_taken()),
            Err(e) => Err(e),
        }
    }

    /// Derives a unique code and persists the link, retrying the whole
    /// derive-check-insert cycle on a lost duplicate-key race.
    ///
    /// Seeds are globally unique by construction, so the bound is a safety
    /// net rather than an expected path.
    async fn create_with_generated_code(
        &self,
        long_url: String,
        ttl_seconds: Option<i64>,
    ) -> Result<ShortLink, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = self.next_candidate().await?;

            if self.link_repository.find_by_code(&code).await?.is_some() {
                continue;
            }

            let link = ShortLink::new(code, long_url.clone(), Utc::now(), ttl_seconds);
            match self.link_repository.insert(link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    async fn next_candidate(&self) -> Result<String, AppError> {
        match self.strategy {
            CodeStrategy::Sequence => {
                let value = self.sequence_repository.next(URL_CODE_SEQUENCE).await?;
                Ok(base62::encode(value as u64))
            }
            CodeStrategy::Identifier => Ok(derive_code(mint_identifier())),
        }
    }
}
