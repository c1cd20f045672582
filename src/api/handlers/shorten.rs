//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "long_url": "https://example.com/some/page",
///   "ttl_seconds": 3600,        // optional
///   "custom_alias": "promo"     // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "3d7",
///   "short_url": "https://s.example.com/3d7",
///   "long_url": "https://example.com/some/page",
///   "ttl_seconds": 3600,
///   "created_at": "2026-01-01T00:00:00Z",
///   "expires_at": "2026-01-01T01:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL, TTL, or alias shape and
/// 409 Conflict when the requested alias is already in use.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(payload.long_url, payload.custom_alias, payload.ttl_seconds)
        .await?;

    let short_url = state.link_service.short_url(&state.base_url, &link.code);

    Ok(Json(ShortenResponse {
        code: link.code,
        short_url,
        long_url: link.long_url,
        ttl_seconds: link.ttl_seconds,
        created_at: link.created_at,
        expires_at: link.expires_at,
    }))
}
