//! Short link entity and expiry policy.

use chrono::{DateTime, Duration, Utc};

/// A shortened URL mapping.
///
/// `expires_at` is derived from `created_at` and `ttl_seconds` at creation
/// time; `None` means the link never expires. Records are immutable after
/// creation except for deletion when superseded.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub ttl_seconds: Option<i64>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortLink {
    /// Creates a link, deriving `expires_at` from the requested TTL.
    ///
    /// `created_at` is captured by the caller once so the stored timestamp
    /// and the expiry computation use the same clock reading.
    pub fn new(
        code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        ttl_seconds: Option<i64>,
    ) -> Self {
        let expires_at = compute_expires_at(created_at, ttl_seconds);
        Self {
            code,
            long_url,
            created_at,
            ttl_seconds,
            expires_at,
        }
    }

    /// Returns true if the link is live at `now`: no expiry, or expiry
    /// strictly in the future. An expired link must be treated as not-found
    /// even if the row still physically exists pending cleanup.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|e| e > now)
    }
}

/// Computes the expiry timestamp: `created_at + ttl` when a TTL was
/// requested, otherwise `None` (never expires).
///
/// TTLs beyond the representable range clamp to the latest representable
/// instant instead of panicking; callers enforce a ceiling before the
/// value gets here.
pub fn compute_expires_at(
    created_at: DateTime<Utc>,
    ttl_seconds: Option<i64>,
) -> Option<DateTime<Utc>> {
    ttl_seconds.map(|ttl| {
        Duration::try_seconds(ttl)
            .and_then(|d| created_at.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation_without_ttl() {
        let now = Utc::now();
        let link = ShortLink::new(
            "abc123".to_string(),
            "https://example.com/".to_string(),
            now,
            None,
        );

        assert_eq!(link.code, "abc123");
        assert_eq!(link.long_url, "https://example.com/");
        assert_eq!(link.created_at, now);
        assert!(link.ttl_seconds.is_none());
        assert!(link.expires_at.is_none());
    }

    #[test]
    fn test_link_creation_with_ttl() {
        let now = Utc::now();
        let link = ShortLink::new(
            "abc123".to_string(),
            "https://example.com/".to_string(),
            now,
            Some(60),
        );

        assert_eq!(link.expires_at, Some(now + Duration::seconds(60)));
        assert!(link.expires_at.unwrap() > link.created_at);
    }

    #[test]
    fn test_is_live_without_expiry() {
        let now = Utc::now();
        let link = ShortLink::new("code".to_string(), "https://example.com/".to_string(), now, None);

        assert!(link.is_live(now));
        assert!(link.is_live(now + Duration::days(365 * 100)));
    }

    #[test]
    fn test_is_live_around_expiry_boundary() {
        let created = Utc::now();
        let link = ShortLink::new(
            "code".to_string(),
            "https://example.com/".to_string(),
            created,
            Some(60),
        );

        assert!(link.is_live(created + Duration::seconds(59)));
        assert!(!link.is_live(created + Duration::seconds(60)));
        assert!(!link.is_live(created + Duration::seconds(61)));
    }

    #[test]
    fn test_compute_expires_at() {
        let created = Utc::now();
        assert_eq!(compute_expires_at(created, None), None);
        assert_eq!(
            compute_expires_at(created, Some(60)),
            Some(created + Duration::seconds(60))
        );
    }

    #[test]
    fn test_huge_ttl_clamps_instead_of_panicking() {
        let now = Utc::now();

        let link = ShortLink::new(
            "abc".to_string(),
            "https://example.com/".to_string(),
            now,
            Some(i64::MAX),
        );

        assert_eq!(link.expires_at, Some(DateTime::<Utc>::MAX_UTC));
        assert!(link.is_live(now));
    }
}
