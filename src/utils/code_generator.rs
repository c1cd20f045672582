//! Short code derivation and custom alias validation.

use crate::error::AppError;
use crate::utils::base62;
use serde_json::json;

/// Minimum length of a custom alias.
const ALIAS_MIN_LENGTH: usize = 3;

/// Maximum length of a custom alias.
const ALIAS_MAX_LENGTH: usize = 32;

/// Aliases that cannot be claimed because they collide with service routes.
const RESERVED_ALIASES: &[&str] = &["health", "shorten", "api"];

/// Derives a candidate short code from an opaque identifier.
///
/// Identifiers are globally unique with overwhelming probability, so
/// collisions are resolved by the caller's uniqueness check rather than
/// prevented here.
pub fn derive_code(identifier: u64) -> String {
    base62::encode(identifier)
}

/// Mints a fresh opaque identifier for code derivation.
pub fn mint_identifier() -> u64 {
    rand::random::<u64>()
}

/// Validates a user-provided custom alias.
///
/// # Rules
///
/// - Length: 3-32 characters
/// - Allowed characters: letters, digits, hyphens, underscores
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if alias.len() < ALIAS_MIN_LENGTH || alias.len() > ALIAS_MAX_LENGTH {
        return Err(AppError::bad_request(
            "Custom alias must be 3-32 characters",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom alias can only contain letters, digits, hyphens, and underscores",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_derive_code_is_base62() {
        let code = derive_code(mint_identifier());
        assert!(base62::is_base62(&code));
    }

    #[test]
    fn test_derive_code_deterministic_per_identifier() {
        assert_eq!(derive_code(12345), derive_code(12345));
        assert_ne!(derive_code(12345), derive_code(12346));
    }

    #[test]
    fn test_minted_identifiers_are_distinct() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.insert(mint_identifier());
        }
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_validate_minimum_length() {
        assert!(validate_custom_alias("abc").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        assert!(validate_custom_alias(&"a".repeat(32)).is_ok());
    }

    #[test]
    fn test_validate_mixed_case_and_separators() {
        assert!(validate_custom_alias("My-Promo_2025").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let err = validate_custom_alias("ab").unwrap_err();
        assert!(err.to_string().contains("3-32"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_custom_alias(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_validate_rejects_special_characters() {
        assert!(validate_custom_alias("my code").is_err());
        assert!(validate_custom_alias("promo!").is_err());
        assert!(validate_custom_alias("a/b").is_err());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_custom_alias("").is_err());
    }

    #[test]
    fn test_validate_all_reserved_aliases() {
        for &reserved in RESERVED_ALIASES {
            assert!(
                validate_custom_alias(reserved).is_err(),
                "reserved alias '{}' should be invalid",
                reserved
            );
        }
    }
}
