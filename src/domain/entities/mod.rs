//! Core domain entities representing the business data model.
//!
//! - [`ShortLink`] - A shortened URL mapping with its expiry policy

pub mod link;

pub use link::{ShortLink, compute_expires_at};
