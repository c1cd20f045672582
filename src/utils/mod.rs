//! Utility functions for code derivation and URL processing.
//!
//! - [`base62`] - Positional base62 encoding for generated codes
//! - [`code_generator`] - Candidate derivation and alias validation
//! - [`url_normalizer`] - URL normalization and sanitization

pub mod base62;
pub mod code_generator;
pub mod url_normalizer;
