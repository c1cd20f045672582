//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link storage with store-enforced code uniqueness
//! - [`SequenceRepository`] - Atomic named counters for sequence-seeded codes

pub mod link_repository;
pub mod sequence_repository;

pub use link_repository::LinkRepository;
pub use sequence_repository::{SequenceRepository, URL_CODE_SEQUENCE};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use sequence_repository::MockSequenceRepository;
