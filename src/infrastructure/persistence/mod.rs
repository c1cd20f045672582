//! Repository implementations.
//!
//! - [`PgLinkRepository`] / [`PgSequenceRepository`] - PostgreSQL via SQLx
//! - [`InMemoryLinkRepository`] / [`InMemorySequenceRepository`] - in-process,
//!   for tests and ephemeral deployments

pub mod memory;
pub mod pg_link_repository;
pub mod pg_sequence_repository;

pub use memory::{InMemoryLinkRepository, InMemorySequenceRepository};
pub use pg_link_repository::PgLinkRepository;
pub use pg_sequence_repository::PgSequenceRepository;
