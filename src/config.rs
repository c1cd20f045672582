//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `DATABASE_URL` - PostgreSQL connection string
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Prefix for caller-facing short URLs
//!   (default: `http://localhost:3000`)
//! - `CODE_STRATEGY` - `sequence` or `identifier` (default: `sequence`)
//! - `REUSE_EXISTING` - Return the existing mapping when a URL was already
//!   shortened (default: `true`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` / `DB_CONNECT_TIMEOUT` - Pool sizing knobs

use crate::application::services::CodeStrategy;
use anyhow::{Context, Result, bail};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Seeding strategy for generated short codes.
    pub code_strategy: CodeStrategy,
    /// When true, shortening an already-shortened URL returns the existing
    /// live mapping instead of minting a new code.
    pub reuse_existing: bool,

    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a knob fails to
    /// parse.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_strategy = match env::var("CODE_STRATEGY").as_deref() {
            Ok("identifier") => CodeStrategy::Identifier,
            Ok("sequence") | Err(_) => CodeStrategy::Sequence,
            Ok(other) => bail!("Unknown CODE_STRATEGY '{other}' (expected sequence or identifier)"),
        };

        let reuse_existing = env::var("REUSE_EXISTING")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            log_level,
            log_format,
            code_strategy,
            reuse_existing,
            db_max_connections,
            db_connect_timeout,
        })
    }
}
