//! # Shortlink
//!
//! A small in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the repository trait
//! - **Application Layer** ([`application`]) - Shortening, resolution and statistics
//! - **Infrastructure Layer** ([`infrastructure`]) - Concurrency-safe in-memory store
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Deterministic 8-character codes derived from an MD5 digest of the URL
//! - Idempotent shortening: the same URL always yields the same short URL
//! - Numeric-suffix collision resolution
//! - Per-domain counters with a top-N report
//!
//! Nothing is persisted; all data is lost when the process exits.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::entities::{DomainCount, ShortLink};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUrlRepository;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, DigestCodeGenerator};
}
