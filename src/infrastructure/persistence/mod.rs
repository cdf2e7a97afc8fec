//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryUrlRepository`] - Lock-guarded bidirectional URL index with domain counters

pub mod memory_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
