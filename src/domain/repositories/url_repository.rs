//! Repository trait for the bidirectional URL index and domain counters.

use std::collections::HashMap;

/// Store contract for short code ↔ URL mappings and domain counters.
///
/// All operations are synchronous and total: there is no I/O behind them and
/// no failure mode, so they return plain values rather than `Result`.
///
/// # Concurrency
///
/// Implementations must be safe to call from many threads at once. Lookups
/// and snapshots may run concurrently with each other; `put` and
/// `increment_domain` are exclusive. A `put` must become visible in both
/// directions at once.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UrlRepository: Send + Sync {
    /// Inserts or overwrites the mapping between `code` and `url`.
    fn put(&self, code: &str, url: &str);

    /// Returns the URL stored for a short code.
    fn find_by_code(&self, code: &str) -> Option<String>;

    /// Returns the short code stored for a normalized URL.
    ///
    /// Used for the idempotency check before a new code is generated.
    fn find_by_url(&self, url: &str) -> Option<String>;

    /// Increments the counter for `domain`, creating it at 1 if absent.
    fn increment_domain(&self, domain: &str);

    /// Returns an independent copy of all domain counters taken at a single
    /// point in time.
    fn domain_counts(&self) -> HashMap<String, u64>;

    /// Number of stored short links.
    fn link_count(&self) -> usize;
}
