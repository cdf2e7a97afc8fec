//! In-memory implementation of the URL repository.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::repositories::UrlRepository;

/// The three indices guarded together by one lock.
#[derive(Debug, Default)]
struct Indices {
    code_to_url: HashMap<String, String>,
    url_to_code: HashMap<String, String>,
    domain_counts: HashMap<String, u64>,
}

/// Process-local repository holding every mapping behind a single
/// [`parking_lot::RwLock`].
///
/// Lookups and snapshots take the shared guard, mutations the exclusive one,
/// so a `put` is observed in both directions at once and a snapshot never
/// reflects a half-applied increment. Contents live as long as the
/// repository; nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    inner: RwLock<Indices>,
}

impl InMemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl UrlRepository for InMemoryUrlRepository {
    fn put(&self, code: &str, url: &str) {
        let mut guard = self.inner.write();
        let indices = &mut *guard;

        // Drop stale reverse entries so both maps keep describing one bijection.
        if let Some(old_url) = indices.code_to_url.get(code)
            && old_url != url
            && indices.url_to_code.get(old_url).map(String::as_str) == Some(code)
        {
            let old_url = old_url.clone();
            indices.url_to_code.remove(&old_url);
        }
        if let Some(old_code) = indices.url_to_code.get(url)
            && old_code != code
            && indices.code_to_url.get(old_code).map(String::as_str) == Some(url)
        {
            let old_code = old_code.clone();
            indices.code_to_url.remove(&old_code);
        }

        indices
            .code_to_url
            .insert(code.to_string(), url.to_string());
        indices
            .url_to_code
            .insert(url.to_string(), code.to_string());
    }

    fn find_by_code(&self, code: &str) -> Option<String> {
        self.inner.read().code_to_url.get(code).cloned()
    }

    fn find_by_url(&self, url: &str) -> Option<String> {
        self.inner.read().url_to_code.get(url).cloned()
    }

    fn increment_domain(&self, domain: &str) {
        let mut guard = self.inner.write();
        *guard.domain_counts.entry(domain.to_string()).or_insert(0) += 1;
    }

    fn domain_counts(&self) -> HashMap<String, u64> {
        self.inner.read().domain_counts.clone()
    }

    fn link_count(&self) -> usize {
        self.inner.read().code_to_url.len()
    }
}
