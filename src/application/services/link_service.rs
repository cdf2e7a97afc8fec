//! Link creation and resolution service.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::domain::entities::ShortLink;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_normalizer::{extract_domain, normalize_url, validate_url};

/// Domain recorded when the host of a stored URL cannot be extracted.
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Service for shortening URLs and resolving short codes.
///
/// Handles validation, normalization, idempotency and collision resolution
/// so each normalized URL owns exactly one code and each code exactly one URL.
pub struct LinkService<R: UrlRepository, G: CodeGenerator> {
    repository: Arc<R>,
    generator: G,
    base_url: String,
    /// Serialises the miss path of [`Self::shorten`]: re-check, code
    /// selection, store write and domain increment.
    write_gate: Mutex<()>,
}

impl<R: UrlRepository, G: CodeGenerator> LinkService<R, G> {
    /// Creates a new link service.
    ///
    /// `base_url` is the prefix of every short URL; a trailing slash is
    /// ignored.
    pub fn new(repository: Arc<R>, generator: G, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            generator,
            base_url: base_url.into(),
            write_gate: Mutex::new(()),
        }
    }

    /// Shortens a URL.
    ///
    /// # Idempotency
    ///
    /// If the normalized URL was already shortened, the existing link is
    /// returned and no domain counter is touched. Concurrent calls for the
    /// same URL all receive the same code and count the domain once.
    ///
    /// # Code Selection
    ///
    /// The candidate code comes from the generator. While the candidate is
    /// taken by another URL, `1`, `2`, `3`, … is appended to the original
    /// candidate until a free code is found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty, malformed, uses a
    /// scheme other than http/https, or has no host.
    pub fn shorten(&self, raw_url: &str) -> Result<ShortLink, AppError> {
        validate_url(raw_url)?;

        let normalized_url = normalize_url(raw_url);

        if let Some(code) = self.repository.find_by_url(&normalized_url) {
            debug!(code = %code, "URL already shortened");
            return Ok(self.short_link(code, normalized_url));
        }

        let _gate = self.write_gate.lock();

        // Another caller may have stored this URL while we waited.
        if let Some(code) = self.repository.find_by_url(&normalized_url) {
            debug!(code = %code, "URL shortened concurrently");
            return Ok(self.short_link(code, normalized_url));
        }

        let code = self.select_free_code(self.generator.generate(&normalized_url));

        // Unreachable for inputs that passed validate_url, which parses the same form.
        let domain = extract_domain(&normalized_url).unwrap_or_else(|e| {
            warn!(url = %normalized_url, error = %e, "Failed to extract domain");
            UNKNOWN_DOMAIN.to_string()
        });

        self.repository.put(&code, &normalized_url);
        self.repository.increment_domain(&domain);

        info!(code = %code, domain = %domain, "Created short link");

        Ok(self.short_link(code, normalized_url))
    }

    /// Resolves a short code to its stored URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.repository
            .find_by_code(code)
            .ok_or_else(|| AppError::not_found("Short URL not found"))
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    fn short_link(&self, code: String, long_url: String) -> ShortLink {
        let short_url = self.short_url(&code);
        ShortLink::new(code, long_url, short_url)
    }

    /// Appends an increasing suffix to `candidate` until the code is unused.
    fn select_free_code(&self, candidate: String) -> String {
        let mut code = candidate.clone();
        let mut suffix: u64 = 0;

        while self.repository.find_by_code(&code).is_some() {
            suffix += 1;
            code = format!("{candidate}{suffix}");
        }

        if suffix > 0 {
            debug!(candidate = %candidate, code = %code, "Resolved code collision");
        }

        code
    }
}
