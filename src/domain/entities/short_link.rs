//! Short link entity returned by the shortening operation.

/// A short code together with the URL it resolves to.
///
/// `long_url` is always the normalized form (scheme completed), which is what
/// the store keeps and what redirects point at. `short_url` is the externally
/// visible URL built from the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(code: String, long_url: String, short_url: String) -> Self {
        Self {
            code,
            long_url,
            short_url,
        }
    }
}
