//! Short code generation.
//!
//! Codes are derived from the normalized URL alone, so the same URL always
//! maps to the same candidate code. Collisions between different URLs are
//! resolved by the link service, not here.

use base64::Engine as _;
use md5::{Digest, Md5};

/// Maximum length of a generated code.
pub const CODE_LENGTH: usize = 8;

/// Derives a candidate short code from a normalized URL.
///
/// Computes the MD5 digest of the URL bytes, encodes it as URL-safe base64
/// without padding and keeps the first [`CODE_LENGTH`] characters. MD5 is
/// used for its uniform output only; codes are not meant to resist crafted
/// collisions.
///
/// # Examples
///
/// ```
/// use shortlink::utils::code_generator::generate_code;
///
/// assert_eq!(generate_code("https://example.com"), "yYTQaq--");
/// ```
pub fn generate_code(normalized_url: &str) -> String {
    let digest = Md5::digest(normalized_url.as_bytes());

    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .encode(digest)
        .chars()
        .take(CODE_LENGTH)
        .collect()
}

/// Source of candidate short codes.
///
/// Implementations must be deterministic: the idempotency check relies on a
/// URL never being assigned two different candidates.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns the candidate code for a normalized URL.
    fn generate(&self, normalized_url: &str) -> String;
}

/// Production generator backed by [`generate_code`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestCodeGenerator;

impl CodeGenerator for DigestCodeGenerator {
    fn generate(&self, normalized_url: &str) -> String {
        generate_code(normalized_url)
    }
}
