//! URL validation, normalization and domain extraction.
//!
//! Validation and normalization share one scheme rule: an input that does
//! not start with `http://` or `https://` gets `https://` prepended. Validation
//! always runs against that scheme-completed form, so the two never disagree
//! about which inputs are acceptable.

use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};

/// Scheme prepended to inputs that do not carry `http://` or `https://`.
const DEFAULT_SCHEME: &str = "https://";

/// Matches an explicit `<scheme>://` prefix.
static SCHEME_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*)://").unwrap());

/// Reasons a URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must use http or https scheme")]
    UnsupportedScheme,

    #[error("URL must have a valid host")]
    MissingHost,
}

/// Returns `true` if the input already carries an `http://` or `https://` prefix.
fn has_http_scheme(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Completes the scheme of a URL.
///
/// Inputs starting with `http://` or `https://` are returned unchanged;
/// anything else gets `https://` prepended. No other canonicalization is
/// applied, so the result is what gets stored and compared for idempotency.
///
/// # Examples
///
/// ```
/// use shortlink::utils::url_normalizer::normalize_url;
///
/// assert_eq!(normalize_url("example.com/path"), "https://example.com/path");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// ```
pub fn normalize_url(input: &str) -> String {
    if has_http_scheme(input) {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{input}")
    }
}

/// Validates a raw user-supplied URL.
///
/// # Rules
///
/// 1. Input must not be empty
/// 2. Input must not contain control characters
/// 3. An explicit scheme other than `http`/`https` (e.g. `ftp://`) is rejected
/// 4. The scheme-completed form must parse as a URL
/// 5. The parsed scheme must be `http` or `https`
/// 6. The host must be present and made of letters, digits, `-`, `.` or `_`
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] matching the rules above.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // Url::parse drops tabs and newlines silently; the raw input is what gets stored.
    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains control characters".to_string(),
        ));
    }

    if !has_http_scheme(input) && SCHEME_PREFIX_REGEX.is_match(input) {
        return Err(UrlValidationError::UnsupportedScheme);
    }

    let url = Url::parse(&normalize_url(input))
        .map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedScheme),
    }

    match url.host() {
        None => Err(UrlValidationError::MissingHost),
        Some(Host::Domain(domain)) if domain.is_empty() => Err(UrlValidationError::MissingHost),
        Some(Host::Domain(domain)) => {
            let valid = domain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'));
            if valid {
                Ok(())
            } else {
                Err(UrlValidationError::InvalidFormat(format!(
                    "invalid host '{domain}'"
                )))
            }
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(()),
    }
}

/// Extracts the domain (host without port) from a normalized URL.
///
/// The host is returned in canonical form: lowercase, IDNA-encoded, and
/// IPv6 literals keep their brackets (`[::1]`).
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] if the URL does not parse and
/// [`UrlValidationError::MissingHost`] if it has no host.
pub fn extract_domain(normalized_url: &str) -> Result<String, UrlValidationError> {
    let url = Url::parse(&normalize_url(normalized_url))
        .map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(host.to_string()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
