//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. A missing scheme is completed with `https://`.
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

/// Response for a shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    /// The URL exactly as it was submitted.
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_defaults_to_empty() {
        let request: ShortenRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.url, "");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_non_empty_url_passes() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"url": "example.com"}"#).unwrap();

        assert!(request.validate().is_ok());
    }
}
