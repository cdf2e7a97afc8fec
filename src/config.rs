//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export BASE_URL="https://s.example.com"
//! export LISTEN="0.0.0.0:8080"
//! ```
//!
//! ## Optional Variables
//!
//! - `BASE_URL` - Prefix of generated short URLs (default: `http://localhost:8080`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TOP_DOMAINS_LIMIT` - Entries returned by `/metrics` (default: 3, max: 100)

use anyhow::Result;
use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TOP_DOMAINS_LIMIT: usize = 3;
const MAX_TOP_DOMAINS_LIMIT: usize = 100;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix of every generated short URL, e.g. `https://s.example.com`.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Number of domains reported by the metrics endpoint.
    pub top_domains_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            top_domains_limit: DEFAULT_TOP_DOMAINS_LIMIT,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `TOP_DOMAINS_LIMIT` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let top_domains_limit = match env::var("TOP_DOMAINS_LIMIT") {
            Ok(v) => v.parse().map_err(|_| {
                anyhow::anyhow!("TOP_DOMAINS_LIMIT must be a positive integer, got '{v}'")
            })?,
            Err(_) => DEFAULT_TOP_DOMAINS_LIMIT,
        };

        Ok(Self {
            base_url,
            listen_addr,
            log_level,
            log_format,
            top_domains_limit,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an `http://` or `https://` URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `top_domains_limit` is outside `1..=100`
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if url::Url::parse(&self.base_url).is_err() {
            anyhow::bail!("BASE_URL is not a valid URL: '{}'", self.base_url);
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.top_domains_limit == 0 || self.top_domains_limit > MAX_TOP_DOMAINS_LIMIT {
            anyhow::bail!(
                "TOP_DOMAINS_LIMIT must be between 1 and {}, got {}",
                MAX_TOP_DOMAINS_LIMIT,
                self.top_domains_limit
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Top domains limit: {}", self.top_domains_limit);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
