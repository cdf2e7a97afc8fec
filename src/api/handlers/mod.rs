//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod metrics;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use redirect::{missing_code_handler, redirect_handler, unknown_path_handler};
pub use shorten::shorten_handler;
