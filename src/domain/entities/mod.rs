//! Core domain entities.
//!
//! - [`ShortLink`] - A short code mapped to a normalized URL
//! - [`DomainCount`] - How many URLs were shortened for a domain

pub mod domain_count;
pub mod short_link;

pub use domain_count::DomainCount;
pub use short_link::ShortLink;
