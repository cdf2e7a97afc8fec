//! Utility functions for URL processing and code generation.
//!
//! - [`url_normalizer`] - URL validation, normalization and domain extraction
//! - [`code_generator`] - Deterministic short code derivation

pub mod code_generator;
pub mod url_normalizer;
