//! Shared utilities for regionfix crates.
//!
//! This crate provides the text normalization used by every other crate in
//! the workspace: Turkish-locale uppercasing for structural comparison, an
//! ASCII-folded key for diacritic-tolerant comparison, and country-name
//! detection.

pub mod country;
pub mod normalize;

// Re-export commonly used functions at crate root for convenience
pub use country::is_country_name;
pub use normalize::{char_len, normalize_for_match, normalize_fuzzy_key, turkish_uppercase};
