//! Configuration options for address correction.

use serde::{Deserialize, Serialize};

/// Default character count at which a field is treated as free text.
pub const DEFAULT_LONG_TEXT_THRESHOLD: usize = 40;

/// Default minimum length of a district name searched for inside a full
/// address.
pub const DEFAULT_MIN_ADDRESS_DISTRICT_LEN: usize = 3;

/// Options for the correction pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// District (or full address) length, in characters, from which the
    /// `<district>/<province>` extraction is attempted.
    pub long_text_threshold: usize,

    /// District names shorter than this are never matched as substrings of
    /// a full address.
    pub min_address_district_len: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            long_text_threshold: DEFAULT_LONG_TEXT_THRESHOLD,
            min_address_district_len: DEFAULT_MIN_ADDRESS_DISTRICT_LEN,
        }
    }
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_long_text_threshold(mut self, threshold: usize) -> Self {
        self.long_text_threshold = threshold;
        self
    }

    pub fn with_min_address_district_len(mut self, len: usize) -> Self {
        self.min_address_district_len = len;
        self
    }
}
