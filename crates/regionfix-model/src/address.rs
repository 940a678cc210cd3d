//! Address records as supplied by callers and as returned after correction.

use serde::{Deserialize, Serialize};

use crate::enums::Confidence;

/// A raw address record. Absent fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressInput {
    pub full_address: String,
    pub province: String,
    pub district: String,
    pub postal_code: String,
}

impl AddressInput {
    pub fn new(province: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            province: province.into(),
            district: district.into(),
            ..Self::default()
        }
    }

    pub fn with_full_address(mut self, full_address: impl Into<String>) -> Self {
        self.full_address = full_address.into();
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }
}

/// Result of correcting one [`AddressInput`].
///
/// `full_address` and `postal_code` are copied from the input unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectedAddress {
    #[serde(default)]
    pub full_address: String,
    pub province: String,
    pub district: String,
    #[serde(default)]
    pub postal_code: String,
    pub corrected: bool,
    pub confidence: Confidence,
}

impl CorrectedAddress {
    /// Feeds this result back in as an input record.
    pub fn to_input(&self) -> AddressInput {
        AddressInput {
            full_address: self.full_address.clone(),
            province: self.province.clone(),
            district: self.district.clone(),
            postal_code: self.postal_code.clone(),
        }
    }
}

/// A (province, district) pair in reference spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionPair {
    pub province: String,
    pub district: String,
}

impl RegionPair {
    pub fn new(province: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            province: province.into(),
            district: district.into(),
        }
    }
}
