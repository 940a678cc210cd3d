//! Per-record state threaded through the correction pipeline.

use regionfix_match::{Matched, Matcher};
use regionfix_model::{AddressInput, Confidence, CorrectedAddress, ResolverOptions};
use regionfix_reference::ReferenceIndex;

/// Read-only inputs shared by every step.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    pub matcher: Matcher<'a>,
    pub options: ResolverOptions,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(index: &'a ReferenceIndex, options: &ResolverOptions) -> Self {
        Self {
            matcher: Matcher::new(index)
                .with_min_address_district_len(options.min_address_district_len),
            options: *options,
        }
    }
}

/// Working copy of an input record.
///
/// `province` and `district` start as the trimmed input and may be rewritten
/// by pre-normalization; `input_province` and `input_district` never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingRecord {
    pub full_address: String,
    pub postal_code: String,
    pub province: String,
    pub district: String,
    pub input_province: String,
    pub input_district: String,
    pub pre_corrected: bool,
}

impl WorkingRecord {
    pub fn from_input(input: &AddressInput) -> Self {
        let province = input.province.trim().to_string();
        let district = input.district.trim().to_string();
        Self {
            full_address: input.full_address.clone(),
            postal_code: input.postal_code.clone(),
            input_province: province.clone(),
            input_district: district.clone(),
            province,
            district,
            pre_corrected: false,
        }
    }

    pub fn has_province(&self) -> bool {
        !self.province.is_empty()
    }

    pub fn has_district(&self) -> bool {
        !self.district.is_empty()
    }

    /// Replaces the working pair and marks the record as changed.
    pub fn rewrite(&mut self, province: &str, district: &str) {
        self.province = province.to_string();
        self.district = district.to_string();
        self.pre_corrected = true;
    }

    pub(crate) fn finish(&self, resolution: Resolution) -> CorrectedAddress {
        CorrectedAddress {
            full_address: self.full_address.clone(),
            province: resolution.province,
            district: resolution.district,
            postal_code: self.postal_code.clone(),
            corrected: resolution.corrected,
            confidence: resolution.confidence,
        }
    }
}

/// Outcome of the first decision step that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub province: String,
    pub district: String,
    pub corrected: bool,
    pub confidence: Confidence,
}

impl Resolution {
    /// The trimmed input returned as-is.
    pub fn unresolved(record: &WorkingRecord) -> Self {
        Self {
            province: record.input_province.clone(),
            district: record.input_district.clone(),
            corrected: false,
            confidence: Confidence::Unknown,
        }
    }
}

/// Mutable state shared across decision steps.
#[derive(Debug, Default)]
pub struct PipelineState<'a> {
    /// Province resolved from the working record, with match kind.
    pub province: Option<Matched<'a>>,
    /// Step execution log for debugging.
    pub executed_steps: Vec<String>,
}

impl PipelineState<'_> {
    pub fn new() -> Self {
        Self::default()
    }
}
