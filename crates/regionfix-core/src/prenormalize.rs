//! Input repairs applied before the decision steps.
//!
//! Each step inspects the working record and may rewrite its province and
//! district. Steps run in order and independently of one another.
//!
//! 1. **LongTextStep** - pull `<district>/<province>` out of free text
//! 2. **CountryNameStep** - province field holds the country name
//! 3. **ProvinceIsDistrictStep** - province field holds a district name

use regionfix_common::{char_len, is_country_name};
use tracing::debug;

use crate::state::{ResolutionContext, WorkingRecord};

/// A single repair applied to the working record.
pub trait NormalizationStep: Send + Sync {
    /// Apply the repair. Returns true when the record was rewritten.
    fn apply(&self, record: &mut WorkingRecord, ctx: &ResolutionContext<'_>) -> bool;

    /// Human-readable name for this step (for logging/debugging).
    fn step_name(&self) -> &str;

    /// Whether this step should be skipped for the record.
    fn should_skip(&self, _record: &WorkingRecord, _ctx: &ResolutionContext<'_>) -> bool {
        false
    }
}

/// Extracts the pair from an over-long district field, or from the full
/// address when no district was given.
pub struct LongTextStep;

impl LongTextStep {
    fn source<'r>(record: &'r WorkingRecord) -> &'r str {
        if record.has_district() {
            &record.district
        } else {
            &record.full_address
        }
    }
}

impl NormalizationStep for LongTextStep {
    fn apply(&self, record: &mut WorkingRecord, ctx: &ResolutionContext<'_>) -> bool {
        let Some(found) = ctx
            .matcher
            .extract_province_district_from_long_text(Self::source(record))
        else {
            return false;
        };
        record.rewrite(found.province, found.district);
        true
    }

    fn step_name(&self) -> &str {
        "long_text"
    }

    fn should_skip(&self, record: &WorkingRecord, ctx: &ResolutionContext<'_>) -> bool {
        char_len(Self::source(record)) < ctx.options.long_text_threshold
    }
}

/// Handles records where the country sits in the province field and the
/// province was shifted into the district field.
pub struct CountryNameStep;

impl NormalizationStep for CountryNameStep {
    fn apply(&self, record: &mut WorkingRecord, ctx: &ResolutionContext<'_>) -> bool {
        let Some(province) = ctx.matcher.find_province_fuzzy(&record.district) else {
            record.province.clear();
            return false;
        };
        let district = ctx
            .matcher
            .resolve_district_from_free_address(&record.full_address, province)
            .unwrap_or_default();
        record.rewrite(province, district);
        true
    }

    fn step_name(&self) -> &str {
        "country_name"
    }

    fn should_skip(&self, record: &WorkingRecord, _ctx: &ResolutionContext<'_>) -> bool {
        !is_country_name(&record.province)
    }
}

/// Handles records whose province field holds a district name.
pub struct ProvinceIsDistrictStep;

impl NormalizationStep for ProvinceIsDistrictStep {
    fn apply(&self, record: &mut WorkingRecord, ctx: &ResolutionContext<'_>) -> bool {
        if ctx.matcher.find_province_fuzzy(&record.province).is_some() {
            return false;
        }
        let Some(found) = ctx
            .matcher
            .find_province_and_district_by_district_fuzzy(&record.province)
        else {
            return false;
        };
        record.rewrite(found.province, found.district);
        true
    }

    fn step_name(&self) -> &str {
        "province_is_district"
    }

    fn should_skip(&self, record: &WorkingRecord, _ctx: &ResolutionContext<'_>) -> bool {
        !record.has_province()
    }
}

/// Runs `steps` in order over the record. Returns the names of the steps
/// that rewrote it.
pub(crate) fn run_steps(
    steps: &[Box<dyn NormalizationStep>],
    record: &mut WorkingRecord,
    ctx: &ResolutionContext<'_>,
) -> Vec<String> {
    let mut applied = Vec::new();
    for step in steps {
        if step.should_skip(record, ctx) {
            continue;
        }
        if step.apply(record, ctx) {
            debug!(step = step.step_name(), "input rewritten before matching");
            applied.push(step.step_name().to_string());
        }
    }
    applied
}
