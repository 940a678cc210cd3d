//! Correction pipeline with ordered step execution.
//!
//! Pre-normalization steps repair the working record, then decision steps
//! run in order until one produces a [`Resolution`].
//!
//! # Standard Decision Order
//!
//! 1. **ExactPairStep** - input names an existing (province, district) pair
//! 2. **ResolveProvinceStep** - resolve the province exactly or fuzzily
//! 3. **OrphanedDistrictStep** - district belongs to another province
//! 4. **WithinProvinceStep** - fix the district inside the resolved province
//! 5. **DistrictOnlyStep** - no province, resolve from the district alone
//! 6. **FallbackStep** - return the input unchanged
//!
//! # Example
//!
//! ```ignore
//! use regionfix_core::pipeline::build_default_pipeline;
//!
//! let pipeline = build_default_pipeline();
//! let resolution = pipeline.execute(&mut record, &ctx);
//! ```

use std::sync::OnceLock;

use regionfix_match::MatchKind;
use regionfix_model::Confidence;
use tracing::debug;

use crate::prenormalize::{
    CountryNameStep, LongTextStep, NormalizationStep, ProvinceIsDistrictStep, run_steps,
};
use crate::state::{PipelineState, Resolution, ResolutionContext, WorkingRecord};

/// A single decision in the correction pipeline.
///
/// Returning `Some` ends the pipeline with that resolution; `None` hands
/// the record to the next step.
pub trait DecisionStep: Send + Sync {
    /// Try to resolve the record.
    ///
    /// # Arguments
    /// * `record` - Working record after pre-normalization
    /// * `ctx` - Matcher and options
    /// * `state` - Mutable pipeline state for cross-step data sharing
    fn decide<'a>(
        &self,
        record: &WorkingRecord,
        ctx: &ResolutionContext<'a>,
        state: &mut PipelineState<'a>,
    ) -> Option<Resolution>;

    /// Human-readable name for this step (for logging/debugging).
    fn step_name(&self) -> &str;

    /// Whether this step should be skipped for the record.
    ///
    /// Default implementation always runs the step.
    fn should_skip(&self, _record: &WorkingRecord, _state: &PipelineState<'_>) -> bool {
        false
    }
}

/// An ordered pipeline of normalization and decision steps.
pub struct ResolutionPipeline {
    normalizers: Vec<Box<dyn NormalizationStep>>,
    steps: Vec<Box<dyn DecisionStep>>,
}

impl Default for ResolutionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self {
            normalizers: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Add a pre-normalization step to the end of that phase.
    pub fn add_normalizer(mut self, step: Box<dyn NormalizationStep>) -> Self {
        self.normalizers.push(step);
        self
    }

    /// Add a decision step to the end of the pipeline.
    pub fn add_step(mut self, step: Box<dyn DecisionStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Insert a decision step at a specific position.
    pub fn insert_step(mut self, index: usize, step: Box<dyn DecisionStep>) -> Self {
        self.steps.insert(index, step);
        self
    }

    /// Remove a step of either phase by name.
    pub fn remove_step(mut self, step_name: &str) -> Self {
        self.normalizers.retain(|s| s.step_name() != step_name);
        self.steps.retain(|s| s.step_name() != step_name);
        self
    }

    /// Run the pipeline on a working record.
    pub fn execute(&self, record: &mut WorkingRecord, ctx: &ResolutionContext<'_>) -> Resolution {
        let mut state = PipelineState::new();
        self.execute_with_state(record, ctx, &mut state)
    }

    /// Run the pipeline with provided state.
    ///
    /// A pipeline whose steps all decline returns the input unchanged with
    /// `unknown` confidence.
    pub fn execute_with_state<'a>(
        &self,
        record: &mut WorkingRecord,
        ctx: &ResolutionContext<'a>,
        state: &mut PipelineState<'a>,
    ) -> Resolution {
        let rewritten = run_steps(&self.normalizers, record, ctx);
        state.executed_steps.extend(rewritten);

        for step in &self.steps {
            if step.should_skip(record, state) {
                continue;
            }
            state.executed_steps.push(step.step_name().to_string());
            if let Some(resolution) = step.decide(record, ctx, state) {
                debug!(
                    step = step.step_name(),
                    steps = ?state.executed_steps,
                    confidence = %resolution.confidence,
                    corrected = resolution.corrected,
                    "record resolved"
                );
                return resolution;
            }
        }
        Resolution::unresolved(record)
    }

    /// List pre-normalization step names in execution order.
    pub fn normalizer_names(&self) -> Vec<&str> {
        self.normalizers.iter().map(|s| s.step_name()).collect()
    }

    /// List decision step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.step_name()).collect()
    }
}

// ============================================================================
// Standard Decision Steps
// ============================================================================

/// Step 1: the normalized input is an existing pair.
pub struct ExactPairStep;

impl DecisionStep for ExactPairStep {
    fn decide<'a>(
        &self,
        record: &WorkingRecord,
        ctx: &ResolutionContext<'a>,
        _state: &mut PipelineState<'a>,
    ) -> Option<Resolution> {
        let province = ctx
            .matcher
            .find_province_by_district_pair(&record.province, &record.district)?;
        let district = ctx
            .matcher
            .find_district_exact_in_province(province, &record.district)?;
        Some(Resolution {
            province: province.to_string(),
            district: district.to_string(),
            corrected: record.pre_corrected
                || record.province != province
                || record.district != district,
            confidence: Confidence::Exact,
        })
    }

    fn step_name(&self) -> &str {
        "exact_pair"
    }

    fn should_skip(&self, record: &WorkingRecord, _state: &PipelineState<'_>) -> bool {
        !record.has_province() || !record.has_district()
    }
}

/// Step 2: resolve the province for the following steps. Never decides.
pub struct ResolveProvinceStep;

impl DecisionStep for ResolveProvinceStep {
    fn decide<'a>(
        &self,
        record: &WorkingRecord,
        ctx: &ResolutionContext<'a>,
        state: &mut PipelineState<'a>,
    ) -> Option<Resolution> {
        state.province = ctx.matcher.match_province(&record.province);
        None
    }

    fn step_name(&self) -> &str {
        "resolve_province"
    }

    fn should_skip(&self, record: &WorkingRecord, _state: &PipelineState<'_>) -> bool {
        !record.has_province()
    }
}

/// Step 3: the district is unknown in the resolved province (or there is
/// no province) but can be placed globally.
pub struct OrphanedDistrictStep;

impl DecisionStep for OrphanedDistrictStep {
    fn decide<'a>(
        &self,
        record: &WorkingRecord,
        ctx: &ResolutionContext<'a>,
        state: &mut PipelineState<'a>,
    ) -> Option<Resolution> {
        if let Some(province) = state.province
            && ctx
                .matcher
                .find_district_fuzzy_in_province(province.value, &record.district)
                .is_some()
        {
            return None;
        }
        let found = ctx
            .matcher
            .find_province_and_district_by_district_fuzzy(&record.district)?;
        Some(Resolution {
            province: found.province.to_string(),
            district: found.district.to_string(),
            corrected: true,
            confidence: if record.has_province() {
                Confidence::Fuzzy
            } else {
                Confidence::Resolved
            },
        })
    }

    fn step_name(&self) -> &str {
        "orphaned_district"
    }

    fn should_skip(&self, record: &WorkingRecord, _state: &PipelineState<'_>) -> bool {
        !record.has_district()
    }
}

/// Step 4: settle the district inside the resolved province, falling back
/// to the full address, or return the province alone.
pub struct WithinProvinceStep;

impl DecisionStep for WithinProvinceStep {
    fn decide<'a>(
        &self,
        record: &WorkingRecord,
        ctx: &ResolutionContext<'a>,
        state: &mut PipelineState<'a>,
    ) -> Option<Resolution> {
        let province = state.province?;
        let province_fuzzy = province.kind == MatchKind::Fuzzy;

        let (district, confidence) = if record.has_district() {
            match ctx
                .matcher
                .match_district_in_province(province.value, &record.district)
            {
                Some(found) if found.is_exact() && !province_fuzzy => {
                    (Some(found.value), Confidence::Exact)
                }
                Some(found) => (Some(found.value), Confidence::Fuzzy),
                None => (None, Confidence::Fuzzy),
            }
        } else if !record.full_address.trim().is_empty()
            && let Some(found) = ctx
                .matcher
                .resolve_district_from_free_address(&record.full_address, province.value)
        {
            (Some(found), Confidence::Resolved)
        } else if province_fuzzy {
            (None, Confidence::Fuzzy)
        } else {
            (None, Confidence::Exact)
        };

        let resolution = match district {
            Some(district) => Resolution {
                province: province.value.to_string(),
                district: district.to_string(),
                corrected: record.pre_corrected
                    || confidence == Confidence::Resolved
                    || record.province != province.value
                    || record.district != district,
                confidence,
            },
            None => Resolution {
                province: province.value.to_string(),
                district: record.district.clone(),
                corrected: record.pre_corrected || record.input_province != province.value,
                confidence,
            },
        };
        Some(resolution)
    }

    fn step_name(&self) -> &str {
        "within_province"
    }

    fn should_skip(&self, _record: &WorkingRecord, state: &PipelineState<'_>) -> bool {
        state.province.is_none()
    }
}

/// Step 5: only a district is known.
pub struct DistrictOnlyStep;

impl DecisionStep for DistrictOnlyStep {
    fn decide<'a>(
        &self,
        record: &WorkingRecord,
        ctx: &ResolutionContext<'a>,
        _state: &mut PipelineState<'a>,
    ) -> Option<Resolution> {
        let found = ctx
            .matcher
            .find_province_and_district_by_district_fuzzy(&record.district)?;
        Some(Resolution {
            province: found.province.to_string(),
            district: found.district.to_string(),
            corrected: true,
            confidence: Confidence::Resolved,
        })
    }

    fn step_name(&self) -> &str {
        "district_only"
    }

    fn should_skip(&self, record: &WorkingRecord, _state: &PipelineState<'_>) -> bool {
        record.has_province() || !record.has_district()
    }
}

/// Step 6: nothing matched.
pub struct FallbackStep;

impl DecisionStep for FallbackStep {
    fn decide<'a>(
        &self,
        record: &WorkingRecord,
        _ctx: &ResolutionContext<'a>,
        _state: &mut PipelineState<'a>,
    ) -> Option<Resolution> {
        Some(Resolution::unresolved(record))
    }

    fn step_name(&self) -> &str {
        "fallback"
    }
}

/// Build the default correction pipeline.
///
/// Pre-normalization: long text, country name, province-is-district.
/// Decisions: exact pair, resolve province, orphaned district, within
/// province, district only, fallback.
pub fn build_default_pipeline() -> ResolutionPipeline {
    ResolutionPipeline::new()
        .add_normalizer(Box::new(LongTextStep))
        .add_normalizer(Box::new(CountryNameStep))
        .add_normalizer(Box::new(ProvinceIsDistrictStep))
        .add_step(Box::new(ExactPairStep))
        .add_step(Box::new(ResolveProvinceStep))
        .add_step(Box::new(OrphanedDistrictStep))
        .add_step(Box::new(WithinProvinceStep))
        .add_step(Box::new(DistrictOnlyStep))
        .add_step(Box::new(FallbackStep))
}

static DEFAULT_PIPELINE: OnceLock<ResolutionPipeline> = OnceLock::new();

/// Returns the default pipeline, built on first access.
pub fn default_pipeline() -> &'static ResolutionPipeline {
    DEFAULT_PIPELINE.get_or_init(build_default_pipeline)
}
