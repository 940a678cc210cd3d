//! Single-record and batch correction entry points.

use std::path::Path;
use std::sync::Arc;

use regionfix_model::{AddressInput, CorrectedAddress, ResolverOptions};
use regionfix_reference::{ReferenceError, ReferenceIndex, shared_default_index, shared_index};
use tracing::debug;

use crate::pipeline::{ResolutionPipeline, default_pipeline};
use crate::state::{ResolutionContext, WorkingRecord};

/// Corrects one record with the default pipeline.
///
/// Full address and postal code are copied to the result unchanged.
pub fn correct(
    index: &ReferenceIndex,
    record: &AddressInput,
    options: &ResolverOptions,
) -> CorrectedAddress {
    correct_with_pipeline(default_pipeline(), index, record, options)
}

/// Corrects one record with a custom pipeline.
pub fn correct_with_pipeline(
    pipeline: &ResolutionPipeline,
    index: &ReferenceIndex,
    record: &AddressInput,
    options: &ResolverOptions,
) -> CorrectedAddress {
    let ctx = ResolutionContext::new(index, options);
    let mut working = WorkingRecord::from_input(record);
    let resolution = pipeline.execute(&mut working, &ctx);
    working.finish(resolution)
}

/// Corrects every record independently, preserving order.
pub fn correct_batch(
    index: &ReferenceIndex,
    records: &[AddressInput],
    options: &ResolverOptions,
) -> Vec<CorrectedAddress> {
    debug!(records = records.len(), "correcting batch");
    records
        .iter()
        .map(|record| correct(index, record, options))
        .collect()
}

/// [`correct`] against the cached index for `data_dir` (or the default data
/// directory), with default options.
pub fn correct_address(
    record: &AddressInput,
    data_dir: Option<&Path>,
) -> Result<CorrectedAddress, ReferenceError> {
    let index = cached_index(data_dir)?;
    Ok(correct(&index, record, &ResolverOptions::default()))
}

/// [`correct_batch`] against the cached index for `data_dir` (or the default
/// data directory), with default options.
pub fn correct_address_batch(
    records: &[AddressInput],
    data_dir: Option<&Path>,
) -> Result<Vec<CorrectedAddress>, ReferenceError> {
    let index = cached_index(data_dir)?;
    Ok(correct_batch(&index, records, &ResolverOptions::default()))
}

fn cached_index(data_dir: Option<&Path>) -> Result<Arc<ReferenceIndex>, ReferenceError> {
    match data_dir {
        Some(dir) => shared_index(dir),
        None => shared_default_index(),
    }
}
