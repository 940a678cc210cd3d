use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span, trace, warn};

use regionfix_cli::logging::redact_value;
use regionfix_cli::records::{load_records, save_records};
use regionfix_cli::summary::{district_table, province_table, summary_table};
use regionfix_common::normalize_for_match;
use regionfix_core::{BatchSummary, ResolverOptions, correct_batch};
use regionfix_match::Matcher;
use regionfix_reference::{ReferenceIndex, default_data_dir, shared_index};

use crate::cli::{CorrectArgs, DistrictsArgs};

pub fn run_correct(args: &CorrectArgs, data_dir: Option<&Path>) -> Result<()> {
    let span = info_span!("correct");
    let _guard = span.enter();

    let records = load_records(args.input.as_deref())?;
    let index = load_index(data_dir)?;
    let options = resolver_options(args);

    let start = Instant::now();
    let results = correct_batch(&index, &records, &options);
    let summary = BatchSummary::from_results(&results);
    info!(
        records = summary.total,
        corrected = summary.corrected,
        unresolved = summary.unresolved(),
        elapsed_ms = start.elapsed().as_millis(),
        "batch corrected"
    );
    for (input, result) in records.iter().zip(&results) {
        if result.confidence.is_resolved() {
            trace!(
                province = redact_value(&input.province),
                district = redact_value(&input.district),
                corrected_province = redact_value(&result.province),
                corrected_district = redact_value(&result.district),
                confidence = %result.confidence,
                "record corrected"
            );
        } else {
            warn!(
                province = redact_value(&input.province),
                district = redact_value(&input.district),
                "record left unresolved"
            );
        }
    }

    save_records(args.output.as_deref(), &results)?;
    if !args.no_summary {
        eprintln!("{}", summary_table(&summary));
    }
    Ok(())
}

pub fn run_provinces(data_dir: Option<&Path>) -> Result<()> {
    let index = load_index(data_dir)?;
    println!("{}", province_table(&index));
    Ok(())
}

pub fn run_districts(args: &DistrictsArgs, data_dir: Option<&Path>) -> Result<()> {
    let index = load_index(data_dir)?;
    let matcher = Matcher::new(&index);
    let matched = matcher
        .match_province(&args.province)
        .ok_or_else(|| anyhow!("no province matches `{}`", args.province))?;
    if !matched.is_exact() {
        eprintln!("Using closest province: {}", matched.value);
    }
    let districts = index.districts_of(&normalize_for_match(matched.value));
    println!("{}", district_table(matched.value, districts));
    Ok(())
}

fn load_index(data_dir: Option<&Path>) -> Result<Arc<ReferenceIndex>> {
    let dir = data_dir.map_or_else(default_data_dir, Path::to_path_buf);
    shared_index(&dir).with_context(|| format!("load reference data from {}", dir.display()))
}

fn resolver_options(args: &CorrectArgs) -> ResolverOptions {
    let mut options = ResolverOptions::default();
    if let Some(threshold) = args.long_text_threshold {
        options = options.with_long_text_threshold(threshold);
    }
    if let Some(len) = args.min_district_len {
        options = options.with_min_address_district_len(len);
    }
    options
}
