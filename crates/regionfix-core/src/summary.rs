//! Aggregate counts over a batch of corrections.

use std::collections::BTreeMap;

use regionfix_model::{Confidence, CorrectedAddress};

/// Counts per confidence level plus how many records were changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub corrected: usize,
    counts: BTreeMap<&'static str, usize>,
}

impl BatchSummary {
    pub fn from_results(results: &[CorrectedAddress]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.record(result);
        }
        summary
    }

    pub fn record(&mut self, result: &CorrectedAddress) {
        self.total += 1;
        if result.corrected {
            self.corrected += 1;
        }
        *self.counts.entry(result.confidence.as_str()).or_default() += 1;
    }

    pub fn count(&self, confidence: Confidence) -> usize {
        self.counts.get(confidence.as_str()).copied().unwrap_or(0)
    }

    /// Every level with its count, strongest first, zero counts included.
    pub fn by_confidence(&self) -> Vec<(Confidence, usize)> {
        Confidence::ALL
            .into_iter()
            .map(|level| (level, self.count(level)))
            .collect()
    }

    pub fn unresolved(&self) -> usize {
        self.count(Confidence::Unknown)
    }
}
