//! Province/district correction for address records.
//!
//! [`correct`] runs one record through the default [`ResolutionPipeline`]
//! against an explicit [`ReferenceIndex`](regionfix_reference::ReferenceIndex);
//! [`correct_address`] does the same against the process-wide cached index.

pub mod pipeline;
pub mod prenormalize;
pub mod resolver;
pub mod state;
pub mod summary;

pub use pipeline::{DecisionStep, ResolutionPipeline, build_default_pipeline, default_pipeline};
pub use prenormalize::NormalizationStep;
pub use regionfix_model::ResolverOptions;
pub use resolver::{
    correct, correct_address, correct_address_batch, correct_batch, correct_with_pipeline,
};
pub use state::{PipelineState, Resolution, ResolutionContext, WorkingRecord};
pub use summary::BatchSummary;
