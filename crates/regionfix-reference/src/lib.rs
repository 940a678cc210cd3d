#![deny(unsafe_code)]

//! Reference dataset of valid province/district pairs.
//!
//! The dataset is read once per path into an immutable [`ReferenceIndex`]
//! and shared process-wide through [`shared_index`].

pub mod cache;
pub mod error;
pub mod index;
pub mod loader;
pub mod paths;

pub use crate::cache::{shared_default_index, shared_index};
pub use crate::error::ReferenceError;
pub use crate::index::{ReferenceIndex, ReferenceIndexBuilder, pair_key};
pub use crate::loader::{DatasetLayout, read_region_pairs, visit_region_pairs};
pub use crate::paths::{DATA_DIR_ENV_VAR, DATASET_FILE_NAME, dataset_path, default_data_dir};
