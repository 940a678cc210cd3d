#![deny(unsafe_code)]

//! Lookup primitives over a [`ReferenceIndex`](regionfix_reference::ReferenceIndex).
//!
//! Every primitive is total: a name that cannot be matched yields `None`.
//! Results always borrow the reference spelling from the index.

pub mod distance;
pub mod matcher;
mod text;

pub use distance::{best_fuzzy, edit_distance, max_distance};
pub use matcher::{MatchKind, Matched, Matcher, RegionMatch};
