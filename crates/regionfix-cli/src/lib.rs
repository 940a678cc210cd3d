//! Library components for the `regionfix` command-line tool.

pub mod logging;
pub mod records;
pub mod summary;
