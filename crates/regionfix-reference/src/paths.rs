//! Reference data directory path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "REGIONFIX_DATA_DIR";

/// File name of the postal-code table inside the data directory.
pub const DATASET_FILE_NAME: &str = "tr_postal_codes.csv";

/// Get the data directory.
///
/// Resolution order:
/// 1. `REGIONFIX_DATA_DIR` environment variable
/// 2. `data/` directory relative to workspace root
pub fn default_data_dir() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// Path of the reference dataset inside `data_dir`.
pub fn dataset_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DATASET_FILE_NAME)
}
