//! Process-wide cache of built reference indices, one per dataset path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::debug;

use crate::error::ReferenceError;
use crate::index::ReferenceIndex;
use crate::loader::DatasetLayout;
use crate::paths::{dataset_path, default_data_dir};

type IndexCache = Mutex<HashMap<PathBuf, Arc<ReferenceIndex>>>;

static INDEX_CACHE: OnceLock<IndexCache> = OnceLock::new();

fn cache() -> &'static IndexCache {
    INDEX_CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Returns the index for the dataset in `data_dir`, building it on first use.
///
/// The build runs under the cache lock, so concurrent first callers wait for
/// a single construction. A failed build is not cached; the next call tries
/// again.
pub fn shared_index(data_dir: &Path) -> Result<Arc<ReferenceIndex>, ReferenceError> {
    let path = dataset_path(data_dir);
    let mut guard = cache().lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(index) = guard.get(&path) {
        return Ok(Arc::clone(index));
    }
    debug!(path = %path.display(), "building reference index");
    let index = Arc::new(ReferenceIndex::load(&path, &DatasetLayout::default())?);
    guard.insert(path, Arc::clone(&index));
    Ok(index)
}

/// [`shared_index`] for [`default_data_dir`].
pub fn shared_default_index() -> Result<Arc<ReferenceIndex>, ReferenceError> {
    shared_index(&default_data_dir())
}
