//! Compute-once access to the loaded dataset.
//!
//! The first [`DatasetLoader::load`] reads and enriches the source; later
//! calls hand out the same [`Arc<Table>`] until the source file changes on
//! disk or [`DatasetLoader::invalidate`] is called. The slot is guarded by a
//! mutex so a loader can be shared across threads.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use smdash_core::Table;

use crate::error::DataLoadError;
use crate::loader::{load_dataset, CsvOptions};

/// What the cache considers "the same source": canonical path, byte length
/// and modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceKey {
    path: PathBuf,
    len: u64,
    modified: Option<SystemTime>,
}

impl SourceKey {
    fn probe(path: &Path) -> Result<Self, DataLoadError> {
        let meta = fs::metadata(path).map_err(|source| DataLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            path: fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

#[derive(Debug)]
struct CachedTable {
    key: SourceKey,
    table: Arc<Table>,
}

#[derive(Debug)]
pub struct DatasetLoader {
    path: PathBuf,
    options: CsvOptions,
    slot: Mutex<Option<CachedTable>>,
}

impl DatasetLoader {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, options: CsvOptions) -> Self {
        Self {
            path: path.into(),
            options,
            slot: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the enriched table, reading the source only when nothing is
    /// cached or the source identity changed.
    ///
    /// If the source disappears after a successful load, the cached table
    /// keeps being served for the rest of the session.
    ///
    /// # Errors
    ///
    /// Returns [`DataLoadError`] when a (re)load is needed and fails. A failed
    /// reload leaves any previously cached table in place.
    pub fn load(&self) -> Result<Arc<Table>, DataLoadError> {
        let mut slot = self.lock();

        let key = match SourceKey::probe(&self.path) {
            Ok(key) => key,
            Err(err) => {
                if let Some(cached) = slot.as_ref() {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %err,
                        "dataset source unavailable; serving cached table"
                    );
                    return Ok(Arc::clone(&cached.table));
                }
                return Err(err);
            }
        };

        if let Some(cached) = slot.as_ref() {
            if cached.key == key {
                tracing::debug!(path = %self.path.display(), "dataset cache hit");
                return Ok(Arc::clone(&cached.table));
            }
            tracing::info!(path = %self.path.display(), "dataset source changed; reloading");
        } else {
            tracing::debug!(path = %self.path.display(), "dataset cache miss");
        }

        let table = Arc::new(load_dataset(&self.path, &self.options)?);
        *slot = Some(CachedTable {
            key,
            table: Arc::clone(&table),
        });
        Ok(table)
    }

    /// Drop the cached table so the next [`load`](Self::load) re-reads the source.
    pub fn invalidate(&self) {
        if self.lock().take().is_some() {
            tracing::debug!(path = %self.path.display(), "dataset cache invalidated");
        }
    }

    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<CachedTable>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
