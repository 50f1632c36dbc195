//! Per-run cache of manifest-location results.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::filesystem::FileSystem;

use super::locate::locate_manifest;

/// Caches [`locate_manifest`] results by starting directory.
///
/// Negative results are cached too, so a directory with no manifest is
/// only walked once per run. The cache must be scoped to a single
/// analysis run; manifest edits are not observed through it.
///
/// Safe to share across threads. The lock is not held during the walk,
/// so two threads may race to populate the same entry; both compute the
/// same value and the second insert overwrites the first.
#[derive(Default)]
pub struct ManifestCache {
    entries: Mutex<HashMap<PathBuf, Option<PathBuf>>>,
}

impl ManifestCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locates the manifest for `start_dir`, consulting the cache first.
    #[must_use]
    pub fn locate(&self, fs: &dyn FileSystem, start_dir: &Path) -> Option<PathBuf> {
        if let Some(cached) = self.entries.lock().expect("cache lock poisoned").get(start_dir) {
            return cached.clone();
        }

        let located = locate_manifest(fs, start_dir);
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .insert(start_dir.to_path_buf(), located.clone());
        located
    }
}
