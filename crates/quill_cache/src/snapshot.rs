//! The per-file snapshot cache.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quill_common::{is_within, ContentHash};
use quill_source::{ScriptSnapshot, SourceStore};

/// Maps tracked file paths to their current immutable snapshot.
///
/// Entries are replaced wholesale and never mutated in place, so a snapshot
/// handed out earlier stays valid (and consistent with its version) even
/// after the cache moves on. Empty content is never cached: pushing or
/// reading an empty file evicts the entry instead.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    entries: BTreeMap<PathBuf, Arc<ScriptSnapshot>>,
}

impl SnapshotCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` as the current content of `path`.
    ///
    /// Non-empty text replaces the cached snapshot. If the cached snapshot
    /// already has the same version it is kept as is. Empty text falls back
    /// to [`refresh_from_source`](Self::refresh_from_source).
    pub fn set_content(
        &mut self,
        store: &dyn SourceStore,
        path: &Path,
        text: &str,
    ) -> Option<Arc<ScriptSnapshot>> {
        if text.is_empty() {
            return self.refresh_from_source(store, path);
        }
        Some(self.insert(path, text))
    }

    /// Re-reads `path` from the store.
    ///
    /// Found, non-empty content replaces the snapshot; an absent, unreadable
    /// or empty file evicts it. Neither case is an error.
    pub fn refresh_from_source(
        &mut self,
        store: &dyn SourceStore,
        path: &Path,
    ) -> Option<Arc<ScriptSnapshot>> {
        match store.read_text(path).into_non_empty() {
            Some(text) => Some(self.insert(path, &text)),
            None => {
                if self.evict(path) {
                    tracing::debug!(path = %path.display(), "evicted snapshot of missing or empty file");
                }
                None
            }
        }
    }

    /// Removes the snapshot for `path`. Returns `true` if one was cached.
    pub fn evict(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    /// Applies a file change notification.
    ///
    /// A tracked path is refreshed from the store. An untracked path is left
    /// alone, so nothing gets cached for files no analysis ever asked for.
    /// Returns whether the path was tracked.
    pub fn on_file_changed(&mut self, store: &dyn SourceStore, path: &Path) -> bool {
        if !self.entries.contains_key(path) {
            return false;
        }
        self.refresh_from_source(store, path);
        true
    }

    /// Refreshes every tracked file at or below `dir` and returns how many
    /// were tracked.
    pub fn refresh_under(&mut self, store: &dyn SourceStore, dir: &Path) -> usize {
        let affected: Vec<PathBuf> = self
            .entries
            .keys()
            .filter(|p| is_within(p, dir))
            .cloned()
            .collect();
        for path in &affected {
            self.refresh_from_source(store, path);
        }
        affected.len()
    }

    /// Returns the snapshot for `path`, reading it from the store on a miss.
    pub fn snapshot(&mut self, store: &dyn SourceStore, path: &Path) -> Option<Arc<ScriptSnapshot>> {
        match self.entries.get(path) {
            Some(snapshot) => Some(Arc::clone(snapshot)),
            None => self.refresh_from_source(store, path),
        }
    }

    /// Returns the version of `path`, reading it from the store on a miss.
    pub fn version(&mut self, store: &dyn SourceStore, path: &Path) -> Option<ContentHash> {
        self.snapshot(store, path).map(|s| s.version())
    }

    /// Returns the cached snapshot without consulting the store.
    pub fn cached(&self, path: &Path) -> Option<&Arc<ScriptSnapshot>> {
        self.entries.get(path)
    }

    /// Returns `true` if `path` currently has a snapshot.
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterates over tracked paths in sorted order.
    pub fn tracked_paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }

    /// Number of tracked files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no file is tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, path: &Path, text: &str) -> Arc<ScriptSnapshot> {
        let version = ContentHash::of_text(text);
        if let Some(existing) = self.entries.get(path) {
            if existing.version() == version {
                return Arc::clone(existing);
            }
        }
        let snapshot = Arc::new(ScriptSnapshot::new(path, text));
        self.entries.insert(path.to_path_buf(), Arc::clone(&snapshot));
        snapshot
    }
}
