//! The invalidation controller tying snapshots and listings to one store.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quill_common::ContentHash;
use quill_source::{ScriptSnapshot, SourceStore};

use crate::directory::DirectoryCache;
use crate::snapshot::SnapshotCache;

/// The cached view of one project's files and directories.
///
/// Owns the [`SnapshotCache`], the [`DirectoryCache`] and the store both read
/// from. Every mutation goes through `&mut self`; there is no internal
/// locking, so the owner decides how requests are serialized.
pub struct SourceCache {
    store: Arc<dyn SourceStore>,
    snapshots: SnapshotCache,
    directories: DirectoryCache,
}

impl SourceCache {
    /// Creates an empty cache reading from `store`.
    pub fn new(store: Arc<dyn SourceStore>) -> Self {
        Self {
            store,
            snapshots: SnapshotCache::new(),
            directories: DirectoryCache::new(),
        }
    }

    /// The store this cache reads through.
    pub fn store(&self) -> &Arc<dyn SourceStore> {
        &self.store
    }

    /// Pushes caller-supplied content for `path`.
    ///
    /// See [`SnapshotCache::set_content`].
    pub fn set_content(&mut self, path: &Path, text: &str) -> Option<Arc<ScriptSnapshot>> {
        self.snapshots.set_content(self.store.as_ref(), path, text)
    }

    /// Re-reads `path` from the store, evicting it if absent or empty.
    pub fn refresh_from_source(&mut self, path: &Path) -> Option<Arc<ScriptSnapshot>> {
        self.snapshots.refresh_from_source(self.store.as_ref(), path)
    }

    /// Removes the snapshot for `path`.
    pub fn evict(&mut self, path: &Path) -> bool {
        self.snapshots.evict(path)
    }

    /// Applies a file change. Returns whether the file was tracked.
    pub fn on_file_changed(&mut self, path: &Path) -> bool {
        let tracked = self.snapshots.on_file_changed(self.store.as_ref(), path);
        tracing::debug!(path = %path.display(), tracked, "file changed");
        tracked
    }

    /// Applies a directory change to the whole subtree below `dir`.
    ///
    /// Every tracked file under `dir` is refreshed and every cached listing
    /// under it is dropped. Returns whether anything cached was affected.
    pub fn on_directory_changed(&mut self, dir: &Path) -> bool {
        let files = self.snapshots.refresh_under(self.store.as_ref(), dir);
        let listings = self.directories.invalidate_under(dir);
        tracing::debug!(dir = %dir.display(), files, listings, "directory changed");
        files > 0 || listings > 0
    }

    /// Returns the snapshot of `path`, reading it on a miss.
    pub fn snapshot(&mut self, path: &Path) -> Option<Arc<ScriptSnapshot>> {
        self.snapshots.snapshot(self.store.as_ref(), path)
    }

    /// Returns the version of `path`, reading it on a miss.
    pub fn version(&mut self, path: &Path) -> Option<ContentHash> {
        self.snapshots.version(self.store.as_ref(), path)
    }

    /// Returns `true` if `path` is a directory, populating listings.
    pub fn directory_exists(&mut self, path: &Path) -> bool {
        self.directories.exists(self.store.as_ref(), path)
    }

    /// Returns the sorted subdirectory names of `path`.
    pub fn directories(&mut self, path: &Path) -> Vec<String> {
        self.directories.list(self.store.as_ref(), path)
    }

    /// Returns the tracked file paths in sorted order.
    pub fn tracked_files(&self) -> Vec<PathBuf> {
        self.snapshots.tracked_paths().map(Path::to_path_buf).collect()
    }

    /// Returns `true` if `path` currently has a snapshot.
    pub fn is_tracked(&self, path: &Path) -> bool {
        self.snapshots.contains(path)
    }

    /// Read-only access to the snapshot cache.
    pub fn snapshots(&self) -> &SnapshotCache {
        &self.snapshots
    }

    /// Read-only access to the directory cache.
    pub fn listings(&self) -> &DirectoryCache {
        &self.directories
    }
}

impl fmt::Debug for SourceCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceCache")
            .field("snapshots", &self.snapshots)
            .field("directories", &self.directories)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_source::MemoryStore;

    fn cache_over(store: &Arc<MemoryStore>) -> SourceCache {
        SourceCache::new(Arc::clone(store) as Arc<dyn SourceStore>)
    }

    #[test]
    fn version_is_deterministic_across_caches() {
        let store = Arc::new(MemoryStore::new());
        store.write_file("/p/a.ts", "const a = 1;");
        let mut first = cache_over(&store);
        let mut second = cache_over(&store);
        assert_eq!(
            first.version(Path::new("/p/a.ts")),
            second.version(Path::new("/p/a.ts"))
        );
    }

    #[test]
    fn directory_change_refreshes_only_subtree() {
        let store = Arc::new(MemoryStore::new());
        store.write_file("/a/b.ts", "b");
        store.write_file("/a/c/d.ts", "d");
        let mut cache = cache_over(&store);
        let b = cache.version(Path::new("/a/b.ts")).unwrap();
        cache.version(Path::new("/a/c/d.ts"));

        store.write_file("/a/c/d.ts", "d changed");
        assert!(cache.on_directory_changed(Path::new("/a/c")));

        assert_eq!(
            cache.version(Path::new("/a/c/d.ts")),
            Some(ContentHash::of_text("d changed"))
        );
        assert_eq!(cache.version(Path::new("/a/b.ts")), Some(b));
    }

    #[test]
    fn directory_change_drops_listings() {
        let store = Arc::new(MemoryStore::new());
        store.write_file("/a/c/d.ts", "d");
        let mut cache = cache_over(&store);
        assert!(cache.directory_exists(Path::new("/a")));
        assert_eq!(cache.directories(Path::new("/a")), vec!["c"]);

        store.create_dir("/a/c/e");
        assert!(cache.on_directory_changed(Path::new("/a/c")));
        assert!(cache.listings().cached(Path::new("/a/c")).is_none());
        assert!(cache.listings().cached(Path::new("/a")).is_some());
        assert_eq!(cache.directories(Path::new("/a/c")), vec!["e"]);
    }

    #[test]
    fn untouched_directory_change_reports_nothing() {
        let store = Arc::new(MemoryStore::new());
        let mut cache = cache_over(&store);
        assert!(!cache.on_directory_changed(Path::new("/elsewhere")));
    }

    #[test]
    fn untracked_file_change_adds_nothing() {
        let store = Arc::new(MemoryStore::new());
        store.write_file("/p/new.ts", "x");
        let mut cache = cache_over(&store);
        assert!(!cache.on_file_changed(Path::new("/p/new.ts")));
        assert!(cache.tracked_files().is_empty());
        assert!(!cache.is_tracked(Path::new("/p/new.ts")));
    }

    #[test]
    fn pushed_content_overrides_store() {
        let store = Arc::new(MemoryStore::new());
        store.write_file("/p/a.ts", "disk");
        let mut cache = cache_over(&store);
        cache.set_content(Path::new("/p/a.ts"), "editor buffer");
        assert_eq!(cache.snapshot(Path::new("/p/a.ts")).unwrap().text(), "editor buffer");
        assert_eq!(store.read_count(), 0);

        assert!(cache.on_file_changed(Path::new("/p/a.ts")));
        assert_eq!(cache.snapshot(Path::new("/p/a.ts")).unwrap().text(), "disk");
    }
}
