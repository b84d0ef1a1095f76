//! The directory listing cache.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use quill_common::{combine_paths, is_within};
use quill_source::SourceStore;

/// Memoizes the immediate subdirectory names of each known directory.
///
/// A directory found to exist is listed right away, and listing a directory
/// checks every child for existence, so one successful [`exists`] call
/// populates the whole subtree below it. Later queries under that subtree
/// never touch the store until a directory change evicts the listings.
///
/// [`exists`]: DirectoryCache::exists
#[derive(Debug, Default)]
pub struct DirectoryCache {
    listings: BTreeMap<PathBuf, Vec<String>>,
}

impl DirectoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `path` is a directory.
    ///
    /// A cached listing answers immediately. Otherwise the store is asked
    /// once, and a directory that exists is listed and cached.
    pub fn exists(&mut self, store: &dyn SourceStore, path: &Path) -> bool {
        if self.listings.contains_key(path) {
            return true;
        }
        if !store.is_directory(path) {
            return false;
        }
        self.populate(store, path);
        true
    }

    /// Returns the sorted subdirectory names of `path`. Files are excluded.
    ///
    /// A path that is not a directory lists nothing and is not cached.
    pub fn list(&mut self, store: &dyn SourceStore, path: &Path) -> Vec<String> {
        if let Some(children) = self.listings.get(path) {
            return children.clone();
        }
        if !store.is_directory(path) {
            return Vec::new();
        }
        self.populate(store, path)
    }

    /// Lists a known directory and caches the result. Symlink cycles
    /// recurse until the store stops reporting the deeper path as a
    /// directory.
    fn populate(&mut self, store: &dyn SourceStore, path: &Path) -> Vec<String> {
        let mut children: Vec<String> = store
            .entry_names(path)
            .into_iter()
            .filter(|name| self.exists(store, &combine_paths(path, name)))
            .collect();
        children.sort();
        tracing::debug!(dir = %path.display(), subdirs = children.len(), "cached directory listing");
        self.listings.insert(path.to_path_buf(), children.clone());
        children
    }

    /// Drops every listing at or below `dir`. Returns how many were dropped.
    pub fn invalidate_under(&mut self, dir: &Path) -> usize {
        let before = self.listings.len();
        self.listings.retain(|p, _| !is_within(p, dir));
        before - self.listings.len()
    }

    /// Returns the cached listing without consulting the store.
    pub fn cached(&self, path: &Path) -> Option<&[String]> {
        self.listings.get(path).map(Vec::as_slice)
    }

    /// Number of cached listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_source::{FsStore, MemoryStore};

    fn project() -> MemoryStore {
        let store = MemoryStore::new();
        store.write_file("/proj/quill.toml", "");
        store.write_file("/proj/src/main.ts", "");
        store.write_file("/proj/src/util/strings.ts", "");
        store.write_file("/proj/types/index.d.ts", "");
        store
    }

    #[test]
    fn list_returns_only_subdirectories() {
        let store = project();
        let mut cache = DirectoryCache::new();
        assert_eq!(cache.list(&store, Path::new("/proj")), vec!["src", "types"]);
        assert_eq!(cache.list(&store, Path::new("/proj/src")), vec!["util"]);
    }

    #[test]
    fn exists_populates_subtree() {
        let store = project();
        let mut cache = DirectoryCache::new();
        assert!(cache.exists(&store, Path::new("/proj")));
        assert!(cache.cached(Path::new("/proj/src/util")).is_some());
        assert!(cache.cached(Path::new("/proj/types")).is_some());

        let listings = store.listing_count();
        assert!(cache.exists(&store, Path::new("/proj/src/util")));
        assert_eq!(cache.list(&store, Path::new("/proj/src")), vec!["util"]);
        assert_eq!(store.listing_count(), listings);
    }

    #[test]
    fn missing_directory_is_not_cached() {
        let store = project();
        let mut cache = DirectoryCache::new();
        assert!(!cache.exists(&store, Path::new("/nowhere")));
        assert!(!cache.exists(&store, Path::new("/proj/quill.toml")));
        assert!(cache.is_empty());
    }

    #[test]
    fn listing_a_missing_path_does_not_make_it_exist() {
        let store = project();
        let mut cache = DirectoryCache::new();
        let missing = Path::new("/proj/node_modules");
        assert!(!cache.exists(&store, missing));
        assert!(cache.list(&store, missing).is_empty());
        assert!(!cache.exists(&store, missing));
        assert!(cache.cached(missing).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn listing_a_file_does_not_make_it_a_directory() {
        let store = project();
        let mut cache = DirectoryCache::new();
        let file = Path::new("/proj/src/main.ts");
        assert!(cache.list(&store, file).is_empty());
        assert!(!cache.exists(&store, file));
        assert!(cache.cached(file).is_none());
        assert_eq!(store.listing_count(), 0);
    }

    #[test]
    fn directory_created_after_failed_listing_is_seen() {
        let store = project();
        let mut cache = DirectoryCache::new();
        assert!(cache.list(&store, Path::new("/proj/gen")).is_empty());
        store.create_dir("/proj/gen/out");
        assert_eq!(cache.list(&store, Path::new("/proj/gen")), vec!["out"]);
    }

    #[test]
    fn invalidate_is_component_scoped() {
        let store = project();
        store.create_dir("/proj/srcgen");
        let mut cache = DirectoryCache::new();
        cache.exists(&store, Path::new("/proj"));
        let dropped = cache.invalidate_under(Path::new("/proj/src"));
        assert_eq!(dropped, 2);
        assert!(cache.cached(Path::new("/proj/src")).is_none());
        assert!(cache.cached(Path::new("/proj/src/util")).is_none());
        assert!(cache.cached(Path::new("/proj/srcgen")).is_some());
        assert!(cache.cached(Path::new("/proj")).is_some());
    }

    #[test]
    fn relisting_after_invalidation_sees_new_directories() {
        let store = project();
        let mut cache = DirectoryCache::new();
        assert_eq!(cache.list(&store, Path::new("/proj/src")), vec!["util"]);
        store.create_dir("/proj/src/api");
        assert_eq!(cache.list(&store, Path::new("/proj/src")), vec!["util"]);
        cache.invalidate_under(Path::new("/proj/src"));
        assert_eq!(cache.list(&store, Path::new("/proj/src")), vec!["api", "util"]);
    }

    #[test]
    fn lists_real_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("b/inner")).unwrap();
        std::fs::create_dir(dir.path().join("a")).unwrap();
        std::fs::write(dir.path().join("file.ts"), "x").unwrap();

        let mut cache = DirectoryCache::new();
        assert_eq!(cache.list(&FsStore::new(), dir.path()), vec!["a", "b"]);
        assert_eq!(
            cache.cached(&dir.path().join("b")),
            Some(&["inner".to_string()][..])
        );
    }
}
