//! Backing stores the caches read files and directories from.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

/// Result of reading a file's text from a [`SourceStore`].
///
/// A missing or unreadable file is an ordinary outcome, not an error: the
/// caller treats it as "no content" and drops whatever it had cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The file exists and was read as text.
    Found(String),
    /// The file does not exist or could not be read.
    Absent,
}

impl ReadOutcome {
    /// Returns the text when found and non-empty.
    ///
    /// Empty files count as absent for analysis purposes.
    pub fn into_non_empty(self) -> Option<String> {
        match self {
            ReadOutcome::Found(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Synchronous read access to the files and directories of a project.
///
/// Implementations must never panic on missing paths; they report absence
/// through [`ReadOutcome::Absent`], `false`, or an empty listing.
pub trait SourceStore: Send + Sync {
    /// Reads the whole file at `path` as UTF-8 text.
    fn read_text(&self, path: &Path) -> ReadOutcome;

    /// Returns `true` if `path` exists and is a directory.
    fn is_directory(&self, path: &Path) -> bool;

    /// Returns the names (not full paths) of every immediate entry of the
    /// directory at `path`, files and subdirectories alike, sorted.
    fn entry_names(&self, path: &Path) -> Vec<String>;
}

/// A [`SourceStore`] backed by the real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsStore;

impl FsStore {
    /// Creates a filesystem store.
    pub fn new() -> Self {
        Self
    }
}

impl SourceStore for FsStore {
    fn read_text(&self, path: &Path) -> ReadOutcome {
        match std::fs::read_to_string(path) {
            Ok(text) => ReadOutcome::Found(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => ReadOutcome::Absent,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "treating unreadable file as absent");
                ReadOutcome::Absent
            }
        }
    }

    fn is_directory(&self, path: &Path) -> bool {
        std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }

    fn entry_names(&self, path: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(path) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }
}

/// An in-memory [`SourceStore`].
///
/// Adding a file registers all of its ancestor directories. The store counts
/// every file read and directory listing, which lets tests observe how often
/// the caches fall through to the backing store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RwLock<BTreeMap<PathBuf, String>>,
    directories: RwLock<BTreeSet<PathBuf>>,
    reads: AtomicUsize,
    listings: AtomicUsize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes (or overwrites) a file, creating its ancestor directories.
    pub fn write_file(&self, path: impl Into<PathBuf>, text: impl Into<String>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.create_dir(parent);
        }
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, text.into());
    }

    /// Creates a directory and all of its ancestors.
    pub fn create_dir(&self, path: impl AsRef<Path>) {
        let mut dirs = self
            .directories
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Deletes a file. Missing files are ignored.
    pub fn remove_file(&self, path: impl AsRef<Path>) {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path.as_ref());
    }

    /// Deletes a directory together with everything below it.
    pub fn remove_dir_all(&self, path: impl AsRef<Path>) {
        let root = path.as_ref();
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|p, _| !p.starts_with(root));
        self.directories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|p| !p.starts_with(root));
    }

    /// Number of [`SourceStore::read_text`] calls served so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// Number of [`SourceStore::entry_names`] calls served so far.
    pub fn listing_count(&self) -> usize {
        self.listings.load(Ordering::Relaxed)
    }
}

impl SourceStore for MemoryStore {
    fn read_text(&self, path: &Path) -> ReadOutcome {
        self.reads.fetch_add(1, Ordering::Relaxed);
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        match files.get(path) {
            Some(text) => ReadOutcome::Found(text.clone()),
            None => ReadOutcome::Absent,
        }
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.directories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(path)
    }

    fn entry_names(&self, path: &Path) -> Vec<String> {
        self.listings.fetch_add(1, Ordering::Relaxed);
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        let dirs = self
            .directories
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let children = files
            .keys()
            .chain(dirs.iter())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .filter_map(|name| name.to_str())
            .map(str::to_string)
            .collect::<BTreeSet<_>>();
        children.into_iter().collect()
    }
}
