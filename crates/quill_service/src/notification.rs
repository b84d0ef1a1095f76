//! File change notifications.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What kind of filesystem entry changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// A single file was created, modified or deleted.
    File,
    /// Something anywhere below a directory changed.
    Directory,
}

/// One changed path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Whether `full_path` names a file or a directory.
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    /// Absolute path of the changed entry.
    #[serde(rename = "fullPath")]
    pub full_path: PathBuf,
}

impl FileChange {
    /// A file change.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: ChangeKind::File,
            full_path: path.into(),
        }
    }

    /// A directory change.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: ChangeKind::Directory,
            full_path: path.into(),
        }
    }
}

/// A batch of changes reported by the editor or a file watcher.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChangeNotification {
    /// The changed entries, applied in order.
    #[serde(default)]
    pub changes: Vec<FileChange>,
}

impl FileChangeNotification {
    /// Wraps the given changes.
    pub fn new(changes: Vec<FileChange>) -> Self {
        Self { changes }
    }
}
