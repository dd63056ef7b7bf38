//! The vault engine: note resolution, indexing, backlinks, and the
//! rename/archive operations.

pub mod config;
pub mod index;
pub mod links;
pub mod ops;
pub mod resolve;
pub mod search;
pub mod snapshot;

pub use config::VaultConfig;
pub use index::NoteSummary;
pub use ops::RenameOutcome;
pub use search::SearchMatch;
pub use snapshot::{GitSnapshot, NoopSnapshot, Snapshot};

use crate::infra::FsError;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Per-vault configuration artifact marking the vault root.
pub const CONFIG_FILE: &str = ".warren.json";

/// Reserved subtree holding archived notes.
pub const ARCHIVE_DIR: &str = "archive";

/// File extension for notes.
pub const NOTE_EXTENSION: &str = "md";

/// Errors from vault operations.
///
/// `NotFound` and `Conflict` are expected outcomes of lookups and
/// renames, not faults; genuine I/O failures surface as `Fs`.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("note not found: '{identifier}'")]
    NotFound { identifier: String },

    #[error("target already exists: {path}")]
    Conflict { path: PathBuf },

    #[error(transparent)]
    Fs(#[from] FsError),
}

/// A note vault rooted at a directory.
///
/// Holds no state beyond the root path and the snapshot collaborator:
/// every operation re-reads the vault from disk, so external edits
/// between calls are always picked up.
pub struct Vault {
    root: PathBuf,
    snapshot: Box<dyn Snapshot>,
}

impl Vault {
    /// Opens a vault at `root` with snapshotting disabled.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self::with_snapshot(root, Box::new(NoopSnapshot))
    }

    /// Opens a vault at `root` with the given snapshot collaborator.
    pub fn with_snapshot(root: impl Into<PathBuf>, snapshot: Box<dyn Snapshot>) -> Self {
        Self {
            root: root.into(),
            snapshot,
        }
    }

    /// The vault root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a vault-relative note path.
    pub fn note_path(&self, rel: &Path) -> PathBuf {
        self.root.join(rel)
    }

    /// Records a mutation with the snapshot collaborator.
    ///
    /// Invoked after every completed mutation (create, rename, archive,
    /// edit). Fire-and-forget: runs only when the vault config enables
    /// auto-commit, and collaborator failures never propagate.
    pub fn record_change(&self, message: &str) {
        let auto_commit = VaultConfig::load(&self.root)
            .map(|config| config.auto_commit)
            .unwrap_or(false);
        if auto_commit {
            let _ = self.snapshot.record(&self.root, message);
        }
    }
}

/// True when a vault-relative path is visible to resolution and
/// indexing: not under the archive subtree, no hidden component, and
/// nothing that would escape the root.
pub(crate) fn is_visible(rel: &Path) -> bool {
    if rel.starts_with(ARCHIVE_DIR) {
        return false;
    }
    for component in rel.components() {
        match component {
            Component::Normal(name) => {
                if name.to_str().is_some_and(|s| s.starts_with('.')) {
                    return false;
                }
            }
            Component::CurDir => {}
            // Parent-dir and absolute components escape the vault.
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_paths_are_not_visible() {
        assert!(!is_visible(Path::new("archive/old.md")));
        assert!(is_visible(Path::new("archived-thoughts.md")));
    }

    #[test]
    fn hidden_paths_are_not_visible() {
        assert!(!is_visible(Path::new(".hidden.md")));
        assert!(!is_visible(Path::new(".git/config.md")));
        assert!(!is_visible(Path::new("sub/.secret/note.md")));
    }

    #[test]
    fn plain_paths_are_visible() {
        assert!(is_visible(Path::new("note.md")));
        assert!(is_visible(Path::new("projects/note.md")));
    }

    #[test]
    fn escaping_paths_are_not_visible() {
        assert!(!is_visible(Path::new("../outside.md")));
        assert!(!is_visible(Path::new("/etc/notes.md")));
    }
}
