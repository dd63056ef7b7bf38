//! Vault index: enumeration of non-archived notes as lightweight
//! summaries.

use super::{ARCHIVE_DIR, NOTE_EXTENSION, Vault, VaultError};
use crate::domain::decode;
use crate::infra::{FsError, read_text, titleize};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Lightweight per-note summary yielded by enumeration.
#[derive(Debug, Clone)]
pub struct NoteSummary {
    /// Path relative to the vault root; the note's unique key.
    pub path: PathBuf,
    /// Header title, or the titleized filename stem when absent.
    pub title: String,
    pub tags: Vec<String>,
    /// Opaque creation timestamp from the header, if any.
    pub created: Option<String>,
    /// Filesystem modification time.
    pub modified: DateTime<Utc>,
}

impl NoteSummary {
    /// The note's filename stem, one of its canonical reference forms.
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
    }
}

impl Vault {
    /// Walks the vault for note files, skipping hidden entries and the
    /// archive subtree. Paths are relative to the root; order is the
    /// walk order and carries no guarantee.
    pub(crate) fn scan(&self) -> Result<Vec<PathBuf>, FsError> {
        if !self.root().is_dir() {
            return Err(FsError::NotFound {
                path: self.root().to_path_buf(),
            });
        }

        let notes = WalkDir::new(self.root())
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || (!is_hidden(e) && !is_archive_root(e)))
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(has_note_extension)
            .map(|e| {
                e.path()
                    .strip_prefix(self.root())
                    .expect("walked path is under the root")
                    .to_path_buf()
            })
            .collect();

        Ok(notes)
    }

    /// Enumerates all non-archived notes as summaries.
    ///
    /// Consumers that need a deterministic order sort the result
    /// themselves (listing sorts by title, recency by mtime).
    pub fn enumerate(&self) -> Result<Vec<NoteSummary>, VaultError> {
        self.scan()?
            .into_iter()
            .map(|rel| self.load_summary(&rel))
            .collect()
    }

    /// Reads one note and builds its summary.
    pub fn load_summary(&self, rel: &Path) -> Result<NoteSummary, VaultError> {
        let content = read_text(&self.note_path(rel))?;
        self.summarize(rel, &content)
    }

    /// Builds a summary from already-read note content.
    pub(crate) fn summarize(&self, rel: &Path, content: &str) -> Result<NoteSummary, VaultError> {
        let abs = self.note_path(rel);
        let (meta, _) = decode(content);
        let stem = rel
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        let modified = std::fs::metadata(&abs)
            .and_then(|metadata| metadata.modified())
            .map_err(|e| FsError::from_io(&abs, e))?;

        Ok(NoteSummary {
            path: rel.to_path_buf(),
            title: meta.title.unwrap_or_else(|| titleize(stem)),
            tags: meta.tags,
            created: meta.created,
            modified: DateTime::<Utc>::from(modified),
        })
    }

    /// Tag frequencies across all non-archived notes, sorted by count
    /// descending, then name.
    pub fn tag_counts(&self) -> Result<Vec<(String, usize)>, VaultError> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for summary in self.enumerate()? {
            for tag in summary.tags {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }

        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(counts)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_archive_root(entry: &DirEntry) -> bool {
    entry.depth() == 1 && entry.file_name() == ARCHIVE_DIR
}

fn has_note_extension(entry: &DirEntry) -> bool {
    entry
        .path()
        .extension()
        .is_some_and(|ext| ext == NOTE_EXTENSION)
}
