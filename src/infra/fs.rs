//! File I/O for notes with atomic writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors during file system operations on notes.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Reads a note file as UTF-8 text.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist,
/// `FsError::PermissionDenied` if access is denied, and `FsError::Io`
/// for other faults including invalid UTF-8.
pub fn read_text(path: &Path) -> Result<String, FsError> {
    std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
}

/// Writes note content to a path atomically.
///
/// Uses a temporary file in the same directory and an atomic rename so
/// a note file is never observed half-written.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the final rename fails.
pub fn write_text_atomic(path: &Path, content: &str) -> Result<(), FsError> {
    let parent = path.parent().ok_or_else(|| FsError::NotFound {
        path: path.into(),
    })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(parent, e))?;

    temp.write_all(content.as_bytes()).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_text_returns_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.md");
        fs::write(&path, "hello").unwrap();

        assert_eq!(read_text(&path).unwrap(), "hello");
    }

    #[test]
    fn read_text_maps_missing_file_to_not_found() {
        let result = read_text(Path::new("/nonexistent/note.md"));
        assert!(matches!(result, Err(FsError::NotFound { .. })));
    }

    #[test]
    fn write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.md");

        write_text_atomic(&path, "content").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.md");

        write_text_atomic(&path, "first").unwrap();
        write_text_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.md");

        write_text_atomic(&path, "content").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("note.md");

        let result = write_text_atomic(&path, "content");
        assert!(result.is_err());
    }

    #[test]
    fn from_io_maps_error_kinds() {
        let path = Path::new("/p");
        let not_found = FsError::from_io(path, io::Error::new(io::ErrorKind::NotFound, "x"));
        assert!(matches!(not_found, FsError::NotFound { .. }));

        let denied = FsError::from_io(path, io::Error::new(io::ErrorKind::PermissionDenied, "x"));
        assert!(matches!(denied, FsError::PermissionDenied { .. }));

        let other = FsError::from_io(path, io::Error::other("x"));
        assert!(matches!(other, FsError::Io { .. }));
    }
}
