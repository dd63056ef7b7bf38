//! Snapshot collaborator: records vault mutations with an external
//! version-control tool.

use std::io;
use std::path::Path;
use std::process::Command;

/// Capability interface for recording a vault change.
///
/// Implementations are best-effort; callers invoke them fire-and-forget
/// after a mutation has already been committed to disk.
pub trait Snapshot {
    fn record(&self, root: &Path, message: &str) -> io::Result<()>;
}

/// Records changes as git commits in the vault root.
///
/// Non-zero exits (not a repository, nothing to commit) are tolerated;
/// only a failure to spawn `git` surfaces as an error, and callers
/// swallow that too.
pub struct GitSnapshot;

impl Snapshot for GitSnapshot {
    fn record(&self, root: &Path, message: &str) -> io::Result<()> {
        let add = Command::new("git")
            .args(["add", "-A"])
            .current_dir(root)
            .output()?;
        if !add.status.success() {
            return Ok(());
        }

        Command::new("git")
            .args(["commit", "--quiet", "-m", message])
            .current_dir(root)
            .output()?;
        Ok(())
    }
}

/// Snapshot implementation that does nothing; used in tests and when
/// auto-commit is disabled.
pub struct NoopSnapshot;

impl Snapshot for NoopSnapshot {
    fn record(&self, _root: &Path, _message: &str) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// Test double capturing recorded messages.
    pub(crate) struct RecordingSnapshot(pub Arc<Mutex<Vec<String>>>);

    impl Snapshot for RecordingSnapshot {
        fn record(&self, _root: &Path, message: &str) -> io::Result<()> {
            self.0.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn noop_snapshot_succeeds() {
        let dir = TempDir::new().unwrap();
        assert!(NoopSnapshot.record(dir.path(), "message").is_ok());
    }

    #[test]
    fn recording_snapshot_captures_messages() {
        let dir = TempDir::new().unwrap();
        let messages = Arc::new(Mutex::new(Vec::new()));
        let snapshot = RecordingSnapshot(Arc::clone(&messages));

        snapshot.record(dir.path(), "Create note: Test").unwrap();

        assert_eq!(*messages.lock().unwrap(), ["Create note: Test"]);
    }
}
