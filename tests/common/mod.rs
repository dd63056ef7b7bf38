//! Shared test harness: an isolated vault in a temp directory driven
//! through the compiled binary.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An initialized vault in a temporary directory, cleaned up on drop.
pub struct TestVault {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestVault {
    /// Creates an initialized vault (config artifact present).
    pub fn new() -> Self {
        let vault = Self::bare();
        fs::write(
            vault.root.join(".warren.json"),
            "{\n  \"created\": \"2024-01-15T10:30:00Z\",\n  \"version\": \"0.1.0\",\n  \"auto_commit\": false\n}\n",
        )
        .expect("failed to write vault config");
        vault
    }

    /// Creates a bare directory with no vault config.
    pub fn bare() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a note file at a vault-relative path, creating parent
    /// directories as needed.
    pub fn add_note(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create note directory");
        }
        fs::write(&path, content).expect("failed to write test note");
        path
    }

    /// Reads a note file back by vault-relative path.
    pub fn read_note(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel)).expect("failed to read note")
    }

    pub fn note_exists(&self, rel: &str) -> bool {
        self.root.join(rel).exists()
    }

    /// A command invocation pointed at this vault.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("warren").expect("binary builds");
        cmd.arg("--dir").arg(&self.root);
        cmd
    }
}
