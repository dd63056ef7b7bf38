//! The per-vault configuration artifact.

use super::CONFIG_FILE;
use crate::infra::{FsError, read_text, write_text_atomic};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or writing the vault config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("invalid vault config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Small key-value structure persisted at the vault root as
/// `.warren.json`.
///
/// The engine treats the blob as opaque except for `auto_commit`, which
/// gates the snapshot collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    pub created: String,
    pub version: String,
    #[serde(default)]
    pub auto_commit: bool,
}

impl VaultConfig {
    /// A fresh config stamped with the current time and crate version.
    pub fn new() -> Self {
        Self {
            created: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            version: env!("CARGO_PKG_VERSION").to_string(),
            auto_commit: false,
        }
    }

    /// Path of the config file under a vault root.
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// True when a vault config exists at `root`.
    pub fn exists(root: &Path) -> bool {
        Self::path(root).is_file()
    }

    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(root);
        let contents = read_text(&path)?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn save(&self, root: &Path) -> Result<(), ConfigError> {
        let mut contents =
            serde_json::to_string_pretty(self).expect("vault config serialization is infallible");
        contents.push('\n');
        write_text_atomic(&Self::path(root), &contents)?;
        Ok(())
    }
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self::new()
    }
}
