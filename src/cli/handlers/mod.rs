//! Command handlers for the CLI.

mod archive;
mod backlinks;
mod completions;
mod info;
mod init;
mod list;
mod mv;
mod new;
mod search;
mod show_edit;
mod tags;

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::cli::config::Config;
use crate::vault::{CONFIG_FILE, GitSnapshot, Vault};

// Re-export public items
pub use archive::handle_archive;
pub use backlinks::handle_backlinks;
pub use completions::handle_completions;
pub use info::handle_info;
pub use init::handle_init;
pub use list::{handle_list, handle_recent};
pub use mv::handle_mv;
pub use new::handle_new;
pub use search::handle_search;
pub use show_edit::{handle_edit, handle_show};
pub use tags::handle_tags;

// ===========================================
// Shared Utilities
// ===========================================

/// Locates a vault root by walking upward from `start` until the vault
/// config artifact is found.
pub fn discover_vault_root(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(CONFIG_FILE).is_file() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}

/// Resolves the vault root for a command invocation.
///
/// Precedence order:
/// 1. CLI `--dir` argument (used as-is)
/// 2. Upward discovery from the working directory
/// 3. App config `vault` setting, when it holds an initialized vault
pub fn resolve_vault_root(cli_dir: Option<&PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(dir) = cli_dir {
        return Ok(dir.clone());
    }

    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    if let Some(root) = discover_vault_root(&cwd) {
        return Ok(root);
    }

    if let Some(vault) = &config.vault
        && vault.join(CONFIG_FILE).is_file()
    {
        return Ok(vault.clone());
    }

    bail!("not inside a vault (run 'warren init' first)");
}

/// Opens the vault with the git snapshot collaborator attached.
pub(crate) fn open_vault(root: PathBuf) -> Vault {
    Vault::with_snapshot(root, Box::new(GitSnapshot))
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
