//! Show and Edit command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

use crate::cli::config::Config;
use crate::cli::{EditArgs, ShowArgs};
use crate::infra::read_text;
use crate::vault::Vault;

pub fn handle_show(args: &ShowArgs, vault: &Vault) -> Result<()> {
    let rel = vault.find_note(&args.note)?;
    let content = read_text(&vault.note_path(&rel))
        .with_context(|| format!("failed to read note: {}", rel.display()))?;

    println!("{}", rel.display());
    println!();
    print!("{}", content);
    if !content.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Trait for launching an editor (allows mocking in tests).
pub(crate) trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opens a file in the user's configured editor.
pub(crate) fn open_in_editor(path: &Path, config: &Config) -> Result<()> {
    let editor = config.editor();

    // Parse editor command (may include args like "code --wait")
    let parts: Vec<&str> = editor.split_whitespace().collect();
    let Some((cmd, cmd_args)) = parts.split_first() else {
        bail!("editor command is empty");
    };

    let status = Command::new(cmd)
        .args(cmd_args)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_edit_impl<E: EditorLauncher>(
    args: &EditArgs,
    vault: &Vault,
    editor: &E,
) -> Result<()> {
    let rel = vault.find_note(&args.note)?;

    editor.open(&vault.note_path(&rel))?;

    let stem = rel
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    vault.record_change(&format!("Edit: {}", stem));

    println!("Edited: {}", rel.display());
    Ok(())
}

pub fn handle_edit(args: &EditArgs, vault: &Vault, config: &Config) -> Result<()> {
    struct RealEditor<'a>(&'a Config);
    impl EditorLauncher for RealEditor<'_> {
        fn open(&self, path: &Path) -> Result<()> {
            open_in_editor(path, self.0)
        }
    }
    handle_edit_impl(args, vault, &RealEditor(config))
}
