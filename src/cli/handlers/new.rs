//! New note command handler.

use anyhow::{Context, Result, bail};

use super::show_edit::open_in_editor;
use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::infra::slugify;
use crate::vault::Vault;

pub fn handle_new(args: &NewArgs, vault: &Vault, config: &Config) -> Result<()> {
    let title = args.title.trim();
    if title.is_empty() {
        bail!("title cannot be empty");
    }
    if slugify(title).is_empty() {
        bail!("title '{}' produces an empty filename", title);
    }

    let rel = vault
        .create_note(title, args.tags.clone(), args.aliases.clone())
        .with_context(|| format!("failed to create note '{}'", title))?;

    println!("Created: {}", title);
    println!("  {}", vault.note_path(&rel).display());

    if args.edit {
        // The note is already on disk; a failing editor must not turn
        // the creation into a failure.
        match open_in_editor(&vault.note_path(&rel), config) {
            Ok(()) => vault.record_change(&format!("Edit: {}", title)),
            Err(err) => eprintln!("warning: {err:#}"),
        }
    }

    Ok(())
}
