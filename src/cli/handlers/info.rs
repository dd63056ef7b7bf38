//! Vault info command handler.

use anyhow::{Context, Result};

use crate::cli::InfoArgs;
use crate::vault::{ARCHIVE_DIR, NOTE_EXTENSION, Vault, VaultConfig};

pub fn handle_info(_args: &InfoArgs, vault: &Vault) -> Result<()> {
    let config = VaultConfig::load(vault.root()).ok();
    let note_count = vault
        .enumerate()
        .with_context(|| "failed to enumerate vault")?
        .len();
    let archived_count = archived_note_count(vault);

    let field = |value: Option<&str>| value.unwrap_or("Unknown").to_string();

    println!("Vault Location: {}", vault.root().display());
    println!(
        "Created:        {}",
        field(config.as_ref().map(|c| c.created.as_str()))
    );
    println!("Total Notes:    {}", note_count);
    println!("Archived:       {}", archived_count);
    println!(
        "Auto-commit:    {}",
        if config.as_ref().is_some_and(|c| c.auto_commit) {
            "Enabled"
        } else {
            "Disabled"
        }
    );
    println!(
        "Version:        {}",
        field(config.as_ref().map(|c| c.version.as_str()))
    );
    Ok(())
}

fn archived_note_count(vault: &Vault) -> usize {
    let archive_dir = vault.root().join(ARCHIVE_DIR);
    let Ok(entries) = std::fs::read_dir(archive_dir) else {
        return 0;
    };
    entries
        .filter_map(Result::ok)
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext == NOTE_EXTENSION)
        })
        .count()
}
