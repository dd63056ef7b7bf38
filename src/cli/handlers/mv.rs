//! Move/rename note command handler.

use anyhow::{Result, bail};

use crate::cli::MvArgs;
use crate::infra::slugify;
use crate::vault::Vault;

pub fn handle_mv(args: &MvArgs, vault: &Vault) -> Result<()> {
    let new_title = args.new.trim();
    if new_title.is_empty() {
        bail!("new title cannot be empty");
    }
    if slugify(new_title).is_empty() {
        bail!("new title '{}' produces an empty filename", new_title);
    }

    let outcome = vault.rename_note(&args.old, new_title)?;

    if outcome.links_updated > 0 {
        println!("Updated links in {} note(s)", outcome.links_updated);
    }
    println!("Renamed: {} -> {}", args.old, new_title);
    println!("  {}", outcome.new_path.display());
    Ok(())
}
