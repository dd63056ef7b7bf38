//! Archive command handler.

use anyhow::Result;

use crate::cli::ArchiveArgs;
use crate::vault::Vault;

pub fn handle_archive(args: &ArchiveArgs, vault: &Vault) -> Result<()> {
    let dest = vault.archive_note(&args.note)?;

    println!("Archived: {}", dest.display());
    Ok(())
}
