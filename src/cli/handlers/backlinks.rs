//! Backlinks command handler.

use anyhow::{Context, Result};

use super::truncate_str;
use crate::cli::BacklinksArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::vault::Vault;

pub fn handle_backlinks(args: &BacklinksArgs, vault: &Vault) -> Result<()> {
    let mut backlinks = vault
        .backlinks(&args.note)
        .with_context(|| format!("failed to compute backlinks for '{}'", args.note))?;

    // Most recently touched sources first.
    backlinks.sort_by_key(|note| std::cmp::Reverse(note.modified));

    match args.format {
        OutputFormat::Human => {
            if backlinks.is_empty() {
                println!("No backlinks found.");
                return Ok(());
            }

            println!("{:<40}  {}", "Note", "Path");
            println!(
                "{:<40}  {}",
                "----------------------------------------",
                "----------------------------------------"
            );
            for backlink in &backlinks {
                println!(
                    "{:<40}  {}",
                    truncate_str(&backlink.title, 40),
                    backlink.path.display()
                );
            }

            println!();
            println!("{} backlink(s)", backlinks.len());
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = backlinks
                .iter()
                .map(|note| NoteListing {
                    title: note.title.clone(),
                    path: note.path.to_string_lossy().to_string(),
                    tags: note.tags.clone(),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for backlink in &backlinks {
                println!("{}", vault.note_path(&backlink.path).display());
            }
        }
    }

    Ok(())
}
