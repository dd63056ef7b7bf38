//! List and recent command handlers.

use anyhow::{Context, Result};

use super::truncate_str;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{ListArgs, RecentArgs};
use crate::infra::read_text;
use crate::vault::{NoteSummary, Vault};

pub fn handle_list(args: &ListArgs, vault: &Vault) -> Result<()> {
    let mut notes = vault
        .enumerate()
        .with_context(|| "failed to enumerate vault")?;

    // Filtering is the caller's job, not the index's: a query matches
    // the title or the file content, a tag must be present verbatim.
    if let Some(query) = &args.query {
        let needle = query.to_lowercase();
        let mut kept = Vec::new();
        for note in notes {
            if note.title.to_lowercase().contains(&needle) {
                kept.push(note);
                continue;
            }
            let content = read_text(&vault.note_path(&note.path))?;
            if content.to_lowercase().contains(&needle) {
                kept.push(note);
            }
        }
        notes = kept;
    }

    if let Some(tag) = &args.tag {
        notes.retain(|note| note.tags.iter().any(|t| t == tag));
    }

    notes.sort_by(|a, b| a.title.cmp(&b.title));

    print_listing(&notes, args.format, vault)?;
    if matches!(args.format, OutputFormat::Human) && !notes.is_empty() {
        println!();
        println!("{} note(s)", notes.len());
    }
    Ok(())
}

pub fn handle_recent(args: &RecentArgs, vault: &Vault) -> Result<()> {
    let mut notes = vault
        .enumerate()
        .with_context(|| "failed to enumerate vault")?;

    notes.sort_by_key(|note| std::cmp::Reverse(note.modified));
    notes.truncate(args.limit);

    print_listing(&notes, args.format, vault)
}

fn print_listing(notes: &[NoteSummary], format: OutputFormat, vault: &Vault) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
                return Ok(());
            }

            println!("{:<40}  {:<20}  {}", "Title", "Tags", "Path");
            println!(
                "{:<40}  {:<20}  {}",
                "----------------------------------------",
                "--------------------",
                "----------------------------------------"
            );
            for note in notes {
                println!(
                    "{:<40}  {:<20}  {}",
                    truncate_str(&note.title, 40),
                    truncate_str(&note.tags.join(", "), 20),
                    note.path.display()
                );
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes
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
            for note in notes {
                println!("{}", vault.note_path(&note.path).display());
            }
        }
    }
    Ok(())
}
