//! Tags command handler.

use anyhow::{Context, Result};

use crate::cli::TagsArgs;
use crate::cli::output::{Output, OutputFormat, TagListing};
use crate::vault::Vault;

pub fn handle_tags(args: &TagsArgs, vault: &Vault) -> Result<()> {
    let counts = vault
        .tag_counts()
        .with_context(|| "failed to collect tags")?;

    match args.format {
        OutputFormat::Human => {
            if counts.is_empty() {
                println!("No tags found.");
                return Ok(());
            }

            println!("{:<24}  {:>5}", "Tag", "Count");
            println!("{:<24}  {:>5}", "------------------------", "-----");
            for (tag, count) in &counts {
                println!("{:<24}  {:>5}", tag, count);
            }
        }
        OutputFormat::Paths => {
            for (tag, _) in &counts {
                println!("{}", tag);
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = counts
                .into_iter()
                .map(|(name, count)| TagListing { name, count })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
