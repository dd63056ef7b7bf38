//! Search command handler.

use anyhow::{Context, Result};

use crate::cli::SearchArgs;
use crate::vault::Vault;

pub fn handle_search(args: &SearchArgs, vault: &Vault) -> Result<()> {
    let results = vault
        .search(&args.query, args.context)
        .with_context(|| format!("search failed for '{}'", args.query))?;

    if results.is_empty() {
        println!("No results found for '{}'", args.query);
        return Ok(());
    }

    for result in &results {
        println!();
        println!("{}:{}", result.path.display(), result.line);
        println!("{}", result.context);
    }

    println!();
    println!("Found {} match(es)", results.len());
    Ok(())
}
