//! Vault initialization command handler.

use anyhow::{Context, Result};

use crate::cli::InitArgs;
use crate::vault::VaultConfig;

pub fn handle_init(args: &InitArgs) -> Result<()> {
    let root = &args.path;

    if VaultConfig::exists(root) {
        println!("Vault already exists at {}", root.display());
        return Ok(());
    }

    std::fs::create_dir_all(root)
        .with_context(|| format!("failed to create vault directory: {}", root.display()))?;

    VaultConfig::new()
        .save(root)
        .with_context(|| format!("failed to write vault config in {}", root.display()))?;

    println!("Initialized vault at {}", root.display());
    Ok(())
}
