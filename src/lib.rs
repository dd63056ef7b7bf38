//! warren - plain-text notes with wikilinks

pub mod cli;
pub mod domain;
pub mod infra;
pub mod vault;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_archive, handle_backlinks, handle_completions, handle_edit, handle_info,
        handle_init, handle_list, handle_mv, handle_new, handle_recent, handle_search,
        handle_show, handle_tags, open_vault, resolve_vault_root,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Commands that work without a resolved vault.
    match &cli.command {
        Command::Init(args) => return handle_init(args),
        Command::Completions(args) => return handle_completions(args),
        _ => {}
    }

    let config = Config::load()?;
    let root = resolve_vault_root(cli.dir.as_ref(), &config)?;
    let vault = open_vault(root);

    match &cli.command {
        Command::Init(_) | Command::Completions(_) => unreachable!("handled above"),
        Command::New(args) => handle_new(args, &vault, &config),
        Command::List(args) => handle_list(args, &vault),
        Command::Recent(args) => handle_recent(args, &vault),
        Command::Search(args) => handle_search(args, &vault),
        Command::Show(args) => handle_show(args, &vault),
        Command::Edit(args) => handle_edit(args, &vault, &config),
        Command::Backlinks(args) => handle_backlinks(args, &vault),
        Command::Mv(args) => handle_mv(args, &vault),
        Command::Archive(args) => handle_archive(args, &vault),
        Command::Tags(args) => handle_tags(args, &vault),
        Command::Info(args) => handle_info(args, &vault),
    }
}
