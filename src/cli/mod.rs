//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// warren - plain-text notes with wikilinks
#[derive(Parser, Debug)]
#[command(name = "warren", version, about, long_about = None)]
pub struct Cli {
    /// Vault root directory (overrides discovery and config)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new vault
    Init(InitArgs),

    /// Create a new note
    New(NewArgs),

    /// List notes, optionally filtered by query and tag
    #[command(name = "ls")]
    List(ListArgs),

    /// Show recently modified notes
    Recent(RecentArgs),

    /// Full-text search across notes
    Search(SearchArgs),

    /// Print a note's contents
    Show(ShowArgs),

    /// Edit a note in your editor
    Edit(EditArgs),

    /// Show notes that link to a given note
    Backlinks(BacklinksArgs),

    /// Rename a note, updating links across the vault
    Mv(MvArgs),

    /// Move a note into the archive
    Archive(ArchiveArgs),

    /// List all tags with usage counts
    Tags(TagsArgs),

    /// Show vault information
    Info(InfoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Tag for the note (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Alias usable in lookups (can be specified multiple times)
    #[arg(short, long = "alias", action = ArgAction::Append)]
    pub aliases: Vec<String>,

    /// Open in editor after creation
    #[arg(short, long)]
    pub edit: bool,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Substring to match against titles and contents
    pub query: Option<String>,

    /// Filter by tag
    #[arg(short, long = "tag")]
    pub tag: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `recent` command
#[derive(Parser, Debug)]
pub struct RecentArgs {
    /// Maximum number of notes to show
    #[arg(default_value_t = 10)]
    pub limit: usize,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Lines of context to show around each match
    #[arg(short, long, default_value_t = 2)]
    pub context: usize,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note name, title, or alias
    pub note: String,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note name, title, or alias
    pub note: String,
}

/// Arguments for the `backlinks` command
#[derive(Parser, Debug)]
pub struct BacklinksArgs {
    /// Note name, title, or alias
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `mv` command
#[derive(Parser, Debug)]
pub struct MvArgs {
    /// Note to rename (name, title, or alias)
    pub old: String,

    /// New title
    pub new: String,
}

/// Arguments for the `archive` command
#[derive(Parser, Debug)]
pub struct ArchiveArgs {
    /// Note name, title, or alias
    pub note: String,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
