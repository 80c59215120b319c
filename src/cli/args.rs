//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report override files that are missing or out of date
//! - `sync`: Create and merge override files (dry-run unless `--apply`)
//! - `generate`: Print a fully disabled override template for a default file
//! - `init`: Initialize langsync configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::context::ContextOverrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Sync(cmd)) => cmd.common.verbose,
            Some(Command::Generate(_)) | Some(Command::Init) | Some(Command::Serve) | None => {
                false
            }
        }
    }
}

/// Common arguments shared by commands that work on a project.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory (where .langsyncrc.json is looked up)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Directory of default files (overrides config file)
    #[arg(long, env = "LANGSYNC_DEFAULTS_ROOT")]
    pub defaults_root: Option<PathBuf>,

    /// Directory of override files (overrides config file)
    #[arg(long, env = "LANGSYNC_OVERRIDES_ROOT")]
    pub overrides_root: Option<PathBuf>,

    /// Language to sync, can be repeated (overrides config file)
    #[arg(long = "language", short = 'l')]
    pub languages: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> ContextOverrides {
        ContextOverrides {
            defaults_root: self.defaults_root.clone(),
            overrides_root: self.overrides_root.clone(),
            languages: self.languages.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write override files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Default .lang file to turn into an override template
    pub file: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report override files that are missing or out of date
    Check(CheckCommand),
    /// Add new default keys to override files and refresh stale disabled entries
    Sync(SyncCommand),
    /// Print an override template with every entry of a default file disabled
    Generate(GenerateCommand),
    /// Initialize a new .langsyncrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
