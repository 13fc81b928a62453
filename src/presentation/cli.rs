//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --quiet) are inherited by all
//! subcommands. Flags given here override the config file and environment.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, Verbosity};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// syncwatch - mirror a directory tree with debounced rsync runs
#[derive(Parser, Debug)]
#[command(name = "syncwatch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Configuration is read from <SOURCE>/.syncwatch.toml or ~/.config/syncwatch/config.toml.")]
pub struct Cli {
    /// Output events as NDJSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Show per-file changes and transfer items
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors and sync summaries
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Verbosity requested on the command line, if any
    pub fn verbosity(&self) -> Option<Verbosity> {
        if self.quiet {
            Some(Verbosity::Quiet)
        } else if self.verbose > 0 {
            Some(Verbosity::Verbose)
        } else {
            None
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch SOURCE and mirror every change to DESTINATION
    Watch {
        /// Directory to watch
        source: PathBuf,

        /// Destination (local path or host:path)
        destination: String,

        #[command(flatten)]
        transfer: TransferArgs,

        /// Initial debounce delay in milliseconds
        #[arg(long, value_name = "MS")]
        min_delay_ms: Option<u64>,

        /// Debounce delay cap in milliseconds
        #[arg(long, value_name = "MS")]
        max_delay_ms: Option<u64>,

        /// Pending paths before falling back to a full sync
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        max_paths: Option<u64>,

        /// Skip the full sync on startup
        #[arg(long)]
        no_initial_sync: bool,

        /// Keep watching after a failed sync
        #[arg(long)]
        keep_going: bool,
    },

    /// Mirror SOURCE to DESTINATION once and exit
    Sync {
        /// Directory to mirror
        source: PathBuf,

        /// Destination (local path or host:path)
        destination: String,

        #[command(flatten)]
        transfer: TransferArgs,

        /// Only sync these paths (relative to SOURCE); may be repeated
        #[arg(long = "path", value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
}

/// Transfer flags shared by `watch` and `sync`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferArgs {
    /// Config file (instead of the discovered one)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// rsync executable
    #[arg(long, value_name = "PATH")]
    pub rsync: Option<PathBuf>,

    /// Pass --dry-run to rsync
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Exclude file in gitignore syntax (relative to SOURCE)
    #[arg(long, value_name = "FILE")]
    pub exclude_from: Option<PathBuf>,

    /// Also delete excluded files on the destination
    #[arg(long)]
    pub delete_excluded: bool,

    /// Extra rsync argument; may be repeated
    #[arg(long = "rsync-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub extra_args: Vec<String>,

    /// Full-sync retries after recoverable rsync failures
    #[arg(long, value_name = "N")]
    pub max_retries: Option<u32>,
}

impl TransferArgs {
    /// Apply the flags that were given on top of `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(rsync) = &self.rsync {
            config.transfer.rsync = rsync.clone();
        }
        if self.dry_run {
            config.transfer.dry_run = true;
        }
        if let Some(exclude) = &self.exclude_from {
            config.transfer.exclude_from = Some(exclude.clone());
        }
        if self.delete_excluded {
            config.transfer.delete_excluded = true;
        }
        config.transfer.extra_args.extend(self.extra_args.iter().cloned());
        if let Some(max_retries) = self.max_retries {
            config.transfer.max_retries = max_retries;
        }
    }
}
