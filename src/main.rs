//! syncwatch CLI - mirror a directory tree with debounced rsync runs
//!
//! Usage: syncwatch <COMMAND>
//!
//! Commands:
//!   watch   Watch SOURCE and mirror every change to DESTINATION
//!   sync    Mirror SOURCE to DESTINATION once and exit

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use syncwatch::presentation::cli::{Cli, Commands};

use commands::watch::WatchFlags;
use commands::GlobalArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let globals = GlobalArgs {
        json: cli.json,
        color: cli.color,
        verbosity: cli.verbosity(),
    };

    match cli.command {
        Commands::Watch {
            source,
            destination,
            transfer,
            min_delay_ms,
            max_delay_ms,
            max_paths,
            no_initial_sync,
            keep_going,
        } => commands::watch::cmd_watch(
            &source,
            &destination,
            &transfer,
            WatchFlags {
                min_delay_ms,
                max_delay_ms,
                max_paths,
                no_initial_sync,
                keep_going,
            },
            globals,
        ),
        Commands::Sync {
            source,
            destination,
            transfer,
            paths,
        } => commands::sync::cmd_sync(&source, &destination, &transfer, &paths, globals),
    }
}
