use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use syncwatch::presentation::cli::TransferArgs;
use syncwatch::presentation::factory;

use super::{GlobalArgs, Session};

/// Debounce and lifecycle flags of `syncwatch watch`
#[derive(Debug, Clone, Copy, Default)]
pub struct WatchFlags {
    pub min_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
    pub max_paths: Option<u64>,
    pub no_initial_sync: bool,
    pub keep_going: bool,
}

pub fn cmd_watch(
    source: &Path,
    destination: &str,
    transfer: &TransferArgs,
    flags: WatchFlags,
    globals: GlobalArgs,
) -> Result<()> {
    let mut session = Session::open("watch", source, transfer, globals)?;

    let debounce = &mut session.config.debounce;
    if let Some(ms) = flags.min_delay_ms {
        debounce.min_ms = ms;
    }
    if let Some(ms) = flags.max_delay_ms {
        debounce.max_ms = ms;
    }
    if let Some(n) = flags.max_paths {
        debounce.max_paths = usize::try_from(n).unwrap_or(usize::MAX);
    }
    if flags.no_initial_sync {
        session.config.watch.initial_sync = false;
    }
    if flags.keep_going {
        session.config.watch.keep_going = true;
    }

    session.check_rsync()?;

    let use_case = factory::create_watch_use_case(
        &session.config,
        &session.root,
        destination,
        Arc::clone(&session.events),
    )?;

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("installing Ctrl+C handler")?;

    let ui = session.ui;
    if !ui.json && !ui.is_quiet() {
        print!(
            "{}",
            crate::ui::views::watch::render_watch_header(
                &session.root.display().to_string(),
                destination,
                ui.color,
                ui.unicode
            )
        );
    }

    use_case.start(running)?;
    Ok(())
}
