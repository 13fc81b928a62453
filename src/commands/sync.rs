use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use syncwatch::presentation::cli::TransferArgs;
use syncwatch::presentation::factory;

use super::{GlobalArgs, Session};

pub fn cmd_sync(
    source: &Path,
    destination: &str,
    transfer: &TransferArgs,
    paths: &[PathBuf],
    globals: GlobalArgs,
) -> Result<()> {
    let session = Session::open("sync", source, transfer, globals)?;
    let requested = factory::requested_paths(&session.root, paths)?;
    session.check_rsync()?;

    let ui = session.ui;
    if !ui.json && !ui.is_quiet() {
        print!(
            "{}",
            crate::ui::views::watch::render_sync_header(
                &session.root.display().to_string(),
                destination,
                session.config.transfer.dry_run,
                ui.color,
                ui.unicode
            )
        );
    }

    let orchestrator = factory::create_orchestrator(
        factory::sync_options(&session.config, &session.root, destination),
        Arc::clone(&session.events),
    );
    orchestrator.sync(requested)?;
    Ok(())
}
