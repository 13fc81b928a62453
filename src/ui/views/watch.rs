use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, SemanticColor};
use syncwatch::domain::services::TransferOp;
use syncwatch::SyncEvent;

pub fn render_watch_header(
    source: &str,
    destination: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "syncwatch watch");
    header.add("Source", source);
    header.add("Destination", destination);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_sync_header(
    source: &str,
    destination: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Sync, "syncwatch sync");
    header.add("Source", source);
    header.add("Destination", destination);
    if dry_run {
        header.add("Mode", "dry run");
    }
    header.render(supports_color, supports_unicode)
}

fn summarize_paths(paths: &[String]) -> String {
    match paths {
        [] => "nothing".to_string(),
        [single] => single.clone(),
        [first, rest @ ..] => format!("{} (+{} more)", first, rest.len()),
    }
}

pub fn render_sync_event(
    timestamp: &str,
    event: &SyncEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = paint(&format!("[{}]", timestamp), SemanticColor::Dim, supports_color);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        SyncEvent::WatchStarted { root, .. } => {
            format!("{} {} Watching: {}\n", prefix, icon(Icon::Watch), root)
        }
        SyncEvent::FileChanged { kind, path } => format!(
            "{} {} {}: {}\n",
            prefix,
            icon(Icon::Arrow),
            kind.label(),
            path
        ),
        SyncEvent::SyncStarted { paths } => format!(
            "{} {} Syncing {}...\n",
            prefix,
            icon(Icon::Progress),
            summarize_paths(paths)
        ),
        SyncEvent::TransferItem { op, path } => {
            let op_icon = match op {
                TransferOp::Sent => Icon::Sent,
                TransferOp::Deleted => Icon::Deleted,
            };
            format!("{}   {} {}\n", prefix, icon(op_icon), path)
        }
        SyncEvent::SyncEnded {
            paths,
            items_synced,
        } => format!(
            "{} {} Synced {}: {} item{}\n",
            prefix,
            icon(Icon::Success),
            summarize_paths(paths),
            items_synced,
            if *items_synced == 1 { "" } else { "s" }
        ),
        SyncEvent::DebouncePressure { pending_count } => format!(
            "{} {} Changes keep arriving, holding {} pending path{}\n",
            prefix,
            icon(Icon::Warning),
            pending_count,
            if *pending_count == 1 { "" } else { "s" }
        ),
        SyncEvent::Warning { message } => {
            format!("{} {} {}\n", prefix, icon(Icon::Warning), message)
        }
        SyncEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            icon(Icon::Error),
            paint(message, SemanticColor::Error, supports_color)
        ),
        SyncEvent::Shutdown => format!("\n{} {} Watch stopped.\n", prefix, icon(Icon::Watch)),
    }
}
