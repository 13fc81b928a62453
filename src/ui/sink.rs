//! Console rendering of sync events

use std::io::Write;
use std::sync::Mutex;

use syncwatch::config::Verbosity;
use syncwatch::{SyncEvent, SyncEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::watch::render_sync_event;

/// Prints events as timestamped lines; errors go to stderr.
pub struct ConsoleEventSink {
    ui: UiContext,
    // Keeps lines from the watch loop and the sync worker from interleaving.
    lock: Mutex<()>,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self {
            ui,
            lock: Mutex::new(()),
        }
    }
}

/// Whether an event is shown at `verbosity`
pub fn is_visible(event: &SyncEvent, verbosity: Verbosity) -> bool {
    match event {
        SyncEvent::Error { .. } | SyncEvent::SyncEnded { .. } => true,
        SyncEvent::FileChanged { .. } | SyncEvent::TransferItem { .. } => {
            verbosity >= Verbosity::Verbose
        }
        _ => verbosity >= Verbosity::Normal,
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        if !is_visible(&event, self.ui.verbosity) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_sync_event(&timestamp, &event, self.ui.color, self.ui.unicode);

        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        match event {
            SyncEvent::Error { .. } => {
                let _ = std::io::stderr().write_all(rendered.as_bytes());
            }
            _ => {
                let mut stdout = std::io::stdout();
                let _ = stdout.write_all(rendered.as_bytes());
                let _ = stdout.flush();
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.ui.is_verbose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_shows_only_results() {
        let ended = SyncEvent::SyncEnded {
            paths: vec![".".to_string()],
            items_synced: 0,
        };
        let warning = SyncEvent::Warning {
            message: "rsync: vanished file".to_string(),
        };
        assert!(is_visible(&ended, Verbosity::Quiet));
        assert!(!is_visible(&warning, Verbosity::Quiet));
        assert!(is_visible(&warning, Verbosity::Normal));
    }

    #[test]
    fn per_file_events_need_verbose() {
        let changed = SyncEvent::FileChanged {
            kind: syncwatch::ChangeKind::Added,
            path: "a.txt".to_string(),
        };
        assert!(!is_visible(&changed, Verbosity::Normal));
        assert!(is_visible(&changed, Verbosity::Verbose));
    }
}
