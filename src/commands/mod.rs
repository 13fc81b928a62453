pub mod sync;
pub mod watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use syncwatch::config::Config;
use syncwatch::infrastructure::{JsonEventSink, RsyncBackend};
use syncwatch::presentation::cli::{ColorWhen, TransferArgs};
use syncwatch::presentation::factory;
use syncwatch::{SyncEvent, SyncEventSink, SyncwatchError};

use crate::ui::context::UiContext;
use crate::ui::sink::ConsoleEventSink;

/// Global flags every command needs
#[derive(Debug, Clone, Copy)]
pub struct GlobalArgs {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub verbosity: Option<syncwatch::config::Verbosity>,
}

/// Everything a command needs before it starts transferring
pub(crate) struct Session {
    pub root: PathBuf,
    pub config: Config,
    pub ui: UiContext,
    pub events: Arc<dyn SyncEventSink>,
}

impl Session {
    /// Resolve the root, load config, apply CLI flags, and pick an event sink.
    ///
    /// Config warnings are reported through the sink.
    pub fn open(
        command: &'static str,
        source: &Path,
        transfer: &TransferArgs,
        globals: GlobalArgs,
    ) -> Result<Self> {
        let root = factory::resolve_root(source)?;
        let (mut config, warnings) = factory::load_config(&root, transfer.config.as_deref())
            .with_context(|| format!("loading configuration for {}", root.display()))?;
        transfer.apply(&mut config);

        let ui = UiContext::new(globals.json, globals.verbosity, globals.color, &config);
        let events: Arc<dyn SyncEventSink> = if globals.json {
            Arc::new(JsonEventSink::stdout(command))
        } else {
            Arc::new(ConsoleEventSink::new(ui))
        };

        for warning in warnings {
            events.on_event(SyncEvent::Warning {
                message: warning.to_string(),
            });
        }

        Ok(Self {
            root,
            config,
            ui,
            events,
        })
    }

    /// Fail early when the rsync executable cannot run.
    pub fn check_rsync(&self) -> Result<()> {
        let program = syncwatch::infrastructure::expand_home(&self.config.transfer.rsync);
        if let Err(err) = RsyncBackend::check_available(&program) {
            let err = SyncwatchError::Spawn {
                program,
                message: err.to_string(),
            };
            self.events.on_event(SyncEvent::Error {
                message: err.to_string(),
            });
            return Err(err.into());
        }
        Ok(())
    }
}
