//! Watch Use Case implementation

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::sync::{SyncOrchestrator, SyncStats};
use crate::domain::ports::{IgnorePredicate, SyncEvent, SyncEventSink};
use crate::domain::services::{ChangeCoalescer, Debounce, DebounceScheduler};
use crate::domain::value_objects::PendingPath;
use crate::error::{SyncwatchError, SyncwatchResult};

use super::event::{inputs_from_event, WatchInput, WatchOptions, POLL_INTERVAL};

/// Mutable state owned by the watch loop
struct LoopState {
    coalescer: ChangeCoalescer,
    timer: DebounceScheduler,
    /// A batch was handed to the sync worker and has not reported back
    in_flight: bool,
    inputs_open: bool,
}

/// Watch Use Case
///
/// Feeds filesystem changes through the coalescer and the debounce timer and
/// hands each debounced batch to the orchestrator on a worker thread, so the
/// loop keeps collecting changes while a transfer runs.
pub struct WatchUseCase {
    options: WatchOptions,
    orchestrator: Arc<SyncOrchestrator>,
    ignore: Arc<dyn IgnorePredicate>,
    events: Arc<dyn SyncEventSink>,
}

impl WatchUseCase {
    pub fn new(
        options: WatchOptions,
        orchestrator: Arc<SyncOrchestrator>,
        ignore: Arc<dyn IgnorePredicate>,
        events: Arc<dyn SyncEventSink>,
    ) -> Self {
        Self {
            options,
            orchestrator,
            ignore,
            events,
        }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    /// Start watching (blocking)
    ///
    /// Registers a recursive watcher on the root and runs the loop until the
    /// running flag is cleared or a sync fails.
    pub fn start(&self, running: Arc<AtomicBool>) -> SyncwatchResult<()> {
        let (tx, rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                let inputs = match res {
                    Ok(event) => inputs_from_event(event),
                    Err(e) => vec![WatchInput::Error(e.to_string())],
                };
                for input in inputs {
                    let _ = tx.send(input);
                }
            },
            Config::default(),
        )?;
        watcher.watch(&self.options.root, RecursiveMode::Recursive)?;

        let result = self.run(rx, &running);
        drop(watcher);
        result
    }

    /// Run the watch loop over an arbitrary input stream.
    ///
    /// Returns once `running` is cleared, once a sync fails (unless
    /// `keep_going` is set), or once `inputs` is closed and every pending
    /// change has been synced.
    pub fn run(&self, inputs: Receiver<WatchInput>, running: &AtomicBool) -> SyncwatchResult<()> {
        self.events.on_event(SyncEvent::WatchStarted {
            root: self.options.root.display().to_string(),
            destination: self.orchestrator.options().destination.clone(),
        });

        let (job_tx, job_rx) = mpsc::channel::<Vec<PendingPath>>();
        let (done_tx, done_rx) = mpsc::channel::<SyncwatchResult<SyncStats>>();
        let orchestrator = Arc::clone(&self.orchestrator);
        let worker = thread::Builder::new()
            .name("syncwatch-sync".to_string())
            .spawn(move || {
                for batch in job_rx {
                    if done_tx.send(orchestrator.sync(batch)).is_err() {
                        break;
                    }
                }
            })?;

        let mut state = LoopState {
            coalescer: ChangeCoalescer::new(self.options.max_paths),
            timer: DebounceScheduler::new(self.options.min_delay, self.options.max_delay),
            in_flight: false,
            inputs_open: true,
        };

        let mut outcome = Ok(());
        if self.options.initial_sync {
            outcome = self.dispatch(vec![PendingPath::Root], &mut state, &job_tx);
        }
        if outcome.is_ok() {
            outcome = self.event_loop(&inputs, running, &mut state, &job_tx, &done_rx);
        }

        state.timer.cancel();
        drop(job_tx);
        if worker.join().is_err() {
            self.events.on_event(SyncEvent::Error {
                message: "sync worker panicked".to_string(),
            });
        }
        self.events.on_event(SyncEvent::Shutdown);
        outcome
    }

    fn event_loop(
        &self,
        inputs: &Receiver<WatchInput>,
        running: &AtomicBool,
        state: &mut LoopState,
        job_tx: &Sender<Vec<PendingPath>>,
        done_rx: &Receiver<SyncwatchResult<SyncStats>>,
    ) -> SyncwatchResult<()> {
        while running.load(Ordering::SeqCst) {
            loop {
                match done_rx.try_recv() {
                    Ok(Ok(_)) => state.in_flight = false,
                    Ok(Err(err)) => {
                        state.in_flight = false;
                        if !self.options.keep_going {
                            return Err(err);
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        return Err(SyncwatchError::Watch("sync worker stopped".to_string()));
                    }
                }
            }

            let wait = state
                .timer
                .time_until(Instant::now())
                .map_or(POLL_INTERVAL, |left| left.min(POLL_INTERVAL));

            if state.inputs_open {
                match inputs.recv_timeout(wait) {
                    Ok(input) => self.handle_input(input, state),
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => state.inputs_open = false,
                }
            } else if state.in_flight || state.timer.is_armed() || !state.coalescer.is_empty() {
                thread::sleep(wait);
            } else {
                return Ok(());
            }

            let now = Instant::now();
            if state.timer.fire(now) {
                self.flush(now, state, job_tx)?;
            }
        }
        Ok(())
    }

    fn handle_input(&self, input: WatchInput, state: &mut LoopState) {
        match input {
            WatchInput::Error(message) => self.events.on_event(SyncEvent::Warning { message }),
            WatchInput::Change { kind, path } => {
                let Some(pending) = self.relative_change(&path) else {
                    return;
                };
                if self.events.wants_detailed_events() {
                    self.events.on_event(SyncEvent::FileChanged {
                        kind,
                        path: pending.to_string(),
                    });
                }
                state.coalescer.record_change(kind, pending);
                let debounce = state
                    .timer
                    .change_occurred(Instant::now(), state.coalescer.len());
                self.report_pressure(debounce);
            }
        }
    }

    /// Root-relative form of a watcher path, or `None` if it lies outside
    /// the root or is ignored. A change on the root itself maps to `Root`.
    fn relative_change(&self, path: &Path) -> Option<PendingPath> {
        let pending = PendingPath::from_absolute(&self.options.root, path)?;
        if self.ignore.is_ignored(pending.as_path(), path.is_dir()) {
            return None;
        }
        Some(pending)
    }

    /// The debounce timer fired.
    fn flush(
        &self,
        now: Instant,
        state: &mut LoopState,
        job_tx: &Sender<Vec<PendingPath>>,
    ) -> SyncwatchResult<()> {
        if state.in_flight || self.orchestrator.is_running() {
            let debounce = state.timer.rearm(now, state.coalescer.len());
            self.report_pressure(debounce);
            return Ok(());
        }

        let batch = state.coalescer.drain();
        state.timer.complete();
        if batch.is_empty() {
            return Ok(());
        }
        self.dispatch(batch, state, job_tx)
    }

    fn dispatch(
        &self,
        batch: Vec<PendingPath>,
        state: &mut LoopState,
        job_tx: &Sender<Vec<PendingPath>>,
    ) -> SyncwatchResult<()> {
        job_tx
            .send(batch)
            .map_err(|_| SyncwatchError::Watch("sync worker stopped".to_string()))?;
        state.in_flight = true;
        Ok(())
    }

    fn report_pressure(&self, debounce: Debounce) {
        if let Some(pending_count) = debounce.pressure {
            self.events
                .on_event(SyncEvent::DebouncePressure { pending_count });
        }
    }
}
