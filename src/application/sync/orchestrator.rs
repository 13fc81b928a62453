//! Sync Orchestrator
//!
//! Runs one transfer at a time:
//! 1. normalize the requested paths
//! 2. build the transfer arguments
//! 3. spawn the process with the path list on stdin
//! 4. stream its output through the parser
//! 5. classify the exit code (success / recoverable retry / fatal)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};

use crate::domain::ports::{
    FileSystem, OutputLine, SyncEvent, SyncEventSink, TransferBackend, TransferRequest,
};
use crate::domain::services::{normalize_paths_to_sync, parse_line, TransferLine};
use crate::domain::value_objects::PendingPath;
use crate::error::{SyncwatchError, SyncwatchResult};

use super::args::{build_transfer_args, stdin_payload};
use super::exit_code::{describe_exit_code, ExitClass};
use super::options::SyncOptions;

/// Result of a completed `sync()` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Paths handed to the last (successful) transfer run
    pub paths: Vec<PendingPath>,
    /// Items reported across every run of this call, retries included
    pub items_synced: usize,
    /// Full-sync retries after recoverable failures
    pub retries: u32,
}

impl SyncStats {
    /// Check if nothing needed sending
    pub fn is_noop(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Outcome of a single transfer process
struct TransferRun {
    items_synced: usize,
    exit_code: Option<i32>,
}

/// FIFO turnstile: each caller takes a ticket and waits for its turn.
#[derive(Debug, Default)]
struct RunGate {
    state: Mutex<GateState>,
    turn: Condvar,
}

#[derive(Debug, Default)]
struct GateState {
    next_ticket: u64,
    now_serving: u64,
}

impl RunGate {
    fn enter(&self) -> GateSlot<'_> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let ticket = state.next_ticket;
        state.next_ticket += 1;
        while state.now_serving != ticket {
            state = self
                .turn
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
        GateSlot { gate: self }
    }
}

struct GateSlot<'a> {
    gate: &'a RunGate,
}

impl Drop for GateSlot<'_> {
    fn drop(&mut self) {
        let mut state = self
            .gate
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        state.now_serving += 1;
        self.gate.turn.notify_all();
    }
}

struct RunningFlag<'a>(&'a AtomicBool);

impl<'a> RunningFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for RunningFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Serializes sync requests for one watch root
///
/// Share it behind an `Arc`; `sync()` may be called from any thread.
pub struct SyncOrchestrator {
    options: SyncOptions,
    backend: Arc<dyn TransferBackend>,
    fs: Arc<dyn FileSystem>,
    events: Arc<dyn SyncEventSink>,
    gate: RunGate,
    running: AtomicBool,
}

impl SyncOrchestrator {
    pub fn new(
        options: SyncOptions,
        backend: Arc<dyn TransferBackend>,
        fs: Arc<dyn FileSystem>,
        events: Arc<dyn SyncEventSink>,
    ) -> Self {
        Self {
            options,
            backend,
            fs,
            events,
            gate: RunGate::default(),
            running: AtomicBool::new(false),
        }
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Whether a sync currently holds the run slot
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Sync `paths` (root-relative, or `[Root]` for everything).
    ///
    /// Blocks until every earlier call has finished, then runs the transfer.
    /// Recoverable failures are retried here as full root syncs; only fatal
    /// failures are returned.
    pub fn sync(&self, paths: Vec<PendingPath>) -> SyncwatchResult<SyncStats> {
        let _slot = self.gate.enter();
        let _running = RunningFlag::raise(&self.running);

        let mut stats = SyncStats::default();
        let mut requested = paths;

        loop {
            let normalized = normalize_paths_to_sync(&*self.fs, &self.options.root, &requested);
            if normalized.is_empty() {
                self.events.on_event(SyncEvent::sync_ended(&[], 0));
                return Ok(stats);
            }

            self.events.on_event(SyncEvent::sync_started(&normalized));
            let run = self.run_transfer(&normalized)?;
            stats.items_synced += run.items_synced;

            match ExitClass::from_code(run.exit_code) {
                ExitClass::Success => {
                    self.events
                        .on_event(SyncEvent::sync_ended(&normalized, stats.items_synced));
                    stats.paths = normalized;
                    return Ok(stats);
                }
                ExitClass::Recoverable(code) => {
                    if stats.retries >= self.options.max_retries {
                        return Err(self.fail(SyncwatchError::RetriesExhausted {
                            attempts: stats.retries,
                            code,
                        }));
                    }
                    self.events.on_event(SyncEvent::Warning {
                        message: format!(
                            "{} exited with code {} ({}) after {} item(s); retrying with a full sync",
                            self.options.rsync_path.display(),
                            code,
                            describe_exit_code(code),
                            run.items_synced
                        ),
                    });
                    stats.retries += 1;
                    requested = vec![PendingPath::Root];
                }
                ExitClass::Fatal(code) => {
                    return Err(self.fail(SyncwatchError::TransferFailed {
                        code,
                        message: describe_exit_code(code).to_string(),
                    }));
                }
                ExitClass::Killed => return Err(self.fail(SyncwatchError::TransferKilled)),
            }
        }
    }

    fn run_transfer(&self, paths: &[PendingPath]) -> SyncwatchResult<TransferRun> {
        let request = TransferRequest {
            program: self.options.rsync_path.clone(),
            args: build_transfer_args(&self.options),
            cwd: self.options.root.clone(),
            stdin: stdin_payload(paths),
        };

        let mut process = self.backend.spawn(&request).map_err(|e| {
            self.fail(SyncwatchError::Spawn {
                program: request.program.clone(),
                message: e.to_string(),
            })
        })?;

        let detailed = self.events.wants_detailed_events();
        let mut items_synced = 0;
        while let Some(line) = process.next_line() {
            match line {
                OutputLine::Stdout(text) => match parse_line(&text) {
                    TransferLine::Item { op, path } => {
                        items_synced += 1;
                        if detailed {
                            self.events.on_event(SyncEvent::TransferItem { op, path });
                        }
                    }
                    TransferLine::Advisory(message) => self.warn(message),
                },
                OutputLine::Stderr(text) => self.warn(text),
            }
        }

        let exit_code = process.wait().map_err(|e| {
            self.fail(SyncwatchError::Spawn {
                program: request.program.clone(),
                message: e.to_string(),
            })
        })?;

        Ok(TransferRun {
            items_synced,
            exit_code,
        })
    }

    fn warn(&self, message: String) {
        if !message.trim().is_empty() {
            self.events.on_event(SyncEvent::Warning { message });
        }
    }

    fn fail(&self, err: SyncwatchError) -> SyncwatchError {
        self.events.on_event(SyncEvent::Error {
            message: err.to_string(),
        });
        err
    }
}

impl std::fmt::Debug for SyncOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncOrchestrator")
            .field("options", &self.options)
            .field("backend", &self.backend.name())
            .field("running", &self.is_running())
            .finish()
    }
}
