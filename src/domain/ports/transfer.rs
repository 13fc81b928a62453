//! Transfer Backend Port
//!
//! The engine treats the transfer tool as an opaque capability: it hands over
//! an argument list and a stdin payload, reads output lines, and collects the
//! exit code. Tests plug in a fake that replays canned output.

use std::path::PathBuf;

/// Error starting or waiting on a transfer process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Executable missing
    NotFound(String),
    /// Executable present but not runnable
    PermissionDenied(String),
    /// Any other spawn or wait failure
    Io(String),
}

impl std::fmt::Display for TransferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "executable not found: {}", msg),
            Self::PermissionDenied(msg) => write!(f, "permission denied: {}", msg),
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for TransferError {}

impl From<std::io::Error> for TransferError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(err.to_string()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(err.to_string()),
            _ => Self::Io(err.to_string()),
        }
    }
}

/// One invocation of the transfer tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Executable to run
    pub program: PathBuf,
    /// Full argument list, source and destination included
    pub args: Vec<String>,
    /// Working directory (the watch root)
    pub cwd: PathBuf,
    /// Newline-separated path list written to stdin, then closed
    pub stdin: String,
}

/// A line of output, tagged with the stream it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// A running transfer process
///
/// Lines from one stream arrive in the order the process wrote them;
/// ordering between stdout and stderr is not guaranteed.
pub trait TransferProcess: Send {
    /// Next output line, or `None` once both streams are closed
    fn next_line(&mut self) -> Option<OutputLine>;

    /// Wait for exit. `Ok(None)` means the process was killed by a signal.
    fn wait(self: Box<Self>) -> Result<Option<i32>, TransferError>;
}

/// Starts transfer processes
pub trait TransferBackend: Send + Sync {
    /// Name of the backend (for logging)
    fn name(&self) -> &'static str;

    /// Spawn the process and feed it `request.stdin`
    fn spawn(&self, request: &TransferRequest) -> Result<Box<dyn TransferProcess>, TransferError>;
}
