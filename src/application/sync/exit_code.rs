//! Transfer exit code classification

/// Exit codes worth a full resync: socket I/O (10), file I/O (11), protocol
/// data stream (12), partial transfer due to error (23), partial transfer due
/// to vanished source files (24).
pub const RECOVERABLE_EXIT_CODES: &[i32] = &[10, 11, 12, 23, 24];

/// How the orchestrator treats a finished transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitClass {
    /// Exit code 0
    Success,
    /// Retry with a full root sync
    Recoverable(i32),
    /// Surface to the caller
    Fatal(i32),
    /// Terminated by a signal, no exit code
    Killed,
}

impl ExitClass {
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => Self::Success,
            Some(code) if RECOVERABLE_EXIT_CODES.contains(&code) => Self::Recoverable(code),
            Some(code) => Self::Fatal(code),
            None => Self::Killed,
        }
    }
}

/// rsync's description of an exit code
pub fn describe_exit_code(code: i32) -> &'static str {
    match code {
        0 => "Success",
        1 => "Syntax or usage error",
        2 => "Protocol incompatibility",
        3 => "Errors selecting input/output files, dirs",
        4 => "Requested action not supported",
        5 => "Error starting client-server protocol",
        6 => "Daemon unable to append to log-file",
        10 => "Error in socket I/O",
        11 => "Error in file I/O",
        12 => "Error in rsync protocol data stream",
        13 => "Errors with program diagnostics",
        14 => "Error in IPC code",
        20 => "Received SIGUSR1 or SIGINT",
        21 => "Some error returned by waitpid()",
        22 => "Error allocating core memory buffers",
        23 => "Partial transfer due to error",
        24 => "Partial transfer due to vanished source files",
        25 => "The --max-delete limit stopped deletions",
        30 => "Timeout in data send/receive",
        35 => "Timeout waiting for daemon connection",
        127 => "Command not found",
        _ => "Unknown error",
    }
}
