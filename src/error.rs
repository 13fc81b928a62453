//! Error types for syncwatch
//!
//! Uses `thiserror` for library errors. Recoverable transfer failures never
//! show up here; the orchestrator absorbs them and retries.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::IgnoreError;

/// Result type alias for syncwatch operations
pub type SyncwatchResult<T> = Result<T, SyncwatchError>;

/// Main error type for syncwatch operations
#[derive(Error, Debug)]
pub enum SyncwatchError {
    /// The transfer executable could not be started
    #[error("failed to start transfer process '{program}': {message}")]
    Spawn { program: PathBuf, message: String },

    /// The transfer process exited with a non-recoverable code
    #[error("transfer failed with exit code {code}: {message}")]
    TransferFailed { code: i32, message: String },

    /// The transfer process was terminated without an exit code
    #[error("transfer process was terminated by a signal")]
    TransferKilled,

    /// Recoverable failures kept happening
    #[error("transfer still failing after {attempts} full-sync retries (last exit code {code})")]
    RetriesExhausted { attempts: u32, code: i32 },

    /// Watch root does not exist or is not a directory
    #[error("source directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Ignore file could not be loaded
    #[error(transparent)]
    Ignore(#[from] IgnoreError),

    /// Filesystem watcher failure
    #[error("watcher error: {0}")]
    Watch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncwatchError {
    /// Exit code of the transfer process, if this error came from one
    pub fn transfer_exit_code(&self) -> Option<i32> {
        match self {
            Self::TransferFailed { code, .. } | Self::RetriesExhausted { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<notify::Error> for SyncwatchError {
    fn from(err: notify::Error) -> Self {
        Self::Watch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_transfer_failed() {
        let err = SyncwatchError::TransferFailed {
            code: 1,
            message: "Syntax or usage error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "transfer failed with exit code 1: Syntax or usage error"
        );
        assert_eq!(err.transfer_exit_code(), Some(1));
    }

    #[test]
    fn test_error_display_spawn() {
        let err = SyncwatchError::Spawn {
            program: PathBuf::from("/opt/bin/rsync"),
            message: "executable not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to start transfer process '/opt/bin/rsync': executable not found"
        );
        assert_eq!(err.transfer_exit_code(), None);
    }
}
