//! Error types for file lock operations.
//!
//! Every failure of the OS keeps its [`std::io::Error`] as the error source so
//! callers can inspect the raw errno / Win32 code. [`LockError::AlreadyLocked`]
//! is the only variant that signals ordinary contention; everything else is
//! either a caller bug (bad path) or an unexpected OS failure.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error returned by [`FileLock`](crate::FileLock) operations.
#[derive(Debug, Error)]
pub enum LockError {
    /// The path is malformed (empty, or contains a NUL byte).
    #[error("invalid lock path: {reason}")]
    InvalidArgument {
        /// What was wrong with the path
        reason: &'static str,
    },

    /// A relative path was supplied.
    #[error("lock path must be absolute: {}", path.display())]
    NeedsAbsolutePath {
        /// The rejected path
        path: PathBuf,
    },

    /// The lock file could not be opened or created.
    #[error("failed to open lock file {}: {source}", path.display())]
    OpenFailed {
        /// Path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Another handle holds the lock. Recoverable: poll again or block in `lock`.
    #[error("lock is already held: {}", path.display())]
    AlreadyLocked {
        /// Path to the lock file
        path: PathBuf,
    },

    /// The native lock call failed for a reason other than contention.
    #[error("failed to lock {}: {source}", path.display())]
    LockFailed {
        /// Path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The native unlock call failed.
    #[error("failed to unlock {}: {source}", path.display())]
    UnlockFailed {
        /// Path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Closing the descriptor failed.
    #[error("failed to close lock file {}: {source}", path.display())]
    CloseFailed {
        /// Path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl LockError {
    /// Returns `true` for the contention signal produced by `try_lock`.
    pub fn is_already_locked(&self) -> bool {
        matches!(self, LockError::AlreadyLocked { .. })
    }

    /// The lock path involved, if the error carries one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LockError::InvalidArgument { .. } => None,
            LockError::NeedsAbsolutePath { path }
            | LockError::OpenFailed { path, .. }
            | LockError::AlreadyLocked { path }
            | LockError::LockFailed { path, .. }
            | LockError::UnlockFailed { path, .. }
            | LockError::CloseFailed { path, .. } => Some(path),
        }
    }
}
