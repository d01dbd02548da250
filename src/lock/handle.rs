//! The lock handle.

use super::{Locker, MustLock, TryLocker};
use crate::error::LockError;
use crate::sys;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A handle on an advisory, exclusive lock identified by an absolute path.
///
/// The lock file is opened (and created if absent) once, in [`FileLock::new`],
/// and that descriptor carries every subsequent lock call. File contents are
/// never read, written or truncated.
///
/// # Descriptor sharing
///
/// Lock ownership is attached to the open file description. Anything that
/// duplicates it (`File::try_clone`, `dup(2)`, or a forked child inheriting
/// the descriptor) shares the lock with this handle and silently defeats
/// exclusion. The descriptor is opened close-on-exec, so `exec`'d children do
/// not inherit it, but a plain `fork` does. Open a separate `FileLock` for each
/// logically distinct contender.
///
/// # Teardown
///
/// [`FileLock::destroy`] closes the descriptor and reports close errors.
/// Dropping the handle closes it too, discarding any error. Either way the OS
/// releases a lock that is still held.
#[derive(Debug)]
pub struct FileLock {
    path: PathBuf,
    file: File,
}

impl FileLock {
    /// Whether re-acquiring a lock this handle already holds succeeds on the
    /// current platform.
    ///
    /// `true` on Unix, where `flock` treats it as a no-op. `false` on Windows:
    /// [`FileLock::try_lock`] reports [`LockError::AlreadyLocked`] and
    /// [`FileLock::lock`] would wait on itself forever.
    pub const RELOCK_SUCCEEDS: bool = sys::RELOCK_SUCCEEDS;

    /// Opens a lock handle for `path`, creating the file if needed.
    ///
    /// On Unix the descriptor is read-only and a newly created file gets mode
    /// `0o600`. On Windows the file is opened read/write, because `std` only
    /// creates files with write access; a lock file carrying the read-only
    /// attribute therefore fails with [`LockError::OpenFailed`] there even
    /// though it works on Unix. Parent directories are not created.
    ///
    /// # Errors
    ///
    /// - [`LockError::InvalidArgument`] if `path` is empty or contains a NUL byte
    /// - [`LockError::NeedsAbsolutePath`] if `path` is relative
    /// - [`LockError::OpenFailed`] if the OS refuses to open or create the file
    pub fn new(path: impl AsRef<Path>) -> Result<Self, LockError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(LockError::InvalidArgument {
                reason: "path is empty",
            });
        }
        if path.as_os_str().as_encoded_bytes().contains(&0) {
            return Err(LockError::InvalidArgument {
                reason: "path contains a NUL byte",
            });
        }
        if !path.is_absolute() {
            return Err(LockError::NeedsAbsolutePath {
                path: path.to_path_buf(),
            });
        }

        let file = sys::open(path).map_err(|source| LockError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(lock = %path.display(), "Opened lock file");
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// The path this handle locks.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Short human-readable identity: the file name of the lock path.
    ///
    /// Falls back to the whole path when it has no final component. Intended
    /// for diagnostics only; the format is not stable.
    pub fn describe(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.display().to_string(),
        }
    }

    /// Attempts to take the lock without waiting.
    ///
    /// Returns `Ok(true)` once held. Never returns `Ok(false)`; contention is
    /// reported as [`LockError::AlreadyLocked`]. Use [`FileLock::must`] for a
    /// variant that turns contention into `Ok(false)`.
    ///
    /// # Errors
    ///
    /// - [`LockError::AlreadyLocked`] if another handle holds the lock
    /// - [`LockError::LockFailed`] for any other OS failure
    pub fn try_lock(&self) -> Result<bool, LockError> {
        match sys::try_lock(&self.file) {
            Ok(true) => {
                debug!(lock = %self.path.display(), "File lock acquired");
                Ok(true)
            }
            Ok(false) => {
                trace!(lock = %self.path.display(), "File lock is held elsewhere");
                Err(LockError::AlreadyLocked {
                    path: self.path.clone(),
                })
            }
            Err(source) => Err(LockError::LockFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Takes the lock, blocking the calling thread until it is available.
    ///
    /// There is no timeout. The wait ends when the lock is granted, when the OS
    /// reports an error, or when the process exits.
    ///
    /// # Errors
    ///
    /// [`LockError::LockFailed`] if the native call fails for a reason other
    /// than contention.
    pub fn lock(&self) -> Result<(), LockError> {
        debug!(lock = %self.path.display(), "Waiting for file lock");
        sys::lock(&self.file).map_err(|source| LockError::LockFailed {
            path: self.path.clone(),
            source,
        })?;
        debug!(lock = %self.path.display(), "File lock acquired");
        Ok(())
    }

    /// Releases the lock so another contender can take it.
    ///
    /// Calling this without holding the lock is a caller error. On Unix it is
    /// a silent no-op; on Windows it fails with [`LockError::UnlockFailed`].
    ///
    /// # Errors
    ///
    /// [`LockError::UnlockFailed`] if the OS rejects the release.
    pub fn unlock(&self) -> Result<(), LockError> {
        sys::unlock(&self.file).map_err(|source| LockError::UnlockFailed {
            path: self.path.clone(),
            source,
        })?;
        debug!(lock = %self.path.display(), "File lock released");
        Ok(())
    }

    /// Borrows this handle as a [`MustLock`], which reports contention as `Ok(false)`.
    pub fn must(&self) -> MustLock<'_> {
        MustLock::new(self)
    }

    /// Closes the descriptor, releasing the lock if it is still held.
    ///
    /// # Errors
    ///
    /// [`LockError::CloseFailed`] if the OS reports a failure closing the
    /// descriptor. The descriptor is released regardless.
    pub fn destroy(self) -> Result<(), LockError> {
        let Self { path, file } = self;
        sys::close(file).map_err(|source| LockError::CloseFailed {
            path: path.clone(),
            source,
        })?;
        debug!(lock = %path.display(), "Lock file closed");
        Ok(())
    }

    /// Takes the lock without stalling an async runtime.
    ///
    /// The blocking [`FileLock::lock`] call runs on tokio's blocking pool. The
    /// handle moves into that task and comes back once the lock is held.
    ///
    /// Dropping the returned future abandons the wait, but the blocking task
    /// still finishes its syscall. Once the lock frees up, that task acquires
    /// it, then drops the handle, which closes the descriptor and releases it
    /// again. During that short window another contender's
    /// [`FileLock::try_lock`] can still see [`LockError::AlreadyLocked`].
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// [`LockError::LockFailed`] if the native call fails or the blocking task
    /// cannot be joined. The handle is closed in both cases.
    pub async fn lock_async(self) -> Result<Self, LockError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || self.lock().map(|()| self))
            .await
            .map_err(|e| LockError::LockFailed {
                path,
                source: std::io::Error::other(e),
            })?
    }
}

impl fmt::Display for FileLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Locker for FileLock {
    fn lock(&self) -> Result<(), LockError> {
        FileLock::lock(self)
    }

    fn unlock(&self) -> Result<(), LockError> {
        FileLock::unlock(self)
    }
}

impl TryLocker for FileLock {
    fn try_lock(&self) -> Result<bool, LockError> {
        FileLock::try_lock(self)
    }
}
