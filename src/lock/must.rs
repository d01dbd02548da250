//! Contention-as-boolean adapter.

use super::{FileLock, Locker, TryLocker};
use crate::error::LockError;

/// A view of a [`FileLock`] whose `try_lock` reports contention as `Ok(false)`.
///
/// Useful for polling loops that only care whether the lock was taken. Real
/// OS failures are still returned as errors.
///
/// ```rust,no_run
/// use pathlock::FileLock;
///
/// # fn main() -> Result<(), pathlock::LockError> {
/// let lock = FileLock::new("/tmp/job.lock")?;
/// if lock.must().try_lock()? {
///     // run the job
///     lock.unlock()?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MustLock<'a> {
    inner: &'a FileLock,
}

impl<'a> MustLock<'a> {
    pub(super) fn new(inner: &'a FileLock) -> Self {
        Self { inner }
    }

    /// The wrapped handle.
    pub fn inner(&self) -> &'a FileLock {
        self.inner
    }

    /// Attempts to take the lock without waiting.
    ///
    /// # Errors
    ///
    /// [`LockError::LockFailed`] for OS failures other than contention.
    pub fn try_lock(&self) -> Result<bool, LockError> {
        contention_as_false(self.inner.try_lock())
    }

    /// Same as [`FileLock::lock`].
    pub fn lock(&self) -> Result<(), LockError> {
        self.inner.lock()
    }

    /// Same as [`FileLock::unlock`].
    pub fn unlock(&self) -> Result<(), LockError> {
        self.inner.unlock()
    }
}

/// Maps [`LockError::AlreadyLocked`] to `Ok(false)`, leaving every other outcome untouched.
fn contention_as_false(result: Result<bool, LockError>) -> Result<bool, LockError> {
    match result {
        Err(LockError::AlreadyLocked { .. }) => Ok(false),
        other => other,
    }
}

impl Locker for MustLock<'_> {
    fn lock(&self) -> Result<(), LockError> {
        MustLock::lock(self)
    }

    fn unlock(&self) -> Result<(), LockError> {
        MustLock::unlock(self)
    }
}

impl TryLocker for MustLock<'_> {
    fn try_lock(&self) -> Result<bool, LockError> {
        MustLock::try_lock(self)
    }
}
