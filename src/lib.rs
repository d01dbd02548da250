//! pathlock - advisory file locks for cross-process mutual exclusion
//!
//! A small building block for tools that need "only one process may proceed
//! past this point", backed by the filesystem instead of a network service.
//!
//! # Overview
//!
//! - [`FileLock`] - a handle bound to an absolute path, owning one open
//!   descriptor. Provides non-blocking [`try_lock`](FileLock::try_lock),
//!   blocking [`lock`](FileLock::lock), [`unlock`](FileLock::unlock),
//!   [`destroy`](FileLock::destroy) and [`describe`](FileLock::describe).
//! - [`MustLock`] - an adapter whose `try_lock` reports contention as `false`.
//! - [`Locker`] / [`TryLocker`] - traits implemented by both, for code that
//!   should work with either flavour.
//! - [`LockError`] - every failure, with the OS error kept as its source.
//!
//! # Platform Support
//!
//! - **Unix**: BSD `flock(2)`; lock file created read-only with mode `0o600`
//! - **Windows**: `LockFileEx` / `UnlockFile`
//! - **Other targets**: [`FileLock::new`] fails with [`LockError::OpenFailed`]
//!
//! Locks are advisory and host-local. They protect nothing from processes that
//! do not take the lock, and offer no fairness, timeout or expiry.
//!
//! # Example
//!
//! ```rust,no_run
//! use pathlock::FileLock;
//!
//! # fn main() -> Result<(), pathlock::LockError> {
//! let lock = FileLock::new("/tmp/pathlock-demo.lock")?;
//! lock.lock()?;
//! // only one process runs this at a time
//! lock.unlock()?;
//! lock.destroy()?;
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod lock;

mod sys;

pub use error::LockError;
pub use lock::{FileLock, Locker, MustLock, TryLocker};

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
