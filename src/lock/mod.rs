//! Advisory file locks bound to an absolute path.
//!
//! A [`FileLock`] owns one open descriptor for the lifetime of the handle and
//! issues the platform's native lock calls on it. Any number of handles, from
//! this process or others, may refer to the same path; at most one of them is
//! in the held state at a time.
//!
//! # Example
//!
//! ```rust,no_run
//! use pathlock::{FileLock, LockError};
//!
//! # fn main() -> Result<(), LockError> {
//! let lock = FileLock::new("/var/run/my-tool.lock")?;
//!
//! match lock.try_lock() {
//!     Ok(_) => println!("acquired {lock}"),
//!     Err(e) if e.is_already_locked() => {
//!         println!("{lock} is busy, waiting");
//!         lock.lock()?;
//!     }
//!     Err(e) => return Err(e),
//! }
//!
//! // Critical section...
//!
//! lock.unlock()?;
//! lock.destroy()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Guarantees and their absence
//!
//! - Exclusion is only among cooperating callers; the file's bytes are not protected.
//! - No fairness: when several callers block in [`FileLock::lock`], the OS
//!   decides which one wins after a release.
//! - No timeout or cancellation. Poll [`FileLock::try_lock`] with your own
//!   backoff, or use [`FileLock::lock_async`] and drop the future to abandon.

mod handle;
mod must;

pub use handle::FileLock;
pub use must::MustLock;

use crate::error::LockError;


/// Blocking acquire and release.
pub trait Locker {
    /// Blocks until the lock is held.
    fn lock(&self) -> Result<(), LockError>;

    /// Releases a held lock.
    fn unlock(&self) -> Result<(), LockError>;
}

/// A [`Locker`] that can also attempt acquisition without waiting.
///
/// Implementations differ in how contention is reported: [`FileLock`] returns
/// [`LockError::AlreadyLocked`], [`MustLock`] returns `Ok(false)`.
pub trait TryLocker: Locker {
    /// Attempts to take the lock without blocking.
    fn try_lock(&self) -> Result<bool, LockError>;
}
