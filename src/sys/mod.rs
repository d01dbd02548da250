//! Platform backends for the native advisory lock.
//!
//! Exactly one backend is compiled in, chosen by target family. Each exposes the
//! same set of functions operating on a [`std::fs::File`]:
//!
//! | function   | Unix (`flock(2)`)              | Windows (`LockFileEx`)        |
//! |------------|--------------------------------|-------------------------------|
//! | `open`     | read-only, `O_CREAT`, `0o600`  | read/write, no truncation     |
//! | `try_lock` | `LOCK_EX \| LOCK_NB`           | `LOCKFILE_FAIL_IMMEDIATELY`   |
//! | `lock`     | `LOCK_EX`, retried on `EINTR`  | blocking `LockFileEx`         |
//! | `unlock`   | `LOCK_UN` (no-op when unheld)  | `UnlockFile` (errors unheld)  |
//! | `close`    | `close(2)`, errors reported    | `CloseHandle` via drop        |
//!
//! Both native primitives attach the lock to the open file description (or
//! handle) rather than to the process, so two handles opened by the same
//! process still exclude each other.
//!
//! `try_lock` returns `Ok(false)` on contention; any `Err` is a real failure.

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub(crate) use unix::{RELOCK_SUCCEEDS, close, lock, open, try_lock, unlock};

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::{RELOCK_SUCCEEDS, close, lock, open, try_lock, unlock};

#[cfg(not(any(unix, windows)))]
mod unsupported;
#[cfg(not(any(unix, windows)))]
pub(crate) use unsupported::{RELOCK_SUCCEEDS, close, lock, open, try_lock, unlock};
