//! `flock(2)` backend for Unix-like systems.

use crate::constants::PRIVATE_FILE_MODE;
use fs4::fs_std::FileExt;
use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::IntoRawFd;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use tracing::trace;

/// `flock` on a descriptor that already holds the exclusive lock is a no-op.
pub(crate) const RELOCK_SUCCEEDS: bool = true;

pub(crate) fn open(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    // std rejects `create(true)` on a read-only open, so O_CREAT goes in as a raw flag.
    options.read(true).custom_flags(libc::O_CREAT).mode(PRIVATE_FILE_MODE);

    // flock is emulated with fcntl here, and an fcntl write lock needs a writable descriptor.
    #[cfg(any(target_os = "solaris", target_os = "illumos"))]
    options.write(true);

    options.open(path)
}

pub(crate) fn try_lock(file: &File) -> io::Result<bool> {
    FileExt::try_lock_exclusive(file)
}

pub(crate) fn lock(file: &File) -> io::Result<()> {
    loop {
        match FileExt::lock_exclusive(file) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                trace!("flock interrupted by signal, retrying");
            }
            result => return result,
        }
    }
}

pub(crate) fn unlock(file: &File) -> io::Result<()> {
    FileExt::unlock(file)
}

pub(crate) fn close(file: File) -> io::Result<()> {
    let fd = file.into_raw_fd();
    // SAFETY: `fd` was just released by `into_raw_fd`, nothing else owns it.
    if unsafe { libc::close(fd) } == 0 {
        return Ok(());
    }
    let err = io::Error::last_os_error();
    // The descriptor is gone even after EINTR; it must not be closed twice.
    if err.kind() == io::ErrorKind::Interrupted {
        Ok(())
    } else {
        Err(err)
    }
}
