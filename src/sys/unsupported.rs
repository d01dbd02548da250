//! Fallback for targets without an advisory lock facility.

use std::fs::File;
use std::io;
use std::path::Path;

pub(crate) const RELOCK_SUCCEEDS: bool = false;

fn unsupported() -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        "advisory file locking is not supported on this platform",
    )
}

pub(crate) fn open(_path: &Path) -> io::Result<File> {
    Err(unsupported())
}

pub(crate) fn try_lock(_file: &File) -> io::Result<bool> {
    Err(unsupported())
}

pub(crate) fn lock(_file: &File) -> io::Result<()> {
    Err(unsupported())
}

pub(crate) fn unlock(_file: &File) -> io::Result<()> {
    Err(unsupported())
}

pub(crate) fn close(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}
