//! `LockFileEx` backend for Windows.

use fs4::fs_std::FileExt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// `LockFileEx` rejects a second exclusive lock on a region the same handle already holds.
pub(crate) const RELOCK_SUCCEEDS: bool = false;

pub(crate) fn open(path: &Path) -> io::Result<File> {
    // std only creates files when write access is requested. Share mode stays at
    // the std default (read | write | delete) so other handles can open the path.
    OpenOptions::new().read(true).write(true).create(true).truncate(false).open(path)
}

pub(crate) fn try_lock(file: &File) -> io::Result<bool> {
    FileExt::try_lock_exclusive(file)
}

pub(crate) fn lock(file: &File) -> io::Result<()> {
    FileExt::lock_exclusive(file)
}

pub(crate) fn unlock(file: &File) -> io::Result<()> {
    FileExt::unlock(file)
}

pub(crate) fn close(file: File) -> io::Result<()> {
    // std does not surface CloseHandle failures.
    drop(file);
    Ok(())
}
