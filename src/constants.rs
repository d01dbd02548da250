//! Constants shared by the lock backends.

/// Permission bits used when the lock file has to be created (owner read/write).
///
/// Only applied on Unix. An existing file keeps whatever mode it already has.
pub const PRIVATE_FILE_MODE: u32 = 0o600;
