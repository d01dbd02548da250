//! Test utilities for pathlock
//!
//! Helpers shared by the unit tests and the integration/stress suites. Enabled
//! for `cfg(test)` and, for the `tests/` suites, through the `test-utils`
//! feature.

use crate::FileLock;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Installs a `tracing-subscriber` fmt subscriber once per process. Uses the
/// provided level, or `RUST_LOG` when no level is given. Logs nothing when
/// neither is set.
///
/// ```bash
/// RUST_LOG=pathlock=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(true)
            .try_init();
    });
}

/// A temporary directory hosting lock files for one test.
///
/// The directory (and every lock file in it) is removed when the fixture is
/// dropped, so handles should be destroyed or dropped first.
pub struct LockFixture {
    temp_dir: TempDir,
}

impl LockFixture {
    /// Creates a fresh temporary directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Root of the fixture directory.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path for a lock file named `name`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Opens a new handle on the lock file named `name`.
    pub fn handle(&self, name: &str) -> FileLock {
        FileLock::new(self.path(name))
            .unwrap_or_else(|e| panic!("Failed to open test lock {name}: {e}"))
    }
}
