//! Stress test suite for pathlock
//!
//! Hammers a single lock path from many threads to surface exclusion bugs.
//! Slow compared to the integration suite and not run in CI.
//!
//! ```bash
//! cargo test --test stress -- --nocapture
//! ```
