//! Integration test suite for pathlock
//!
//! End-to-end behaviour of lock handles across threads, tokio tasks and
//! separate processes.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! RUST_LOG=pathlock=debug cargo test --test integration -- --nocapture
//! ```
//!
//! # Test Organization
//!
//! - **scenario**: the lock/contend/release/block walkthrough
//! - **tasks**: contention between tokio tasks
//! - **cross_process**: exclusion against a child process

mod tasks;
