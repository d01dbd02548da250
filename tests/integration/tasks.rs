//! Contention between tokio tasks.

use pathlock::test_utils::LockFixture;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Barrier;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_async_lock_exclusive_blocking() {
    let fixture = LockFixture::new().unwrap();
    let barrier = Arc::new(Barrier::new(2));

    let first = fixture.handle("exclusive_test.lock");
    let barrier1 = barrier.clone();

    // Task 1: Acquire lock and hold it
    let handle1 = tokio::spawn(async move {
        let lock = first.lock_async().await.unwrap();
        barrier1.wait().await; // Signal that lock is acquired
        tokio::time::sleep(Duration::from_millis(100)).await; // Hold lock
        lock.destroy().unwrap();
    });

    let second = fixture.handle("exclusive_test.lock");

    // Task 2: Try to acquire same lock (should wait)
    let handle2 = tokio::spawn(async move {
        barrier.wait().await; // Wait for first task to acquire lock
        let start = Instant::now();
        let lock = second.lock_async().await.unwrap();
        let elapsed = start.elapsed();

        // Should have waited for at least 50ms (less than 100ms due to timing)
        assert!(elapsed >= Duration::from_millis(50), "Acquired too early: {:?}", elapsed);
        lock.destroy().unwrap();
    });

    handle1.await.unwrap();
    handle2.await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_async_lock_different_paths_dont_block() {
    let fixture = LockFixture::new().unwrap();
    let barrier = Arc::new(Barrier::new(2));

    let first = fixture.handle("lock1.lock");
    let barrier1 = barrier.clone();

    // Task 1: Lock "lock1"
    let handle1 = tokio::spawn(async move {
        let _lock = first.lock_async().await.unwrap();
        barrier1.wait().await;
        tokio::time::sleep(Duration::from_millis(100)).await;
    });

    let second = fixture.handle("lock2.lock");

    // Task 2: Lock "lock2" (different path, shouldn't block)
    let handle2 = tokio::spawn(async move {
        barrier.wait().await;
        let start = Instant::now();
        let _lock = second.lock_async().await.unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(200),
            "Lock acquisition took {:?}, expected < 200ms for an uncontended path",
            elapsed
        );
    });

    handle1.await.unwrap();
    handle2.await.unwrap();
}

#[tokio::test]
async fn test_polling_with_must_from_task() {
    let fixture = LockFixture::new().unwrap();
    let holder = fixture.handle("poll.lock");
    let poller = fixture.handle("poll.lock");
    holder.lock().unwrap();

    let poll_task = tokio::spawn(async move {
        let mut attempts = 0u32;
        while !poller.must().try_lock().unwrap() {
            attempts += 1;
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        (attempts, poller)
    });

    tokio::time::sleep(Duration::from_millis(60)).await;
    holder.unlock().unwrap();

    let (attempts, poller) = tokio::time::timeout(Duration::from_secs(1), poll_task)
        .await
        .expect("Poller should acquire after release")
        .unwrap();
    assert!(attempts > 0, "Poller should have seen contention first");
    poller.unlock().unwrap();
}
