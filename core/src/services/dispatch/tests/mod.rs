//! Unit tests for the main queue

use crate::services::dispatch::{MainQueue, QueueClosed};

#[tokio::test]
async fn test_jobs_run_in_order() {
    let queue = MainQueue::spawn(Vec::<u32>::new());
    for n in 0..10 {
        assert!(queue.post(move |log| log.push(n)));
    }
    let log = queue.call(|log| log.clone()).await.unwrap();
    assert_eq!(log, (0..10).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_call_returns_value() {
    let queue = MainQueue::spawn(40u32);
    let value = queue
        .call(|n| {
            *n += 2;
            *n
        })
        .await;
    assert_eq!(value, Ok(42));
}

#[tokio::test]
async fn test_panicking_job_closes_queue() {
    let queue = MainQueue::spawn(0u32);
    let result = queue.call(|_| -> u32 { panic!("job failed") }).await;
    assert_eq!(result, Err(QueueClosed));

    tokio::task::yield_now().await;
    assert_eq!(queue.call(|n| *n).await, Err(QueueClosed));
}

#[tokio::test]
async fn test_clones_share_state() {
    let queue = MainQueue::spawn(0u32);
    let other = queue.clone();
    other.post(|n| *n = 7);
    assert_eq!(queue.call(|n| *n).await, Ok(7));
}
