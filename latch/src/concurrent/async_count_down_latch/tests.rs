use std::time::Duration;

use futures::future::join_all;
use tokio::join;
use tokio::sync::mpsc;

use super::*;

#[tokio::test]
async fn latch_reaches_zero() {
  let latch = AsyncCountDownLatch::new(2);
  let latch_clone = latch.clone();
  let wait_fut = latch.wait();
  let worker = async move {
    latch_clone.count_down().await;
    latch_clone.count_down().await;
  };

  let (_, outcome) = join!(worker, wait_fut);
  assert_eq!(outcome, WaitOutcome::Released);
  assert_eq!(latch.count().await, 0);
}

#[tokio::test]
async fn try_new_rejects_negative_count() {
  assert_eq!(
    AsyncCountDownLatch::try_new(-3).unwrap_err(),
    LatchError::NegativeCount { count: -3 }
  );
  assert_eq!(AsyncCountDownLatch::try_from(4_i64).unwrap().count().await, 4);
}

#[tokio::test]
async fn zero_count_does_not_wait() {
  let latch = AsyncCountDownLatch::default();
  assert_eq!(latch.wait_timeout(Duration::from_millis(10)).await, WaitOutcome::Released);
}

#[tokio::test]
async fn count_down_at_zero_stays_at_zero() {
  let latch = AsyncCountDownLatch::new(1);
  latch.count_down().await;
  latch.count_down().await;
  assert_eq!(latch.count().await, 0);
}

#[tokio::test]
async fn wait_timeout_gives_up_and_keeps_count() {
  let latch = AsyncCountDownLatch::new(1);
  assert_eq!(latch.wait_timeout(Duration::from_millis(10)).await, WaitOutcome::TimedOut);
  assert_eq!(latch.count().await, 1);

  latch.count_down().await;
  assert_eq!(latch.wait().await, WaitOutcome::Released);
}

#[tokio::test]
async fn on_tick_reports_every_count_down() {
  let latch = AsyncCountDownLatch::new(2);
  let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();

  let waiter = {
    let latch = latch.clone();
    tokio::spawn(async move {
      latch
        .wait_with(None, move |count| {
          let _ = tick_tx.send(count);
        })
        .await
    })
  };
  tokio::time::sleep(Duration::from_millis(20)).await;

  latch.count_down().await;
  assert_eq!(tick_rx.recv().await, Some(1));
  latch.count_down().await;
  assert_eq!(tick_rx.recv().await, Some(0));
  assert_eq!(waiter.await.unwrap(), WaitOutcome::Released);
}

#[tokio::test]
async fn multiple_waiters_are_all_released() {
  let latch = AsyncCountDownLatch::new(2);
  let waiters = (0..3)
    .map(|_| {
      let latch = latch.clone();
      tokio::spawn(async move { latch.wait().await })
    })
    .collect::<Vec<_>>();
  tokio::time::sleep(Duration::from_millis(20)).await;

  latch.count_down().await;
  latch.count_down().await;

  for outcome in join_all(waiters).await {
    assert_eq!(outcome.unwrap(), WaitOutcome::Released);
  }
}

#[tokio::test]
async fn interrupt_cancels_pending_waiters() {
  let latch = AsyncCountDownLatch::new(1);
  let waiter = {
    let latch = latch.clone();
    tokio::spawn(async move { latch.wait().await })
  };
  while !waiter.is_finished() {
    latch.interrupt().await;
    tokio::time::sleep(Duration::from_millis(5)).await;
  }

  assert_eq!(waiter.await.unwrap(), WaitOutcome::Cancelled);
  assert_eq!(latch.count().await, 1);
}

#[tokio::test]
async fn clones_compare_by_identity() {
  let latch = AsyncCountDownLatch::new(1);
  assert_eq!(latch, latch.clone());
  assert_ne!(latch, AsyncCountDownLatch::new(1));
  assert!(format!("{:?}", latch).contains("AsyncCountDownLatch"));
}
