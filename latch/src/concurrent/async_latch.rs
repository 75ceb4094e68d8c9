use std::time::Duration;

use async_trait::async_trait;

use super::wait_outcome::WaitOutcome;

/// Async latch capability shared by [`AsyncCountDownLatch`](super::AsyncCountDownLatch)
/// and [`AsyncBouncingLatch`](super::AsyncBouncingLatch).
#[async_trait]
pub trait AsyncLatch: Send + Sync {
  async fn count_down(&self);

  async fn count(&self) -> usize;

  /// Waits until the count is zero, the timeout elapses or the latch is interrupted.
  async fn wait_with(&self, timeout: Option<Duration>, on_tick: &mut (dyn FnMut(usize) + Send)) -> WaitOutcome;

  async fn wait(&self) -> WaitOutcome {
    self.wait_with(None, &mut |_: usize| {}).await
  }

  async fn wait_timeout(&self, timeout: Duration) -> WaitOutcome {
    self.wait_with(Some(timeout), &mut |_: usize| {}).await
  }
}
