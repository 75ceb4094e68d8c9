use std::time::Duration;

use async_trait::async_trait;

use super::async_count_down_latch::AsyncCountDownLatch;
use super::async_latch::AsyncLatch;
use super::latch_error::LatchError;
use super::wait_outcome::WaitOutcome;

/// The tokio counterpart of [`BouncingLatch`](super::BouncingLatch).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsyncBouncingLatch {
  latch: AsyncCountDownLatch,
}

impl TryFrom<i64> for AsyncBouncingLatch {
  type Error = LatchError;

  fn try_from(count: i64) -> Result<Self, Self::Error> {
    Self::try_new(count)
  }
}

impl AsRef<AsyncCountDownLatch> for AsyncBouncingLatch {
  fn as_ref(&self) -> &AsyncCountDownLatch {
    &self.latch
  }
}

impl AsyncBouncingLatch {
  pub fn new(count: usize) -> Self {
    Self {
      latch: AsyncCountDownLatch::new(count),
    }
  }

  pub fn try_new(count: i64) -> Result<Self, LatchError> {
    AsyncCountDownLatch::try_new(count).map(|latch| Self { latch })
  }

  pub async fn count_down(&self) {
    self.latch.count_down().await;
  }

  pub async fn count_up(&self) {
    self.latch.count_up().await;
  }

  pub async fn count(&self) -> usize {
    self.latch.count().await
  }

  pub async fn interrupt(&self) {
    self.latch.interrupt().await;
  }

  pub async fn wait(&self) -> WaitOutcome {
    self.latch.wait().await
  }

  pub async fn wait_timeout(&self, timeout: Duration) -> WaitOutcome {
    self.latch.wait_timeout(timeout).await
  }

  pub async fn wait_with<F>(&self, timeout: Option<Duration>, on_tick: F) -> WaitOutcome
  where
    F: FnMut(usize) + Send, {
    self.latch.wait_with(timeout, on_tick).await
  }

  pub fn as_count_down_latch(&self) -> &AsyncCountDownLatch {
    &self.latch
  }
}

#[async_trait]
impl AsyncLatch for AsyncBouncingLatch {
  async fn count_down(&self) {
    self.latch.count_down().await;
  }

  async fn count(&self) -> usize {
    self.latch.count().await
  }

  async fn wait_with(&self, timeout: Option<Duration>, on_tick: &mut (dyn FnMut(usize) + Send)) -> WaitOutcome {
    self.latch.wait_with(timeout, on_tick).await
  }
}
