use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio_condvar::Condvar;

use super::async_latch::AsyncLatch;
use super::latch_error::LatchError;
use super::latch_state::LatchState;
use super::wait_outcome::WaitOutcome;

/// The tokio counterpart of [`CountDownLatch`](super::CountDownLatch).
#[derive(Clone)]
pub struct AsyncCountDownLatch {
  inner: Arc<Inner>,
}

struct Inner {
  state: Mutex<LatchState>,
  condvar: Condvar,
}

impl Debug for AsyncCountDownLatch {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AsyncCountDownLatch")
      .field("state", &self.inner.state)
      .finish()
  }
}

impl Eq for AsyncCountDownLatch {}

impl PartialEq for AsyncCountDownLatch {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }
}

impl Default for AsyncCountDownLatch {
  fn default() -> Self {
    Self::new(0)
  }
}

impl TryFrom<i64> for AsyncCountDownLatch {
  type Error = LatchError;

  fn try_from(count: i64) -> Result<Self, Self::Error> {
    Self::try_new(count)
  }
}

impl AsyncCountDownLatch {
  pub fn new(count: usize) -> Self {
    Self {
      inner: Arc::new(Inner {
        state: Mutex::new(LatchState::new(count)),
        condvar: Condvar::new(),
      }),
    }
  }

  pub fn try_new(count: i64) -> Result<Self, LatchError> {
    Ok(Self::new(LatchError::check_count(count)?))
  }

  pub async fn count_down(&self) {
    let mut state = self.inner.state.lock().await;
    state.count_down();
    tracing::trace!(count = state.count(), "AsyncCountDownLatch counted down");
    self.inner.condvar.notify_all();
  }

  pub(crate) async fn count_up(&self) {
    let mut state = self.inner.state.lock().await;
    state.count_up();
    tracing::trace!(count = state.count(), "AsyncCountDownLatch counted up");
    self.inner.condvar.notify_all();
  }

  pub async fn count(&self) -> usize {
    self.inner.state.lock().await.count()
  }

  /// Cancels every wait currently pending on this latch; the count is untouched.
  pub async fn interrupt(&self) {
    let mut state = self.inner.state.lock().await;
    state.interrupt();
    tracing::debug!(count = state.count(), "AsyncCountDownLatch interrupted");
    self.inner.condvar.notify_all();
  }

  pub async fn wait(&self) -> WaitOutcome {
    self.wait_with(None, |_| {}).await
  }

  pub async fn wait_timeout(&self, timeout: Duration) -> WaitOutcome {
    self.wait_with(Some(timeout), |_| {}).await
  }

  /// Waits until the count is zero, the timeout elapses or the latch is interrupted.
  ///
  /// Dropping the returned future abandons the wait without touching the count.
  pub async fn wait_with<F>(&self, timeout: Option<Duration>, mut on_tick: F) -> WaitOutcome
  where
    F: FnMut(usize) + Send, {
    let waiting = self.wait_until_released(&mut on_tick);
    match timeout {
      None => waiting.await,
      Some(timeout) => match tokio::time::timeout(timeout, waiting).await {
        Ok(outcome) => outcome,
        Err(_) => {
          tracing::debug!(?timeout, "AsyncCountDownLatch wait timed out");
          WaitOutcome::TimedOut
        }
      },
    }
  }

  async fn wait_until_released<F>(&self, on_tick: &mut F) -> WaitOutcome
  where
    F: FnMut(usize) + Send, {
    let mut state = self.inner.state.lock().await;
    if state.is_released() {
      return WaitOutcome::Released;
    }
    let epoch = state.interrupt_epoch();
    loop {
      state = self.inner.condvar.wait(state).await;
      if state.is_interrupted_since(epoch) {
        tracing::debug!(count = state.count(), "AsyncCountDownLatch wait cancelled");
        return WaitOutcome::Cancelled;
      }
      on_tick(state.count());
      if state.is_released() {
        return WaitOutcome::Released;
      }
    }
  }
}

#[async_trait]
impl AsyncLatch for AsyncCountDownLatch {
  async fn count_down(&self) {
    AsyncCountDownLatch::count_down(self).await;
  }

  async fn count(&self) -> usize {
    AsyncCountDownLatch::count(self).await
  }

  async fn wait_with(&self, timeout: Option<Duration>, on_tick: &mut (dyn FnMut(usize) + Send)) -> WaitOutcome {
    AsyncCountDownLatch::wait_with(self, timeout, on_tick).await
  }
}

#[cfg(test)]
mod tests;
