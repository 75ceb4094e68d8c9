use std::time::Duration;

use super::wait_outcome::WaitOutcome;

/// Blocking latch capability shared by [`CountDownLatch`](super::CountDownLatch)
/// and [`BouncingLatch`](super::BouncingLatch).
pub trait Latch {
  /// Decrements the count if it is above zero and wakes every waiter.
  fn count_down(&self);

  fn count(&self) -> usize;

  /// Blocks until the count is zero, the timeout elapses or the latch is interrupted.
  ///
  /// `on_tick` runs after every wakeup with the count observed under the latch's
  /// lock. It must not call back into the same latch.
  fn wait_with(&self, timeout: Option<Duration>, on_tick: &mut dyn FnMut(usize)) -> WaitOutcome;

  fn wait(&self) -> WaitOutcome {
    self.wait_with(None, &mut |_: usize| {})
  }

  fn wait_timeout(&self, timeout: Duration) -> WaitOutcome {
    self.wait_with(Some(timeout), &mut |_: usize| {})
  }
}
