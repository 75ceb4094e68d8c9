use std::time::Duration;

use super::count_down_latch::CountDownLatch;
use super::latch::Latch;
use super::latch_error::LatchError;
use super::wait_outcome::WaitOutcome;

/// A [`CountDownLatch`] whose count may also go back up.
///
/// Every tick, up or down, wakes the waiters so their tick callbacks see each
/// bounce. A count-up while somebody waits means one more count-down is needed
/// before they are released.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BouncingLatch {
  latch: CountDownLatch,
}

impl TryFrom<i64> for BouncingLatch {
  type Error = LatchError;

  fn try_from(count: i64) -> Result<Self, Self::Error> {
    Self::try_new(count)
  }
}

impl AsRef<CountDownLatch> for BouncingLatch {
  fn as_ref(&self) -> &CountDownLatch {
    &self.latch
  }
}

impl BouncingLatch {
  pub fn new(count: usize) -> Self {
    Self {
      latch: CountDownLatch::new(count),
    }
  }

  pub fn try_new(count: i64) -> Result<Self, LatchError> {
    CountDownLatch::try_new(count).map(|latch| Self { latch })
  }

  pub fn count_down(&self) {
    self.latch.count_down();
  }

  /// Increments the count and wakes every waiter.
  pub fn count_up(&self) {
    self.latch.count_up();
  }

  pub fn count(&self) -> usize {
    self.latch.count()
  }

  pub fn interrupt(&self) {
    self.latch.interrupt();
  }

  pub fn wait(&self) -> WaitOutcome {
    self.latch.wait()
  }

  pub fn wait_timeout(&self, timeout: Duration) -> WaitOutcome {
    self.latch.wait_timeout(timeout)
  }

  pub fn wait_with<F>(&self, timeout: Option<Duration>, on_tick: F) -> WaitOutcome
  where
    F: FnMut(usize), {
    self.latch.wait_with(timeout, on_tick)
  }

  /// The count-down half of this latch, for code that must not count up.
  pub fn as_count_down_latch(&self) -> &CountDownLatch {
    &self.latch
  }
}

impl Latch for BouncingLatch {
  fn count_down(&self) {
    self.latch.count_down();
  }

  fn count(&self) -> usize {
    self.latch.count()
  }

  fn wait_with(&self, timeout: Option<Duration>, on_tick: &mut dyn FnMut(usize)) -> WaitOutcome {
    self.latch.wait_with(timeout, on_tick)
  }
}
