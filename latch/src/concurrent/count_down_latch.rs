use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Condvar, LockResult, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use super::latch::Latch;
use super::latch_error::LatchError;
use super::latch_state::LatchState;
use super::wait_outcome::WaitOutcome;

/// A latch that blocks threads until its count has been counted down to zero.
///
/// Clones share the same counter, so a latch can be handed to as many threads as
/// needed without an extra `Arc`.
#[derive(Clone)]
pub struct CountDownLatch {
  inner: Arc<Inner>,
}

struct Inner {
  state: Mutex<LatchState>,
  condvar: Condvar,
}

impl Debug for CountDownLatch {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CountDownLatch").field("state", &self.inner.state).finish()
  }
}

impl Eq for CountDownLatch {}

impl PartialEq for CountDownLatch {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }
}

impl Default for CountDownLatch {
  fn default() -> Self {
    Self::new(0)
  }
}

impl TryFrom<i64> for CountDownLatch {
  type Error = LatchError;

  fn try_from(count: i64) -> Result<Self, Self::Error> {
    Self::try_new(count)
  }
}

impl CountDownLatch {
  pub fn new(count: usize) -> Self {
    Self {
      inner: Arc::new(Inner {
        state: Mutex::new(LatchState::new(count)),
        condvar: Condvar::new(),
      }),
    }
  }

  /// Creates a latch from a signed count, rejecting negative values.
  pub fn try_new(count: i64) -> Result<Self, LatchError> {
    Ok(Self::new(LatchError::check_count(count)?))
  }

  /// Decrements the count and wakes every waiter.
  ///
  /// Once the count is zero this leaves it at zero, but the waiters are still woken.
  pub fn count_down(&self) {
    let mut state = self.lock();
    state.count_down();
    tracing::trace!(count = state.count(), "CountDownLatch counted down");
    self.inner.condvar.notify_all();
  }

  pub(crate) fn count_up(&self) {
    let mut state = self.lock();
    state.count_up();
    tracing::trace!(count = state.count(), "CountDownLatch counted up");
    self.inner.condvar.notify_all();
  }

  pub fn count(&self) -> usize {
    self.lock().count()
  }

  /// Cancels every wait currently blocked on this latch.
  ///
  /// The count is left as it is, and waits that start afterwards block as usual.
  pub fn interrupt(&self) {
    let mut state = self.lock();
    state.interrupt();
    tracing::debug!(count = state.count(), "CountDownLatch interrupted");
    self.inner.condvar.notify_all();
  }

  pub fn wait(&self) -> WaitOutcome {
    self.wait_with(None, |_| {})
  }

  pub fn wait_timeout(&self, timeout: Duration) -> WaitOutcome {
    self.wait_with(Some(timeout), |_| {})
  }

  /// Blocks until the count is zero, the timeout elapses or the latch is interrupted.
  ///
  /// The timeout bounds the whole wait, not each wakeup. After every wakeup other
  /// than the deadline itself, `on_tick` runs with the current count while the lock
  /// is held, before the count is checked again. Calling back into the same latch
  /// from `on_tick` deadlocks.
  pub fn wait_with<F>(&self, timeout: Option<Duration>, mut on_tick: F) -> WaitOutcome
  where
    F: FnMut(usize), {
    let deadline = timeout.and_then(|timeout| Instant::now().checked_add(timeout));
    let mut state = self.lock();
    if state.is_released() {
      return WaitOutcome::Released;
    }
    let epoch = state.interrupt_epoch();
    loop {
      let (guard, timed_out) = self.block(state, deadline);
      state = guard;
      if state.is_interrupted_since(epoch) {
        tracing::debug!(count = state.count(), "CountDownLatch wait cancelled");
        return WaitOutcome::Cancelled;
      }
      if timed_out {
        if state.is_released() {
          return WaitOutcome::Released;
        }
        tracing::debug!(count = state.count(), ?timeout, "CountDownLatch wait timed out");
        return WaitOutcome::TimedOut;
      }
      on_tick(state.count());
      if state.is_released() {
        return WaitOutcome::Released;
      }
    }
  }

  fn block<'a>(
    &'a self,
    state: MutexGuard<'a, LatchState>,
    deadline: Option<Instant>,
  ) -> (MutexGuard<'a, LatchState>, bool) {
    match deadline {
      None => (recover(self.inner.condvar.wait(state)), false),
      Some(deadline) => {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
          return (state, true);
        }
        let (state, result) = recover(self.inner.condvar.wait_timeout(state, remaining));
        (state, result.timed_out())
      }
    }
  }

  fn lock(&self) -> MutexGuard<'_, LatchState> {
    recover(self.inner.state.lock())
  }
}

impl Latch for CountDownLatch {
  fn count_down(&self) {
    CountDownLatch::count_down(self);
  }

  fn count(&self) -> usize {
    CountDownLatch::count(self)
  }

  fn wait_with(&self, timeout: Option<Duration>, on_tick: &mut dyn FnMut(usize)) -> WaitOutcome {
    CountDownLatch::wait_with(self, timeout, on_tick)
  }
}

// A panicking tick callback poisons the lock, but never leaves a half-applied transition.
fn recover<T>(result: LockResult<T>) -> T {
  result.unwrap_or_else(|poisoned| poisoned.into_inner())
}
