/// The counter behind every latch, together with its interrupt epoch.
///
/// It is only ever touched under the owning latch's lock; each transition is a
/// single-step update, so the state stays consistent even when a waiter panics
/// while holding the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatchState {
  count: usize,
  interrupts: u64,
}

impl LatchState {
  pub fn new(count: usize) -> Self {
    Self { count, interrupts: 0 }
  }

  pub fn count(&self) -> usize {
    self.count
  }

  pub fn is_released(&self) -> bool {
    self.count == 0
  }

  /// Decrements the count, stopping at zero. Returns `true` if the count moved.
  pub fn count_down(&mut self) -> bool {
    if self.count > 0 {
      self.count -= 1;
      true
    } else {
      false
    }
  }

  pub fn count_up(&mut self) {
    self.count += 1;
  }

  /// Starts a new interrupt epoch; waiters that entered before it are cancelled.
  pub fn interrupt(&mut self) {
    self.interrupts = self.interrupts.wrapping_add(1);
  }

  pub fn interrupt_epoch(&self) -> u64 {
    self.interrupts
  }

  pub fn is_interrupted_since(&self, epoch: u64) -> bool {
    self.interrupts != epoch
  }
}

impl Default for LatchState {
  fn default() -> Self {
    Self::new(0)
  }
}
