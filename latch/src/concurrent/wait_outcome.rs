/// How a wait on a latch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaitOutcome {
  /// The waiter observed the count at zero.
  Released,
  /// The timeout elapsed before the count reached zero.
  TimedOut,
  /// The latch was interrupted while the waiter was blocked.
  Cancelled,
}

impl WaitOutcome {
  pub fn is_released(&self) -> bool {
    matches!(self, WaitOutcome::Released)
  }

  pub fn is_timed_out(&self) -> bool {
    matches!(self, WaitOutcome::TimedOut)
  }

  pub fn is_cancelled(&self) -> bool {
    matches!(self, WaitOutcome::Cancelled)
  }
}

impl From<WaitOutcome> for bool {
  fn from(outcome: WaitOutcome) -> Self {
    outcome.is_released()
  }
}

#[cfg(test)]
mod tests {
  use super::WaitOutcome;

  #[test]
  fn only_released_converts_to_true() {
    assert!(bool::from(WaitOutcome::Released));
    assert!(!bool::from(WaitOutcome::TimedOut));
    assert!(!bool::from(WaitOutcome::Cancelled));
  }
}
