use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatchError {
  #[error("latch count must not be negative: {count}")]
  NegativeCount { count: i64 },
}

impl LatchError {
  pub(crate) fn check_count(count: i64) -> Result<usize, LatchError> {
    usize::try_from(count).map_err(|_| LatchError::NegativeCount { count })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn check_count_accepts_zero_and_positive() {
    assert_eq!(LatchError::check_count(0), Ok(0));
    assert_eq!(LatchError::check_count(3), Ok(3));
  }

  #[test]
  fn check_count_rejects_negative() {
    let err = LatchError::check_count(-1).unwrap_err();
    assert_eq!(err, LatchError::NegativeCount { count: -1 });
    assert_eq!(err.to_string(), "latch count must not be negative: -1");
  }
}
