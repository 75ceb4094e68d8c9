//! Count-down latches that can also bounce back up.
//!
//! A latch blocks its waiters until a shared counter reaches zero. The bouncing
//! variants may also count up again, which makes the waiters hold on for more
//! down-ticks. Every latch is available for OS threads ([`CountDownLatch`],
//! [`BouncingLatch`]) and for tokio tasks ([`AsyncCountDownLatch`],
//! [`AsyncBouncingLatch`]).

pub mod concurrent;

pub use concurrent::{
  AsyncBouncingLatch, AsyncCountDownLatch, AsyncLatch, BouncingLatch, CountDownLatch, Latch, LatchError, LatchState,
  WaitOutcome,
};

pub mod prelude {
  pub use super::{
    AsyncBouncingLatch, AsyncCountDownLatch, AsyncLatch, BouncingLatch, CountDownLatch, Latch, LatchError, WaitOutcome,
  };
}
