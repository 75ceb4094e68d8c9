mod async_bouncing_latch;
mod async_count_down_latch;
mod async_latch;
mod bouncing_latch;
mod count_down_latch;
mod latch;
mod latch_error;
mod latch_state;
mod wait_outcome;

pub use self::{
  async_bouncing_latch::*, async_count_down_latch::*, async_latch::*, bouncing_latch::*, count_down_latch::*,
  latch::*, latch_error::*, latch_state::*, wait_outcome::*,
};
