//! Frame timing for drivers.
//!
//! One `FrameClock` per render loop; call `tick_at(Instant::now())` once per frame and feed
//! `FrameTime::elapsed` to `Camera::update`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
