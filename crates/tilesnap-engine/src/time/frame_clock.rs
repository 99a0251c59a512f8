use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous tick.
    pub elapsed: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Driver-side frame clock.
///
/// Delta time is clamped so a stalled or backgrounded loop does not make the
/// camera jump on the next frame. The clamp lives here and only here: the
/// engine's update functions take whatever elapsed time they are given.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_MAX: Duration = Duration::from_millis(250);

    /// Creates a clock whose baseline is `start`.
    pub fn starting_at(start: Instant, dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self { last: start, frame_index: 0, dt_min, dt_max }
    }

    #[inline]
    pub fn clamp(&self, dt: Duration) -> Duration {
        dt.clamp(self.dt_min, self.dt_max)
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let raw = now.saturating_duration_since(self.last);
        let elapsed = self.clamp(raw);
        if elapsed != raw {
            log::trace!("frame {}: dt {:?} clamped to {:?}", self.frame_index, raw, elapsed);
        }

        self.last = now;

        let ft = FrameTime { elapsed, now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(start: Instant) -> FrameClock {
        FrameClock::starting_at(start, FrameClock::DEFAULT_MIN, FrameClock::DEFAULT_MAX)
    }

    #[test]
    fn regular_frames_pass_through() {
        let t0 = Instant::now();
        let mut c = clock(t0);
        let ft = c.tick_at(t0 + Duration::from_millis(16));
        assert_eq!(ft.elapsed, Duration::from_millis(16));
        assert_eq!(ft.frame_index, 0);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(32)).frame_index, 1);
    }

    #[test]
    fn long_stalls_are_clamped() {
        let t0 = Instant::now();
        let mut c = clock(t0);
        let ft = c.tick_at(t0 + Duration::from_secs(30));
        assert_eq!(ft.elapsed, FrameClock::DEFAULT_MAX);
    }

    #[test]
    fn zero_dt_is_raised_to_minimum() {
        let t0 = Instant::now();
        let mut c = clock(t0);
        assert_eq!(c.tick_at(t0).elapsed, FrameClock::DEFAULT_MIN);
    }
}
