//! Frame timing for the animated and held-key demos.
//!
//! [`FrameClock`] is advanced once per frame. The room scene doesn't need it
//! (it only moves in discrete steps), but the fly camera and the modeller's
//! animation read delta and elapsed time from it.

use std::time::{Duration, Instant};

/// Delta time and total elapsed time, updated once per frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    startup: Instant,
    frame_start: Instant,
    delta: Duration,
    elapsed: Duration,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            startup: now,
            frame_start: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Call at the start of each frame.
    pub fn tick(&mut self) {
        self.advance_to(Instant::now());
    }

    /// Advance to an explicit instant. Instants earlier than the current
    /// frame count as zero delta.
    pub fn advance_to(&mut self, now: Instant) {
        self.delta = now.saturating_duration_since(self.frame_start);
        self.frame_start = self.frame_start.max(now);
        self.elapsed = self.frame_start - self.startup;
        self.frame_count += 1;
    }

    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Delta time in seconds (f32), the most common way to use it.
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Estimated FPS based on the last frame's delta.
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        clock.advance_to(t0 + Duration::from_millis(16));
        clock.advance_to(t0 + Duration::from_millis(40));
        assert_eq!(clock.delta(), Duration::from_millis(24));
        assert_eq!(clock.elapsed(), Duration::from_millis(40));
        assert_eq!(clock.frame_count(), 2);
        assert!((clock.fps() - 1000.0 / 24.0).abs() < 0.01);
    }

    #[test]
    fn going_backwards_is_zero_delta() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(t0);
        clock.advance_to(t0 - Duration::from_millis(5));
        assert_eq!(clock.delta(), Duration::ZERO);
        assert_eq!(clock.fps(), 0.0);
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }
}
