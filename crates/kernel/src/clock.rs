//! Fixed-timestep frame pacing.

use std::time::{Duration, Instant};

/// A monotonic millisecond counter that can block the current thread.
pub trait TickSource {
    /// Milliseconds since an arbitrary fixed origin. Never decreases.
    fn ticks_ms(&self) -> u64;

    /// Block for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u64);
}

/// Wall-clock ticks backed by [`Instant`] and [`std::thread::sleep`].
#[derive(Debug, Clone, Copy)]
pub struct SystemTicks {
    origin: Instant,
}

impl SystemTicks {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for SystemTicks {
    fn ticks_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Simulated ticks: time only moves when slept on or advanced by hand.
///
/// Sleeping returns immediately, which makes headless runs deterministic.
#[derive(Debug, Clone, Default)]
pub struct VirtualTicks {
    now: u64,
    slept: Vec<u64>,
}

impl VirtualTicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate `ms` milliseconds of work.
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }

    /// Every sleep requested so far, in order.
    pub fn sleeps(&self) -> &[u64] {
        &self.slept
    }
}

impl TickSource for VirtualTicks {
    fn ticks_ms(&self) -> u64 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.slept.push(ms);
        self.now += ms;
    }
}

/// Holds each loop iteration close to a target duration by sleeping, and
/// reports how much time passed since the previous frame.
#[derive(Debug)]
pub struct FrameClock<T> {
    source: T,
    target_ms: u64,
    last_frame_start: u64,
}

impl<T: TickSource> FrameClock<T> {
    /// The first frame is measured from this call.
    pub fn new(source: T, target_ms: u64) -> Self {
        let last_frame_start = source.ticks_ms();
        Self {
            source,
            target_ms,
            last_frame_start,
        }
    }

    pub fn target_ms(&self) -> u64 {
        self.target_ms
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut T {
        &mut self.source
    }

    /// Wait out the rest of the frame and return the elapsed seconds.
    ///
    /// Sleeps only when the remaining time is in `(0, target]`, so a slow
    /// frame never sleeps and a clock anomaly never stalls the loop.
    pub fn tick(&mut self) -> f32 {
        let now = self.source.ticks_ms();
        let elapsed = now.saturating_sub(self.last_frame_start);
        let wait = self.target_ms as i64 - elapsed as i64;
        if wait > 0 && wait <= self.target_ms as i64 {
            self.source.sleep_ms(wait as u64);
        }

        let frame_start = self.source.ticks_ms();
        let delta_ms = frame_start.saturating_sub(self.last_frame_start);
        self.last_frame_start = frame_start;
        delta_ms as f32 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_frame_sleeps_full_target() {
        let mut clock = FrameClock::new(VirtualTicks::new(), 33);
        let dt = clock.tick();
        assert_eq!(clock.source().sleeps(), &[33]);
        assert!((dt - 0.033).abs() < 1e-6);
    }

    #[test]
    fn busy_frame_sleeps_remainder() {
        let mut clock = FrameClock::new(VirtualTicks::new(), 33);
        clock.source_mut().advance(20);
        let dt = clock.tick();
        assert_eq!(clock.source().sleeps(), &[13]);
        assert!((dt - 0.033).abs() < 1e-6);
    }

    #[test]
    fn slow_frame_does_not_sleep() {
        let mut clock = FrameClock::new(VirtualTicks::new(), 33);
        clock.source_mut().advance(50);
        let dt = clock.tick();
        assert!(clock.source().sleeps().is_empty());
        assert!((dt - 0.050).abs() < 1e-6);
    }

    #[test]
    fn never_sleeps_longer_than_target_and_delta_non_negative() {
        let mut clock = FrameClock::new(VirtualTicks::new(), 33);
        for work in [0, 1, 5, 32, 33, 34, 100, 0, 7] {
            clock.source_mut().advance(work);
            let dt = clock.tick();
            assert!(dt >= 0.0);
        }
        assert!(clock.source().sleeps().iter().all(|&s| s > 0 && s <= 33));
    }

    #[test]
    fn frames_are_paced_back_to_back() {
        let mut clock = FrameClock::new(VirtualTicks::new(), 33);
        for _ in 0..10 {
            clock.source_mut().advance(3);
            clock.tick();
        }
        assert_eq!(clock.source().ticks_ms(), 330);
    }

    #[test]
    fn zero_target_never_sleeps() {
        let mut clock = FrameClock::new(VirtualTicks::new(), 0);
        let dt = clock.tick();
        assert!(clock.source().sleeps().is_empty());
        assert_eq!(dt, 0.0);
    }

    #[test]
    fn system_ticks_are_monotonic() {
        let mut ticks = SystemTicks::new();
        let a = ticks.ticks_ms();
        ticks.sleep_ms(2);
        let b = ticks.ticks_ms();
        assert!(b >= a + 2);
    }
}
