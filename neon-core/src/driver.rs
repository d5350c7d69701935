//! Reversing, eased animation driver
//!
//! The driver is a plain value: it remembers when it started and derives the
//! scalar for any instant from the elapsed time. Progress runs 0 -> 1 over one
//! duration and back 1 -> 0 over the next, forever, and is eased with a sine
//! ease-in-out before being mapped to the range of the animation type.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use crate::config::AnimationType;

/// Shortest duration the driver will divide by
const MIN_DURATION: Duration = Duration::from_millis(1);

/// Symmetric sine ease-in-out, `t` clamped to [0, 1]
pub fn ease_in_out_sine(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    -((PI * t).cos() - 1.0) / 2.0
}

/// Triangular progress for `elapsed`: rises over one duration, falls over the next
pub fn triangle_progress(elapsed: Duration, duration: Duration) -> f64 {
    let half = duration.max(MIN_DURATION).as_secs_f64();
    let phase = (elapsed.as_secs_f64() / half) % 2.0;
    if phase <= 1.0 {
        phase
    } else {
        2.0 - phase
    }
}

/// Interpolate so that t = 0 and t = 1 hit the bounds exactly
fn lerp(lo: f32, hi: f32, t: f32) -> f32 {
    (lo * (1.0 - t) + hi * t).clamp(lo, hi)
}

/// A running oscillation for one animated text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDriver {
    started_at: Instant,
    duration: Duration,
    animation_type: AnimationType,
    range: (f32, f32),
}

impl AnimationDriver {
    /// Start a driver at `now`. Static text gets no driver at all.
    pub fn start(animation_type: AnimationType, duration: Duration, now: Instant) -> Option<Self> {
        let range = animation_type.range()?;
        Some(Self {
            started_at: now,
            duration,
            animation_type,
            range,
        })
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn animation_type(&self) -> AnimationType {
        self.animation_type
    }

    /// Scalar after `elapsed` since start
    pub fn scalar_at(&self, elapsed: Duration) -> f32 {
        let eased = ease_in_out_sine(triangle_progress(elapsed, self.duration));
        let (lo, hi) = self.range;
        lerp(lo, hi, eased as f32)
    }

    /// Scalar at `now`; instants before the start count as the start
    pub fn scalar_now(&self, now: Instant) -> f32 {
        self.scalar_at(now.saturating_duration_since(self.started_at))
    }
}

/// Current scalar, 1.0 when there is no driver
pub fn animation_scalar(driver: Option<&AnimationDriver>, now: Instant) -> f32 {
    driver.map_or(1.0, |d| d.scalar_now(now))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(animation_type: AnimationType, secs: u64) -> AnimationDriver {
        AnimationDriver::start(animation_type, Duration::from_secs(secs), Instant::now())
            .expect("animated type starts a driver")
    }

    fn samples(secs: u64) -> impl Iterator<Item = Duration> {
        // 10ms steps across three full periods
        (0..=secs * 600).map(|i| Duration::from_millis(i * 10))
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out_sine(0.0), 0.0);
        assert_eq!(ease_in_out_sine(1.0), 1.0);
        assert!((ease_in_out_sine(0.5) - 0.5).abs() < 1e-12);
        assert_eq!(ease_in_out_sine(-3.0), 0.0);
        assert_eq!(ease_in_out_sine(7.0), 1.0);
    }

    #[test]
    fn test_ease_is_symmetric() {
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            let sum = ease_in_out_sine(t) + ease_in_out_sine(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_triangle_reverses() {
        let d = Duration::from_secs(2);
        assert_eq!(triangle_progress(Duration::ZERO, d), 0.0);
        assert!((triangle_progress(Duration::from_secs(1), d) - 0.5).abs() < 1e-12);
        assert_eq!(triangle_progress(Duration::from_secs(2), d), 1.0);
        assert!((triangle_progress(Duration::from_secs(3), d) - 0.5).abs() < 1e-12);
        assert_eq!(triangle_progress(Duration::from_secs(4), d), 0.0);
        assert_eq!(triangle_progress(Duration::from_secs(6), d), 1.0);
    }

    #[test]
    fn test_none_has_no_driver() {
        assert!(AnimationDriver::start(AnimationType::None, Duration::from_secs(2), Instant::now())
            .is_none());
        assert_eq!(animation_scalar(None, Instant::now()), 1.0);
    }

    #[test]
    fn test_glow_bounds_and_extremes() {
        let d = driver(AnimationType::Glow, 2);
        for elapsed in samples(2) {
            let s = d.scalar_at(elapsed);
            assert!((1.0..=1.2).contains(&s), "glow out of range: {s} at {elapsed:?}");
        }
        assert_eq!(d.scalar_at(Duration::ZERO), 1.0);
        assert_eq!(d.scalar_at(Duration::from_secs(2)), 1.2);
        assert_eq!(d.scalar_at(Duration::from_secs(4)), 1.0);
    }

    #[test]
    fn test_pulse_bounds_and_extremes() {
        let d = driver(AnimationType::Pulse, 3);
        for elapsed in samples(3) {
            let s = d.scalar_at(elapsed);
            assert!((0.8..=1.3).contains(&s), "pulse out of range: {s} at {elapsed:?}");
        }
        assert_eq!(d.scalar_at(Duration::ZERO), 0.8);
        assert_eq!(d.scalar_at(Duration::from_secs(3)), 1.3);
    }

    #[test]
    fn test_midpoint_of_half_cycle() {
        let d = driver(AnimationType::Pulse, 2);
        let s = d.scalar_at(Duration::from_secs(1));
        assert!((s - 1.05).abs() < 1e-5, "expected midpoint, got {s}");
    }

    #[test]
    fn test_scalar_now_at_start_is_lower_bound() {
        let now = Instant::now();
        let d = AnimationDriver::start(AnimationType::Glow, Duration::from_secs(2), now)
            .expect("glow starts a driver");
        assert_eq!(d.scalar_now(now), 1.0);
    }

    #[test]
    fn test_zero_duration_does_not_divide_by_zero() {
        let d = driver(AnimationType::Glow, 0);
        let s = d.scalar_at(Duration::from_millis(1500));
        assert!(s.is_finite());
        assert!((1.0..=1.2).contains(&s));
    }
}
