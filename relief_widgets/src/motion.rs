// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear motion of a thumb between two positions.

/// Duration of animated state changes, in seconds.
pub const TRANSITION_DURATION: f64 = 0.2;

/// A linear interpolation from one value to another over a fixed duration.
///
/// Widgets store the thumb's offset from the center of its track in a
/// `ThumbMotion`. The host steps it with [`advance`](Self::advance); a
/// motion with zero duration is settled from the start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbMotion {
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
}

impl ThumbMotion {
    /// Creates a motion from `from` to `to` lasting `duration` seconds.
    ///
    /// Negative durations are treated as zero.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Creates a motion that rests at `value`.
    #[must_use]
    pub fn settled(value: f64) -> Self {
        Self::new(value, value, 0.0)
    }

    /// Start value.
    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    /// Target value.
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Total duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns whether the motion has reached its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            self.to
        } else {
            self.from + (self.to - self.from) * (self.elapsed / self.duration)
        }
    }

    /// Steps the motion by `dt` seconds and returns the new value.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    /// Starts a new motion from the current value toward `to`.
    pub fn retarget(&mut self, to: f64, duration: f64) {
        *self = Self::new(self.value(), to, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_linearly() {
        let mut m = ThumbMotion::new(-10.0, 10.0, TRANSITION_DURATION);
        assert_eq!(m.value(), -10.0);
        assert!(!m.is_finished(), "motion just started");
        assert!((m.advance(0.05) - -5.0).abs() < 1e-9, "quarter way");
        assert!((m.advance(0.05) - 0.0).abs() < 1e-9, "half way");
        assert_eq!(m.advance(1.0), 10.0, "overshooting dt clamps to the target");
        assert!(m.is_finished(), "motion reached its target");
    }

    #[test]
    fn zero_duration_is_settled() {
        let m = ThumbMotion::new(0.0, 5.0, 0.0);
        assert!(m.is_finished(), "zero duration finishes immediately");
        assert_eq!(m.value(), 5.0);
        assert_eq!(ThumbMotion::new(0.0, 5.0, -1.0).duration(), 0.0);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut m = ThumbMotion::new(0.0, 10.0, 0.2);
        m.advance(0.1);
        m.retarget(0.0, 0.2);
        assert!((m.from() - 5.0).abs() < 1e-9, "resumes mid-flight");
        assert_eq!(m.to(), 0.0);
        assert!(!m.is_finished(), "new motion is running");
    }

    #[test]
    fn negative_dt_does_not_rewind() {
        let mut m = ThumbMotion::new(0.0, 1.0, 1.0);
        m.advance(0.5);
        assert_eq!(m.advance(-0.25), 0.5);
    }
}
