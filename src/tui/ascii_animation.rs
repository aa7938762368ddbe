//! Slide animation for the dancer's horizontal position.
//!
//! Each render frame names a target offset, a duration and a timing curve.
//! The slide is purely time-driven: call [`SlideAnimation::current_offset`]
//! on every TUI draw and it returns the eased offset for the elapsed
//! wall-clock time since the target last changed.

use std::time::{Duration, Instant};

use crate::dance::{RenderFrame, TimingCurve, TIMING_CURVES};

/// Eases the displayed offset towards the latest target.
pub struct SlideAnimation {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    curve: TimingCurve,
}

impl Default for SlideAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideAnimation {
    /// Create a slide resting at offset 0.
    pub fn new() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            start: Instant::now(),
            duration: Duration::ZERO,
            curve: TIMING_CURVES[0],
        }
    }

    /// Follow `frame`'s offset, starting a new slide if it moved.
    pub fn retarget(&mut self, frame: &RenderFrame) {
        self.retarget_at(frame, Instant::now());
    }

    pub fn retarget_at(&mut self, frame: &RenderFrame, now: Instant) {
        let target = frame.cumulative_offset as f32;
        if target == self.to {
            return;
        }
        self.from = self.offset_at(now);
        self.to = target;
        self.start = now;
        self.duration = frame.transition_duration;
        self.curve = frame.easing_curve;
    }

    /// Offset in pixels that should be displayed right now.
    pub fn current_offset(&self) -> f32 {
        self.offset_at(Instant::now())
    }

    pub fn offset_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.curve.evaluate(t)
    }
}
