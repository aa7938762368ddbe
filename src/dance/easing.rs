//! Timing curves for the slide between two positions.
//!
//! The animation alternates between an ease-in and an ease-out curve, one
//! per easing stage. Each curve keeps its CSS `cubic-bezier(...)` spelling
//! for the render output and the control points for evaluating it.

use serde::{Serialize, Serializer};

/// A CSS-style cubic bezier timing curve through (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingCurve {
    css: &'static str,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

const EASE_IN: TimingCurve = TimingCurve {
    css: "cubic-bezier(.87,.57,1,.68)",
    x1: 0.87,
    y1: 0.57,
    x2: 1.0,
    y2: 0.68,
};

const EASE_OUT: TimingCurve = TimingCurve {
    css: "cubic-bezier(0,.06,0,1.16)",
    x1: 0.0,
    y1: 0.06,
    x2: 0.0,
    y2: 1.16,
};

/// One curve per easing stage: ease in, ease out, ease in, ease out.
pub const TIMING_CURVES: [TimingCurve; 4] = [EASE_IN, EASE_OUT, EASE_IN, EASE_OUT];

impl TimingCurve {
    pub fn css(&self) -> &'static str {
        self.css
    }

    /// Eased progress for linear progress `t`.
    ///
    /// `t` is clamped to [0, 1]. The result may overshoot 1 for curves whose
    /// control points leave the unit square.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }

        // Newton-Raphson on x(s) = t, then sample y(s).
        let mut s = t;
        for _ in 0..8 {
            let x = bezier(s, self.x1, self.x2) - t;
            let dx = bezier_slope(s, self.x1, self.x2);
            if dx.abs() < 1e-6 {
                break;
            }
            s = (s - x / dx).clamp(0.0, 1.0);
        }

        // Newton stalls on flat stretches; finish with bisection.
        if (bezier(s, self.x1, self.x2) - t).abs() > 1e-4 {
            let (mut lo, mut hi) = (0.0f32, 1.0f32);
            for _ in 0..32 {
                s = (lo + hi) / 2.0;
                if bezier(s, self.x1, self.x2) < t {
                    lo = s;
                } else {
                    hi = s;
                }
            }
        }

        bezier(s, self.y1, self.y2)
    }
}

impl Serialize for TimingCurve {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.css)
    }
}

/// One coordinate of a cubic bezier with end points 0 and 1.
fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let oms = 1.0 - s;
    3.0 * oms * oms * s * p1 + 3.0 * oms * s * s * p2 + s * s * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let oms = 1.0 - s;
    3.0 * oms * oms * p1 + 6.0 * oms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_alternates() {
        assert_eq!(TIMING_CURVES[0], TIMING_CURVES[2]);
        assert_eq!(TIMING_CURVES[1], TIMING_CURVES[3]);
        assert_ne!(TIMING_CURVES[0], TIMING_CURVES[1]);
        assert_eq!(TIMING_CURVES[0].css(), "cubic-bezier(.87,.57,1,.68)");
        assert_eq!(TIMING_CURVES[1].css(), "cubic-bezier(0,.06,0,1.16)");
    }

    #[test]
    fn test_endpoints() {
        for curve in TIMING_CURVES {
            assert_eq!(curve.evaluate(0.0), 0.0);
            assert_eq!(curve.evaluate(1.0), 1.0);
            assert_eq!(curve.evaluate(-1.0), 0.0);
            assert_eq!(curve.evaluate(2.0), 1.0);
        }
    }

    #[test]
    fn test_curve_shapes() {
        // Ease out moves most of the way early, ease in lags behind linear.
        assert!(EASE_OUT.evaluate(0.25) > 0.5);
        assert!(EASE_IN.evaluate(0.25) < 0.25);
    }

    #[test]
    fn test_monotonic_sampling() {
        let mut last = 0.0;
        for step in 1..=20 {
            let value = EASE_IN.evaluate(step as f32 / 20.0);
            assert!(value >= last - 1e-4, "ease in went backwards at step {step}");
            last = value;
        }
    }

    #[test]
    fn test_serializes_as_css() {
        let json = serde_json::to_string(&EASE_OUT).unwrap();
        assert_eq!(json, "\"cubic-bezier(0,.06,0,1.16)\"");
    }
}
