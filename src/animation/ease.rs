use std::f64::consts::TAU;

use crate::foundation::error::{NightscrollError, NightscrollResult};

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// `t - sin(2πt) / 2π`: an S-curve with zero velocity at both ends.
    Sinusoidal,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
    Bezier(CubicBezier),
}

impl Ease {
    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self = Self::Bezier(CubicBezier::EASE_IN_OUT);
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::Bezier(CubicBezier::EASE_OUT);

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Sinusoidal => t - (t * TAU).sin() / TAU,
            Self::Bezier(curve) => curve.solve(t),
        }
    }

    /// Validate curve parameters (only bezier curves carry any).
    pub fn validate(self) -> NightscrollResult<()> {
        match self {
            Self::Bezier(curve) => curve.validate(),
            _ => Ok(()),
        }
    }
}

/// Cubic bezier timing curve anchored at `(0, 0)` and `(1, 1)`.
///
/// `x1` and `x2` must lie in `[0, 1]` so that `x(t)` is monotonic and invertible.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicBezier {
    /// First control point x.
    pub x1: f64,
    /// First control point y.
    pub y1: f64,
    /// Second control point x.
    pub x2: f64,
    /// Second control point y.
    pub y2: f64,
}

impl CubicBezier {
    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::new(0.0, 0.0, 0.58, 1.0);

    const NEWTON_ITERATIONS: usize = 8;
    const BISECT_ITERATIONS: usize = 48;
    const EPSILON: f64 = 1e-9;

    /// Build a curve from its two control points.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Reject control points that make `x(t)` non-invertible.
    pub fn validate(self) -> NightscrollResult<()> {
        let finite = [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(NightscrollError::animation(
                "cubic-bezier control points must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&self.x1) || !(0.0..=1.0).contains(&self.x2) {
            return Err(NightscrollError::animation(
                "cubic-bezier x control points must lie in [0, 1]",
            ));
        }
        Ok(())
    }

    /// Eased output for input `x` in `[0, 1]`.
    pub fn solve(self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.parameter_for_x(x);
        sample_axis(self.y1, self.y2, t)
    }

    fn parameter_for_x(self, x: f64) -> f64 {
        // Newton first; fall back to bisection when the slope flattens out.
        let mut t = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let err = sample_axis(self.x1, self.x2, t) - x;
            if err.abs() < Self::EPSILON {
                return t;
            }
            let slope = slope_axis(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
            if !(0.0..=1.0).contains(&t) {
                break;
            }
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        t = x;
        for _ in 0..Self::BISECT_ITERATIONS {
            let v = sample_axis(self.x1, self.x2, t);
            if (v - x).abs() < Self::EPSILON {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
        t
    }
}

// Polynomial form of one bezier axis with endpoints fixed at 0 and 1.
fn sample_axis(p1: f64, p2: f64, t: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn slope_axis(p1: f64, p2: f64, t: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
