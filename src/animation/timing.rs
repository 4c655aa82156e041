//! Timing functions (easing curves) for animated scrolling.
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow
//! - [`TimingFunction::EaseInOut`] - Slow start and end, fast middle
//! - [`TimingFunction::CubicBezier`] - CSS-style cubic bezier curve
//! - [`TimingFunction::Custom`] - User-defined function

use std::sync::Arc;

/// Timing function that controls the animation curve
#[derive(Clone, Default)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    #[default]
    Linear,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// Custom timing function
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Map linear progress `t` in `[0, 1]` to eased progress
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseOut => t * (2.0 - t),
            TimingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                let curve_t = solve_bezier_x(t, *x1, *x2);
                bezier(curve_t, *y1, *y2)
            }
            TimingFunction::Custom(f) => f(t),
        }
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::EaseOut => write!(f, "EaseOut"),
            TimingFunction::EaseInOut => write!(f, "EaseInOut"),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// One coordinate of a cubic bezier with endpoints at 0 and 1
fn bezier(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

fn bezier_slope(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Newton-Raphson for the curve parameter whose x equals `x`
fn solve_bezier_x(x: f32, x1: f32, x2: f32) -> f32 {
    let mut t = x;
    for _ in 0..8 {
        let slope = bezier_slope(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= (bezier(t, x1, x2) - x) / slope;
    }
    t.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for timing in [
            TimingFunction::Linear,
            TimingFunction::EaseOut,
            TimingFunction::EaseInOut,
            TimingFunction::CubicBezier(0.25, 0.1, 0.25, 1.0),
        ] {
            assert!(timing.evaluate(0.0).abs() < 1e-4, "{:?} at 0", timing);
            assert!((timing.evaluate(1.0) - 1.0).abs() < 1e-4, "{:?} at 1", timing);
        }
    }

    #[test]
    fn test_ease_out() {
        assert!(TimingFunction::EaseOut.evaluate(0.5) > 0.5);
    }

    #[test]
    fn test_input_clamped() {
        assert_eq!(TimingFunction::Linear.evaluate(2.0), 1.0);
        assert_eq!(TimingFunction::Linear.evaluate(-1.0), 0.0);
    }
}
