//! Easing functions for animations
//!
//! Named smoothing functions live in a fixed registry so configuration UIs can
//! list them. A cubic bezier easing is described by its two inner control
//! points and solved numerically on every evaluation.

use std::f64::consts::PI;
use std::fmt;

/// Registered smoothing functions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Smoothing {
    Linear,
    Circle,
    Sigmoid,
    EaseOutElastic,
}

/// Name → smoothing table, fixed at compile time
static REGISTRY: [(&str, Smoothing); 4] = [
    ("linear", Smoothing::Linear),
    ("circle", Smoothing::Circle),
    ("sigmoid", Smoothing::Sigmoid),
    ("easeOutElastic", Smoothing::EaseOutElastic),
];

impl Smoothing {
    /// Look up a registered smoothing function by its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, smoothing)| *smoothing)
    }

    pub fn name(self) -> &'static str {
        match self {
            Smoothing::Linear => "linear",
            Smoothing::Circle => "circle",
            Smoothing::Sigmoid => "sigmoid",
            Smoothing::EaseOutElastic => "easeOutElastic",
        }
    }

    /// Apply the smoothing function to a progress value (0.0 to 1.0)
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Smoothing::Linear => x,
            Smoothing::Circle => (2.0 * x - x * x).sqrt(),
            Smoothing::Sigmoid => sigmoid(x),
            Smoothing::EaseOutElastic => ease_out_elastic(x),
        }
    }
}

/// Names of every registered smoothing function, for configuration UIs
pub fn available_smooth_functions() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// Easing applied to a progress value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Named(Smoothing),
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    pub const LINEAR: Easing = Easing::Named(Smoothing::Linear);
    pub const CIRCLE: Easing = Easing::Named(Smoothing::Circle);
    pub const SIGMOID: Easing = Easing::Named(Smoothing::Sigmoid);
    pub const EASE_OUT_ELASTIC: Easing = Easing::Named(Smoothing::EaseOutElastic);

    /// Apply the easing function to a progress value (0.0 to 1.0).
    ///
    /// Overshooting curves may return values outside `[0, 1]`.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Easing::Named(smoothing) => smoothing.apply(x),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(x, *x1, *y1, *x2, *y2),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::CIRCLE
    }
}

impl From<Smoothing> for Easing {
    fn from(smoothing: Smoothing) -> Self {
        Easing::Named(smoothing)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Named(smoothing) => f.write_str(smoothing.name()),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier {} {} {} {}", x1, y1, x2, y2)
            }
        }
    }
}

/// Logistic curve scaled so that it reaches exactly 1 at x = 1
fn sigmoid(x: f64) -> f64 {
    let max = 1.0 + (-6.0f64).exp();
    max / (1.0 + (-12.0 * x + 6.0).exp())
}

fn ease_out_elastic(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    if x == 1.0 {
        return 1.0;
    }

    let period = 0.6;
    let shift = period * 0.25;
    2.0f64.powf(-10.0 * x) * ((x - shift) * (2.0 * PI) / period).sin() + 1.0
}

const NEWTON_ITERATIONS: usize = 10;
const NEWTON_EPSILON: f64 = 1e-6;

/// Cubic bezier easing with endpoints (0, 0) and (1, 1).
///
/// Solves `bezier_x(t) == x` with Newton's method starting at `t = x`. There is
/// no fallback when the slope vanishes: degenerate control points can yield a
/// non-converged or NaN result.
fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier_sample(t, x1, x2) - x;
        let slope = bezier_slope(t, x1, x2);
        if err.abs() < NEWTON_EPSILON {
            break;
        }
        t -= err / slope;
    }

    bezier_sample(t, y1, y2)
}

/// Evaluate cubic bezier at parameter t: B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    // Horner form: ((1-3p2+3p1)t + 3p2-6p1)t + 3p1) * t
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

/// Derivative of cubic bezier: B'(t) = 3(1-t)²·p1 + 6(1-t)t·(p2-p1) + 3t²·(1-p2)
#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}
