//! General-purpose curves that do not belong to a named family.

use std::f64::consts::PI;

/// Identity curve: `f(t) = t`.
#[inline]
#[must_use]
pub fn linear(t: f64) -> f64 {
    t
}

/// Quadratic ease-in, `t²`. Same output as [`in_quad`](super::in_quad).
#[inline]
#[must_use]
pub fn ease_in(t: f64) -> f64 {
    t * t
}

/// Quadratic ease-out, `t(2 - t)`.
#[inline]
#[must_use]
pub fn ease_out(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Quadratic ease-in-out, split at the midpoint.
#[inline]
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    if t <= 0.5 {
        2.0 * t * t
    } else {
        -2.0 * t * t + 4.0 * t - 1.0
    }
}

/// Cubic `t(3 - 2t)`.
///
/// Despite the name this is not related to the bounce family: it rises
/// past 1 (peaking at `1.125` for `t = 0.75`) and returns to exactly 1 at
/// `t = 1`. Kept under this name because existing animations depend on
/// its output.
#[inline]
#[must_use]
pub fn ease_out_bounce(t: f64) -> f64 {
    t * (3.0 - 2.0 * t)
}

/// Linear ramp with a decaying oscillation on top:
/// `(1 - t)·sin(6πt) + t`.
///
/// Meets 0 and 1 at the endpoints but dips below 0 and swings around the
/// ramp in between.
#[inline]
#[must_use]
pub fn spring(t: f64) -> f64 {
    (1.0 - t) * (6.0 * PI * t).sin() + t
}

/// Constant zero, regardless of input.
///
/// Used as a hold stage when chaining transitions (a delay before the
/// next curve starts), never for endpoint interpolation.
#[inline]
#[must_use]
pub fn flat(_t: f64) -> f64 {
    0.0
}
