//! Cubic curves that pull back past the start or overshoot the end.
//!
//! These are the only curves with a second parameter, the overshoot `s`.
//! Larger values pull further; `s = 0` removes the overshoot entirely.

/// Overshoot used when none is given (about 10% past the target).
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// Factor applied to the overshoot inside [`in_out_back`] so each half
/// overshoots by a comparable amount.
pub const INOUT_OVERSHOOT_SCALE: f64 = 1.525;

/// `t²((s + 1)t - s)`: backs up below 0 before heading to 1.
#[inline]
#[must_use]
pub fn in_back(t: f64, s: f64) -> f64 {
    t * t * ((s + 1.0) * t - s)
}

/// Overshoots past 1 and returns.
///
/// ```
/// use transition_curves::functions::{DEFAULT_OVERSHOOT, out_back};
///
/// assert!(out_back(0.9, DEFAULT_OVERSHOOT) > 1.0);
/// assert!(out_back(0.9, 0.0) <= 1.0);
/// ```
#[inline]
#[must_use]
pub fn out_back(t: f64, s: f64) -> f64 {
    let t = t - 1.0;
    t * t * ((s + 1.0) * t + s) + 1.0
}

/// Back in for the first half, back out for the second. The overshoot is
/// scaled by [`INOUT_OVERSHOOT_SCALE`].
#[inline]
#[must_use]
pub fn in_out_back(t: f64, s: f64) -> f64 {
    let t = t / 0.5;
    let s = s * INOUT_OVERSHOOT_SCALE;
    if t < 1.0 {
        return 0.5 * (t * t * ((s + 1.0) * t - s));
    }
    let t = t - 2.0;
    0.5 * (t * t * ((s + 1.0) * t + s) + 2.0)
}
