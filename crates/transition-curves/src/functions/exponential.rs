//! Exponential curves built on `2^(10(t - 1))`.
//!
//! The general formulas miss their anchors by `2⁻¹⁰ ≈ 0.000977`, so each
//! curve pins the affected endpoint to an exact value first.

/// `2^(10(t - 1))`, with `in_expo(0) == 0` exactly.
#[inline]
#[must_use]
pub fn in_expo(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * (t - 1.0))
    }
}

/// `1 - 2^(-10t)`, with `out_expo(1) == 1` exactly.
#[inline]
#[must_use]
pub fn out_expo(t: f64) -> f64 {
    if t == 1.0 {
        1.0
    } else {
        -2f64.powf(-10.0 * t) + 1.0
    }
}

/// Exponential in-out. Both endpoints are pinned before the halves are
/// evaluated.
#[inline]
#[must_use]
pub fn in_out_expo(t: f64) -> f64 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let t = t / 0.5;
    if t < 1.0 {
        return 0.5 * 2f64.powf(10.0 * (t - 1.0));
    }
    let t = t - 1.0;
    0.5 * (-2f64.powf(-10.0 * t) + 2.0)
}
