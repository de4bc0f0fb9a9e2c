//! Power curves (quadratic through quintic) and circular arcs.
//!
//! The in-out variants rescale `t` onto `[0, 2]` and switch halves at 1.
//! The out variants rebase `t` onto `[-1, 0]` before applying the power.

/// `t²`.
#[inline]
#[must_use]
pub fn in_quad(t: f64) -> f64 {
    t * t
}

/// `1 - (t - 1)²`.
#[inline]
#[must_use]
pub fn out_quad(t: f64) -> f64 {
    let t = t - 1.0;
    -t * t + 1.0
}

/// Quadratic in for the first half, quadratic out for the second.
#[inline]
#[must_use]
pub fn in_out_quad(t: f64) -> f64 {
    let t = t / 0.5;
    if t < 1.0 {
        return 0.5 * t * t;
    }
    let t = t - 1.0;
    -0.5 * (t * (t - 2.0) - 1.0)
}

/// `t³`.
#[inline]
#[must_use]
pub fn in_cubic(t: f64) -> f64 {
    t * t * t
}

/// `(t - 1)³ + 1`.
#[inline]
#[must_use]
pub fn out_cubic(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t + 1.0
}

/// Cubic in-out.
#[inline]
#[must_use]
pub fn in_out_cubic(t: f64) -> f64 {
    let t = t / 0.5;
    if t < 1.0 {
        return 0.5 * t * t * t;
    }
    let t = t - 2.0;
    0.5 * (t * t * t + 2.0)
}

/// `t⁴`.
#[inline]
#[must_use]
pub fn in_quart(t: f64) -> f64 {
    t * t * t * t
}

/// `1 - (t - 1)⁴`.
#[inline]
#[must_use]
pub fn out_quart(t: f64) -> f64 {
    let t = t - 1.0;
    -(t * t * t * t - 1.0)
}

/// Quartic in-out.
#[inline]
#[must_use]
pub fn in_out_quart(t: f64) -> f64 {
    let t = t / 0.5;
    if t < 1.0 {
        return 0.5 * t * t * t * t;
    }
    let t = t - 2.0;
    -0.5 * (t * t * t * t - 2.0)
}

/// `t⁵`.
#[inline]
#[must_use]
pub fn in_quint(t: f64) -> f64 {
    t * t * t * t * t
}

/// `(t - 1)⁵ + 1`.
#[inline]
#[must_use]
pub fn out_quint(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t * t * t + 1.0
}

/// Quintic in-out.
#[inline]
#[must_use]
pub fn in_out_quint(t: f64) -> f64 {
    let t = t / 0.5;
    if t < 1.0 {
        return 0.5 * t * t * t * t * t;
    }
    let t = t - 2.0;
    0.5 * (t * t * t * t * t + 2.0)
}

/// Quarter circle starting flat: `1 - sqrt(1 - t²)`.
///
/// NaN for `|t| > 1`.
#[inline]
#[must_use]
pub fn in_circ(t: f64) -> f64 {
    -((1.0 - t * t).sqrt() - 1.0)
}

/// Quarter circle ending flat: `sqrt(1 - (t - 1)²)`.
#[inline]
#[must_use]
pub fn out_circ(t: f64) -> f64 {
    let t = t - 1.0;
    (1.0 - t * t).sqrt()
}

/// Circular in-out.
#[inline]
#[must_use]
pub fn in_out_circ(t: f64) -> f64 {
    let t = t / 0.5;
    if t < 1.0 {
        return -0.5 * ((1.0 - t * t).sqrt() - 1.0);
    }
    let t = t - 2.0;
    0.5 * ((1.0 - t * t).sqrt() + 1.0)
}
