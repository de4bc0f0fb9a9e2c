//! Bouncing-ball curves.
//!
//! [`out_bounce`] is the closed form; the other two are composed from it.

const BOUNCE_SCALE: f64 = 7.5625;
const BOUNCE_SPAN: f64 = 2.75;

/// Four parabolic arcs of decreasing height, landing on 1.
///
/// The arcs start at `0`, `1/2.75`, `2/2.75` and `2.5/2.75`; inside each
/// arc `t` is rebased on the arc's apex before squaring.
#[inline]
#[must_use]
pub fn out_bounce(t: f64) -> f64 {
    if t < 1.0 / BOUNCE_SPAN {
        BOUNCE_SCALE * t * t
    } else if t < 2.0 / BOUNCE_SPAN {
        let t = t - 1.5 / BOUNCE_SPAN;
        BOUNCE_SCALE * t * t + 0.75
    } else if t < 2.5 / BOUNCE_SPAN {
        let t = t - 2.25 / BOUNCE_SPAN;
        BOUNCE_SCALE * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_SPAN;
        BOUNCE_SCALE * t * t + 0.984375
    }
}

/// `1 - out_bounce(1 - t)`.
#[inline]
#[must_use]
pub fn in_bounce(t: f64) -> f64 {
    1.0 - out_bounce(1.0 - t)
}

/// Bounce in over the first half, bounce out over the second.
#[inline]
#[must_use]
pub fn in_out_bounce(t: f64) -> f64 {
    if t < 0.5 {
        return in_bounce(t * 2.0) * 0.5;
    }
    out_bounce(t * 2.0 - 1.0) * 0.5 + 0.5
}
