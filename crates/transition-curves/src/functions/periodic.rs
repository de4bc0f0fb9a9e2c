//! Trigonometric curves: sine arcs and damped elastic oscillation.

use std::f64::consts::{FRAC_PI_2, PI};

const ELASTIC_AMPLITUDE: f64 = 1.0;
const ELASTIC_PERIOD: f64 = 0.3;
const ELASTIC_INOUT_PERIOD: f64 = 0.3 * 1.5;

/// Phase offset that starts the oscillation at a zero crossing.
#[inline]
fn elastic_phase(period: f64) -> f64 {
    period / (2.0 * PI) * (1.0 / ELASTIC_AMPLITUDE).asin()
}

/// `1 - cos(t·π/2)`.
#[inline]
#[must_use]
pub fn in_sine(t: f64) -> f64 {
    -(t * FRAC_PI_2).cos() + 1.0
}

/// `sin(t·π/2)`.
#[inline]
#[must_use]
pub fn out_sine(t: f64) -> f64 {
    (t * FRAC_PI_2).sin()
}

/// `-(cos(πt) - 1) / 2`.
#[inline]
#[must_use]
pub fn in_out_sine(t: f64) -> f64 {
    -0.5 * ((PI * t).cos() - 1.0)
}

/// Oscillation that grows exponentially into the target.
///
/// Amplitude 1, period 0.3. Returns exactly 0 at `t = 0` and exactly 1 at
/// `t = 1`; the general formula would leave residue of order `2⁻¹⁰` there.
/// The curve dips below zero before it arrives, so it is not monotonic.
#[inline]
#[must_use]
pub fn in_elastic(t: f64) -> f64 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let s = elastic_phase(ELASTIC_PERIOD);
    let t = t - 1.0;
    -(ELASTIC_AMPLITUDE * 2f64.powf(10.0 * t) * ((t - s) * (2.0 * PI) / ELASTIC_PERIOD).sin())
}

/// Overshoots the target and settles with a decaying oscillation.
///
/// Mirror image of [`in_elastic`], with the same boundary handling.
#[inline]
#[must_use]
pub fn out_elastic(t: f64) -> f64 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let s = elastic_phase(ELASTIC_PERIOD);
    ELASTIC_AMPLITUDE * 2f64.powf(-10.0 * t) * ((t - s) * (2.0 * PI) / ELASTIC_PERIOD).sin() + 1.0
}

/// Elastic in for the first half, elastic out for the second, with the
/// period stretched to 0.45.
#[inline]
#[must_use]
pub fn in_out_elastic(t: f64) -> f64 {
    if t == 0.0 {
        return 0.0;
    }
    let t = t / 0.5;
    if t == 2.0 {
        return 1.0;
    }
    let p = ELASTIC_INOUT_PERIOD;
    let s = elastic_phase(p);
    if t < 1.0 {
        let t = t - 1.0;
        return -0.5 * (ELASTIC_AMPLITUDE * 2f64.powf(10.0 * t) * ((t - s) * (2.0 * PI) / p).sin());
    }
    let t = t - 1.0;
    ELASTIC_AMPLITUDE * 2f64.powf(-10.0 * t) * ((t - s) * (2.0 * PI) / p).sin() * 0.5 + 1.0
}
