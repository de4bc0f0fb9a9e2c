//! Property-based tests for curve evaluation.
//!
//! These tests verify mathematical properties that should hold across the
//! whole input range, not just at hand-picked points.

use quickcheck_macros::quickcheck;
use transition_curves::functions::{
    DEFAULT_OVERSHOOT, flat, in_back, in_bounce, in_out_back, in_out_bounce, in_out_cubic,
    in_out_quad, in_out_quart, in_out_quint, linear, out_back, out_bounce,
};
use transition_curves::{Curve, CurveCatalog};

const ENDPOINT_TOLERANCE: f64 = 1e-9;

fn sanitize_f64(v: f64) -> f64 {
    if v.is_nan() {
        0.5
    } else if v.is_infinite() {
        if v > 0.0 { 1.0 } else { 0.0 }
    } else {
        v
    }
}

fn unit(v: f64) -> f64 {
    sanitize_f64(v).clamp(0.0, 1.0)
}

#[quickcheck]
fn prop_linear_is_exact_identity(t: f64) -> bool {
    let t = sanitize_f64(t);
    linear(t).to_bits() == t.to_bits()
}

#[quickcheck]
fn prop_flat_is_zero_everywhere(t: f64) -> bool {
    flat(t) == 0.0 && Curve::Flat.evaluate(t) == 0.0
}

#[quickcheck]
fn prop_in_bounce_reflects_out_bounce(t: f64) -> bool {
    let t = unit(t);
    in_bounce(t).to_bits() == (1.0 - out_bounce(1.0 - t)).to_bits()
}

#[quickcheck]
fn prop_in_out_bounce_is_composed(t: f64) -> bool {
    let t = unit(t);
    let expected = if t < 0.5 {
        in_bounce(t * 2.0) * 0.5
    } else {
        out_bounce(t * 2.0 - 1.0) * 0.5 + 0.5
    };
    in_out_bounce(t).to_bits() == expected.to_bits()
}

#[quickcheck]
fn prop_evaluation_is_deterministic(t: f64) -> bool {
    let t = unit(t);
    Curve::ALL
        .into_iter()
        .all(|curve| curve.evaluate(t).to_bits() == curve.evaluate(t).to_bits())
}

#[quickcheck]
fn prop_catalog_agrees_with_enum(t: f64) -> bool {
    let t = unit(t);
    let catalog = CurveCatalog::global();
    Curve::ALL.into_iter().all(|curve| {
        catalog
            .lookup(curve.name())
            .is_some_and(|function| function(t, None).to_bits() == curve.evaluate(t).to_bits())
    })
}

#[quickcheck]
fn prop_curves_are_finite_on_unit_interval(t: f64) -> bool {
    let t = unit(t);
    Curve::ALL.into_iter().all(|curve| curve.evaluate(t).is_finite())
}

#[quickcheck]
fn prop_unknown_names_miss(name: String) -> bool {
    let known = name.parse::<Curve>().is_ok();
    CurveCatalog::global().lookup(&name).is_some() == known
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn monotonic_curves_never_decrease(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for curve in Curve::ALL.into_iter().filter(|c| c.is_monotonic()) {
                prop_assert!(
                    curve.evaluate(lo) <= curve.evaluate(hi) + 1e-12,
                    "{} decreased between {} and {}",
                    curve,
                    lo,
                    hi
                );
            }
        }

        #[test]
        fn power_in_out_first_half_is_scaled_in(t in 0.0f64..0.5) {
            let u = t * 2.0;
            prop_assert!((in_out_quad(t) - 0.5 * u.powi(2)).abs() < 1e-12);
            prop_assert!((in_out_cubic(t) - 0.5 * u.powi(3)).abs() < 1e-12);
            prop_assert!((in_out_quart(t) - 0.5 * u.powi(4)).abs() < 1e-12);
            prop_assert!((in_out_quint(t) - 0.5 * u.powi(5)).abs() < 1e-12);
        }

        #[test]
        fn in_out_curves_are_point_symmetric(t in 0.0f64..=1.0) {
            let symmetric = [
                Curve::InOutQuad,
                Curve::InOutCubic,
                Curve::InOutQuart,
                Curve::InOutQuint,
                Curve::InOutSine,
                Curve::InOutCirc,
                Curve::EaseInOut,
            ];
            for curve in symmetric {
                let sum = curve.evaluate(t) + curve.evaluate(1.0 - t);
                prop_assert!((sum - 1.0).abs() < 1e-9, "{} at {}: {}", curve, t, sum);
            }
        }

        #[test]
        fn back_curves_anchor_for_any_overshoot(s in 0.0f64..5.0) {
            prop_assert!(in_back(0.0, s).abs() < ENDPOINT_TOLERANCE);
            prop_assert!((in_back(1.0, s) - 1.0).abs() < ENDPOINT_TOLERANCE);
            prop_assert!(out_back(0.0, s).abs() < ENDPOINT_TOLERANCE);
            prop_assert!((out_back(1.0, s) - 1.0).abs() < ENDPOINT_TOLERANCE);
            prop_assert!(in_out_back(0.0, s).abs() < ENDPOINT_TOLERANCE);
            prop_assert!((in_out_back(1.0, s) - 1.0).abs() < ENDPOINT_TOLERANCE);
            prop_assert!((in_out_back(0.5, s) - 0.5).abs() < ENDPOINT_TOLERANCE);
        }

        #[test]
        fn out_back_overshoot_grows_with_s(t in 0.01f64..0.99, s in 0.0f64..5.0) {
            // out_back(t, s) - out_back(t, 0) = s·t·(t-1)²
            let base = out_back(t, 0.0);
            let tuned = out_back(t, s);
            prop_assert!(tuned >= base - 1e-12);
            prop_assert!(base <= 1.0 + 1e-12);
        }

        #[test]
        fn default_overshoot_matches_explicit(t in -0.5f64..1.5) {
            for curve in [Curve::InBack, Curve::OutBack, Curve::InOutBack] {
                prop_assert_eq!(
                    curve.evaluate(t).to_bits(),
                    curve.evaluate_with(t, Some(DEFAULT_OVERSHOOT)).to_bits()
                );
            }
        }

        #[test]
        fn polynomial_curves_extrapolate_without_clamping(t in 1.0f64..3.0) {
            prop_assert!((Curve::InCubic.evaluate(t) - t * t * t).abs() < 1e-9);
            prop_assert!((Curve::Linear.evaluate(-t) + t).abs() < 1e-12);
        }
    }
}
