//! Fuzzes curve evaluation and table lookup with arbitrary inputs.
//!
//! The first byte picks a curve, the next eight are read as the normalized
//! time and the following eight as an overshoot. Whatever remains is looked
//! up as a curve name. NaN, infinities and subnormals all reach the curve
//! functions unfiltered.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_curve_eval

#![deny(static_mut_refs)]
#![no_main]

use libfuzzer_sys::fuzz_target;
use transition_curves::{Curve, CurveCatalog, CurveLut};

fn read_f64(bytes: &[u8]) -> Option<f64> {
    let array: [u8; 8] = bytes.get(..8)?.try_into().ok()?;
    Some(f64::from_le_bytes(array))
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Some(curve) = Curve::ALL.get(usize::from(selector) % Curve::ALL.len()).copied() else {
        return;
    };
    let Some(t) = read_f64(rest) else {
        return;
    };
    let overshoot = rest.get(8..).and_then(read_f64);

    // Must never panic, whatever the input.
    let value = curve.evaluate_with(t, overshoot);

    if let Some(function) = CurveCatalog::global().lookup(curve.name()) {
        let via_catalog = function(t, overshoot);
        assert_eq!(value.to_bits(), via_catalog.to_bits());
    }

    if curve == Curve::Flat {
        assert_eq!(value.to_bits(), 0.0f64.to_bits());
    }

    let lut = CurveLut::from_curve(curve);
    let _ = lut.lookup(t);

    if let Some(name) = rest.get(16..).and_then(|bytes| std::str::from_utf8(bytes).ok()) {
        let known = name.parse::<Curve>().is_ok();
        match CurveCatalog::global().lookup(name) {
            Some(function) => {
                assert!(known);
                let _ = function(t, overshoot);
            }
            None => assert!(!known),
        }
    }
});
