//! Fuzzes `CurveConfig` deserialization from arbitrary JSON text.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_curve_config

#![deny(static_mut_refs)]
#![no_main]

use libfuzzer_sys::fuzz_target;
use transition_curves::CurveConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Must never panic on arbitrary input.
    if let Ok(config) = serde_json::from_str::<CurveConfig>(text)
        && config.validate().is_ok()
    {
        let _ = config.evaluate(0.5);
    }
});
