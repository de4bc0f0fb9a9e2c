//! Curve formulas as plain functions.
//!
//! Every function maps a normalized time `t` to an interpolation factor.
//! Inputs are not clamped: values outside `[0,1]` extrapolate along the
//! formula. None of these functions allocate, branch on shared state or
//! panic for finite input, so they can be called from any thread at frame
//! rate.
//!
//! Operation order inside each formula is fixed; results are reproducible
//! to the bit.
//!
//! # Example
//!
//! ```
//! use transition_curves::functions::{out_bounce, in_out_quad};
//!
//! assert_eq!(in_out_quad(0.5), 0.5);
//! assert!((out_bounce(0.2) - 0.3025).abs() < 1e-12);
//! ```

mod back;
mod basic;
mod bounce;
mod exponential;
mod periodic;
mod polynomial;

pub use back::{DEFAULT_OVERSHOOT, INOUT_OVERSHOOT_SCALE, in_back, in_out_back, out_back};
pub use basic::{ease_in, ease_in_out, ease_out, ease_out_bounce, flat, linear, spring};
pub use bounce::{in_bounce, in_out_bounce, out_bounce};
pub use exponential::{in_expo, in_out_expo, out_expo};
pub use periodic::{in_elastic, in_out_elastic, in_out_sine, in_sine, out_elastic, out_sine};
pub use polynomial::{
    in_circ, in_cubic, in_out_circ, in_out_cubic, in_out_quad, in_out_quart, in_out_quint,
    in_quad, in_quart, in_quint, out_circ, out_cubic, out_quad, out_quart, out_quint,
};
