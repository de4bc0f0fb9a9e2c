//! Transition Curves
//!
//! A catalog of named easing curves that map normalized animation progress
//! `t` to an interpolation factor. Applying the factor to real values
//! (`start + factor * (end - start)`), scheduling and timing are left to
//! the caller.
//!
//! # Overview
//!
//! The crate exposes the same curve set three ways:
//! - **[`functions`]**: one plain `f64 -> f64` function per curve
//! - **[`Curve`]**: an enum tag per curve, serializable by catalog name
//! - **[`CurveCatalog`]**: a registry from catalog name to [`CurveFn`]
//!
//! Supporting types:
//! - **[`CurveConfig`]**: a curve choice as written in configuration files
//! - **[`CurveLut`]**: a pre-sampled table of a curve
//!
//! # Conventions
//!
//! - Inputs are not clamped. Values outside `[0,1]` extrapolate.
//! - Most curves satisfy `f(0) = 0` and `f(1) = 1`; `flat` does not, and
//!   several curves leave `[0,1]` between the endpoints.
//! - Evaluation is stateless, allocation-free and never fails for finite
//!   input. Behavior for NaN or infinite input is unspecified.
//!
//! # Example
//!
//! ```
//! use transition_curves::{Curve, CurveCatalog};
//!
//! // By name, as an animation definition would supply it
//! let ease = CurveCatalog::global().lookup_or_linear("inOutCubic");
//! let (start, end) = (10.0, 50.0);
//! let value = start + ease(0.5, None) * (end - start);
//! assert!((value - 30.0).abs() < 1e-9);
//!
//! // By tag
//! assert!(Curve::OutBack.evaluate(0.9) > 1.0);
//! assert!(Curve::OutBack.evaluate_with(0.9, Some(0.0)) <= 1.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod config;
pub mod curve;
pub mod error;
pub mod functions;
pub mod lut;
pub mod prelude;

pub use catalog::{CurveCatalog, lookup};
pub use config::CurveConfig;
pub use curve::{Curve, CurveFn};
pub use error::CurveError;
pub use functions::DEFAULT_OVERSHOOT;
pub use lut::CurveLut;
