//! Prelude for the transition curves crate.
//!
//! ```
//! use transition_curves::prelude::*;
//!
//! let curve: Curve = "inOutQuad".parse()?;
//! assert_eq!(curve.evaluate(0.5), 0.5);
//! # Ok::<(), CurveError>(())
//! ```

pub use crate::catalog::CurveCatalog;
pub use crate::config::CurveConfig;
pub use crate::curve::{Curve, CurveFn};
pub use crate::error::CurveError;
pub use crate::functions::DEFAULT_OVERSHOOT;
pub use crate::lut::CurveLut;
