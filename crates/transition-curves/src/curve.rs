//! The named curve set as an enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::functions as f;

/// Signature shared by every curve: normalized time plus an optional
/// overshoot, which only the back curves read.
pub type CurveFn = fn(f64, Option<f64>) -> f64;

/// Every curve in the catalog.
///
/// A `Curve` is a plain tag: it carries no parameters and evaluating it
/// dispatches straight to the matching function in [`crate::functions`].
/// It serializes as its catalog name, so configuration files can refer to
/// curves the same way code does.
///
/// # Example
///
/// ```
/// use transition_curves::Curve;
///
/// let curve: Curve = "outBounce".parse()?;
/// assert_eq!(curve, Curve::OutBounce);
/// assert_eq!(curve.name(), "outBounce");
///
/// let factor = curve.evaluate(0.5);
/// assert!((factor - 0.765625).abs() < 1e-12);
/// # Ok::<(), transition_curves::CurveError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Curve {
    /// `t`.
    #[default]
    Linear,
    /// `t²`.
    EaseIn,
    /// `t(2 - t)`.
    EaseOut,
    /// Quadratic in-out split at 0.5.
    EaseInOut,
    /// The cubic `t(3 - 2t)`; unrelated to the bounce family.
    EaseOutBounce,
    /// Linear ramp with a decaying `sin(6πt)` oscillation.
    Spring,
    /// Quadratic in.
    InQuad,
    /// Quadratic out.
    OutQuad,
    /// Quadratic in-out.
    InOutQuad,
    /// Cubic in.
    InCubic,
    /// Cubic out.
    OutCubic,
    /// Cubic in-out.
    InOutCubic,
    /// Quartic in.
    InQuart,
    /// Quartic out.
    OutQuart,
    /// Quartic in-out.
    InOutQuart,
    /// Quintic in.
    InQuint,
    /// Quintic out.
    OutQuint,
    /// Quintic in-out.
    InOutQuint,
    /// Sine in.
    InSine,
    /// Sine out.
    OutSine,
    /// Sine in-out.
    InOutSine,
    /// Exponential in.
    InExpo,
    /// Exponential out.
    OutExpo,
    /// Exponential in-out.
    InOutExpo,
    /// Circular in.
    InCirc,
    /// Circular out.
    OutCirc,
    /// Circular in-out.
    InOutCirc,
    /// Elastic in.
    InElastic,
    /// Elastic out.
    OutElastic,
    /// Elastic in-out.
    InOutElastic,
    /// Back in, takes an overshoot.
    InBack,
    /// Back out, takes an overshoot.
    OutBack,
    /// Back in-out, takes an overshoot.
    InOutBack,
    /// Bounce in.
    InBounce,
    /// Bounce out.
    OutBounce,
    /// Bounce in-out.
    InOutBounce,
    /// Constant 0, a hold stage between transitions.
    Flat,
}

impl Curve {
    /// All curves, in catalog order.
    pub const ALL: [Curve; 37] = [
        Curve::Linear,
        Curve::EaseIn,
        Curve::EaseOut,
        Curve::EaseInOut,
        Curve::EaseOutBounce,
        Curve::Spring,
        Curve::InQuad,
        Curve::OutQuad,
        Curve::InOutQuad,
        Curve::InCubic,
        Curve::OutCubic,
        Curve::InOutCubic,
        Curve::InQuart,
        Curve::OutQuart,
        Curve::InOutQuart,
        Curve::InQuint,
        Curve::OutQuint,
        Curve::InOutQuint,
        Curve::InSine,
        Curve::OutSine,
        Curve::InOutSine,
        Curve::InExpo,
        Curve::OutExpo,
        Curve::InOutExpo,
        Curve::InCirc,
        Curve::OutCirc,
        Curve::InOutCirc,
        Curve::InElastic,
        Curve::OutElastic,
        Curve::InOutElastic,
        Curve::InBack,
        Curve::OutBack,
        Curve::InOutBack,
        Curve::InBounce,
        Curve::OutBounce,
        Curve::InOutBounce,
        Curve::Flat,
    ];

    /// The catalog name of this curve, e.g. `"inOutQuad"`.
    pub const fn name(self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::EaseIn => "easeIn",
            Curve::EaseOut => "easeOut",
            Curve::EaseInOut => "easeInOut",
            Curve::EaseOutBounce => "easeOutBounce",
            Curve::Spring => "spring",
            Curve::InQuad => "inQuad",
            Curve::OutQuad => "outQuad",
            Curve::InOutQuad => "inOutQuad",
            Curve::InCubic => "inCubic",
            Curve::OutCubic => "outCubic",
            Curve::InOutCubic => "inOutCubic",
            Curve::InQuart => "inQuart",
            Curve::OutQuart => "outQuart",
            Curve::InOutQuart => "inOutQuart",
            Curve::InQuint => "inQuint",
            Curve::OutQuint => "outQuint",
            Curve::InOutQuint => "inOutQuint",
            Curve::InSine => "inSine",
            Curve::OutSine => "outSine",
            Curve::InOutSine => "inOutSine",
            Curve::InExpo => "inExpo",
            Curve::OutExpo => "outExpo",
            Curve::InOutExpo => "inOutExpo",
            Curve::InCirc => "inCirc",
            Curve::OutCirc => "outCirc",
            Curve::InOutCirc => "inOutCirc",
            Curve::InElastic => "inElastic",
            Curve::OutElastic => "outElastic",
            Curve::InOutElastic => "inOutElastic",
            Curve::InBack => "inBack",
            Curve::OutBack => "outBack",
            Curve::InOutBack => "inOutBack",
            Curve::InBounce => "inBounce",
            Curve::OutBounce => "outBounce",
            Curve::InOutBounce => "inOutBounce",
            Curve::Flat => "flat",
        }
    }

    /// Evaluate the curve at `t`, using [`crate::functions::DEFAULT_OVERSHOOT`] for the
    /// back curves.
    ///
    /// `t` is not clamped; values outside `[0,1]` extrapolate.
    #[inline]
    pub fn evaluate(self, t: f64) -> f64 {
        self.evaluate_with(t, None)
    }

    /// Evaluate the curve at `t` with an explicit overshoot.
    ///
    /// `overshoot` is read by [`Curve::InBack`], [`Curve::OutBack`] and
    /// [`Curve::InOutBack`] only; `None` selects the default. Every other
    /// curve ignores it.
    #[inline]
    pub fn evaluate_with(self, t: f64, overshoot: Option<f64>) -> f64 {
        let s = overshoot.unwrap_or(f::DEFAULT_OVERSHOOT);
        match self {
            Curve::Linear => f::linear(t),
            Curve::EaseIn => f::ease_in(t),
            Curve::EaseOut => f::ease_out(t),
            Curve::EaseInOut => f::ease_in_out(t),
            Curve::EaseOutBounce => f::ease_out_bounce(t),
            Curve::Spring => f::spring(t),
            Curve::InQuad => f::in_quad(t),
            Curve::OutQuad => f::out_quad(t),
            Curve::InOutQuad => f::in_out_quad(t),
            Curve::InCubic => f::in_cubic(t),
            Curve::OutCubic => f::out_cubic(t),
            Curve::InOutCubic => f::in_out_cubic(t),
            Curve::InQuart => f::in_quart(t),
            Curve::OutQuart => f::out_quart(t),
            Curve::InOutQuart => f::in_out_quart(t),
            Curve::InQuint => f::in_quint(t),
            Curve::OutQuint => f::out_quint(t),
            Curve::InOutQuint => f::in_out_quint(t),
            Curve::InSine => f::in_sine(t),
            Curve::OutSine => f::out_sine(t),
            Curve::InOutSine => f::in_out_sine(t),
            Curve::InExpo => f::in_expo(t),
            Curve::OutExpo => f::out_expo(t),
            Curve::InOutExpo => f::in_out_expo(t),
            Curve::InCirc => f::in_circ(t),
            Curve::OutCirc => f::out_circ(t),
            Curve::InOutCirc => f::in_out_circ(t),
            Curve::InElastic => f::in_elastic(t),
            Curve::OutElastic => f::out_elastic(t),
            Curve::InOutElastic => f::in_out_elastic(t),
            Curve::InBack => f::in_back(t, s),
            Curve::OutBack => f::out_back(t, s),
            Curve::InOutBack => f::in_out_back(t, s),
            Curve::InBounce => f::in_bounce(t),
            Curve::OutBounce => f::out_bounce(t),
            Curve::InOutBounce => f::in_out_bounce(t),
            Curve::Flat => f::flat(t),
        }
    }

    /// The curve as a plain function pointer, for registries and tables
    /// that store curves by value.
    pub fn function(self) -> CurveFn {
        match self {
            Curve::Linear => |t, _| f::linear(t),
            Curve::EaseIn => |t, _| f::ease_in(t),
            Curve::EaseOut => |t, _| f::ease_out(t),
            Curve::EaseInOut => |t, _| f::ease_in_out(t),
            Curve::EaseOutBounce => |t, _| f::ease_out_bounce(t),
            Curve::Spring => |t, _| f::spring(t),
            Curve::InQuad => |t, _| f::in_quad(t),
            Curve::OutQuad => |t, _| f::out_quad(t),
            Curve::InOutQuad => |t, _| f::in_out_quad(t),
            Curve::InCubic => |t, _| f::in_cubic(t),
            Curve::OutCubic => |t, _| f::out_cubic(t),
            Curve::InOutCubic => |t, _| f::in_out_cubic(t),
            Curve::InQuart => |t, _| f::in_quart(t),
            Curve::OutQuart => |t, _| f::out_quart(t),
            Curve::InOutQuart => |t, _| f::in_out_quart(t),
            Curve::InQuint => |t, _| f::in_quint(t),
            Curve::OutQuint => |t, _| f::out_quint(t),
            Curve::InOutQuint => |t, _| f::in_out_quint(t),
            Curve::InSine => |t, _| f::in_sine(t),
            Curve::OutSine => |t, _| f::out_sine(t),
            Curve::InOutSine => |t, _| f::in_out_sine(t),
            Curve::InExpo => |t, _| f::in_expo(t),
            Curve::OutExpo => |t, _| f::out_expo(t),
            Curve::InOutExpo => |t, _| f::in_out_expo(t),
            Curve::InCirc => |t, _| f::in_circ(t),
            Curve::OutCirc => |t, _| f::out_circ(t),
            Curve::InOutCirc => |t, _| f::in_out_circ(t),
            Curve::InElastic => |t, _| f::in_elastic(t),
            Curve::OutElastic => |t, _| f::out_elastic(t),
            Curve::InOutElastic => |t, _| f::in_out_elastic(t),
            Curve::InBack => |t, s| f::in_back(t, s.unwrap_or(f::DEFAULT_OVERSHOOT)),
            Curve::OutBack => |t, s| f::out_back(t, s.unwrap_or(f::DEFAULT_OVERSHOOT)),
            Curve::InOutBack => |t, s| f::in_out_back(t, s.unwrap_or(f::DEFAULT_OVERSHOOT)),
            Curve::InBounce => |t, _| f::in_bounce(t),
            Curve::OutBounce => |t, _| f::out_bounce(t),
            Curve::InOutBounce => |t, _| f::in_out_bounce(t),
            Curve::Flat => |t, _| f::flat(t),
        }
    }

    /// Whether the curve reads an overshoot parameter.
    pub const fn accepts_overshoot(self) -> bool {
        matches!(self, Curve::InBack | Curve::OutBack | Curve::InOutBack)
    }

    /// Whether `f(0) = 0` and `f(1) = 1` (within float tolerance).
    ///
    /// Holds for every curve except [`Curve::Flat`]. Callers chaining
    /// curves must not assume it universally.
    pub const fn anchors_endpoints(self) -> bool {
        !matches!(self, Curve::Flat)
    }

    /// Whether the curve is non-decreasing on `[0,1]`.
    ///
    /// False for the curves that overshoot, dip or oscillate: spring,
    /// `easeOutBounce`, and the elastic, back and bounce families.
    pub const fn is_monotonic(self) -> bool {
        !matches!(
            self,
            Curve::EaseOutBounce
                | Curve::Spring
                | Curve::InElastic
                | Curve::OutElastic
                | Curve::InOutElastic
                | Curve::InBack
                | Curve::OutBack
                | Curve::InOutBack
                | Curve::InBounce
                | Curve::OutBounce
                | Curve::InOutBounce
        )
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Curve::ALL
            .into_iter()
            .find(|curve| curve.name() == s)
            .ok_or_else(|| CurveError::unknown(s))
    }
}

impl TryFrom<&str> for Curve {
    type Error = CurveError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
