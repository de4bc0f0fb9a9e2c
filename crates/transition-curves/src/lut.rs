//! Pre-sampled curve tables.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;

/// A curve sampled at 256 evenly spaced points over `[0,1]`.
///
/// Useful when a curve is evaluated many times per frame across many
/// properties, and for inspecting a curve's shape: monotonicity, extrema
/// and slope reversals are read straight off the table.
///
/// Unlike the curves themselves, [`CurveLut::lookup`] clamps its input to
/// `[0,1]`. Sampled values are stored as-is, so curves that overshoot keep
/// their overshoot.
///
/// # Example
///
/// ```
/// use transition_curves::{Curve, CurveLut};
///
/// let lut = CurveLut::from_curve(Curve::InOutSine);
/// assert!((lut.lookup(0.5) - 0.5).abs() < 1e-3);
/// assert!(lut.is_monotonic());
///
/// let elastic = CurveLut::from_curve(Curve::InElastic);
/// assert!(!elastic.is_monotonic());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CurveLut {
    table: [f64; 256],
}

impl CurveLut {
    /// Number of samples.
    pub const SIZE: usize = 256;

    /// Sample `curve` with its default parameters.
    pub fn from_curve(curve: Curve) -> Self {
        Self::from_fn(|t| curve.evaluate(t))
    }

    /// Identity table.
    pub fn linear() -> Self {
        Self::from_curve(Curve::Linear)
    }

    /// Sample an arbitrary function of normalized time.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let mut table = [0.0f64; Self::SIZE];

        for (i, entry) in table.iter_mut().enumerate() {
            *entry = f(Self::sample_time(i));
        }

        Self { table }
    }

    /// Normalized time of sample `index`.
    #[inline]
    pub fn sample_time(index: usize) -> f64 {
        index as f64 / (Self::SIZE - 1) as f64
    }

    /// Value at `t`, linearly interpolated between the nearest samples.
    ///
    /// `t` is clamped to `[0,1]`; NaN maps to the first sample.
    #[inline]
    pub fn lookup(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let scaled = t * (Self::SIZE - 1) as f64;
        let index_low = (scaled as usize).min(Self::SIZE - 2);
        let fraction = scaled - index_low as f64;

        let pair = self.table.get(index_low..=index_low + 1);
        match pair {
            Some([low, high]) => low + fraction * (high - low),
            _ => self.table.first().copied().unwrap_or_default(),
        }
    }

    /// The raw samples.
    pub fn table(&self) -> &[f64; 256] {
        &self.table
    }

    /// Whether no sample is smaller than the one before it.
    pub fn is_monotonic(&self) -> bool {
        self.table.windows(2).all(|w| match w {
            [a, b] => b >= a,
            _ => true,
        })
    }

    /// Smallest sample.
    pub fn min_value(&self) -> f64 {
        self.table.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest sample.
    pub fn max_value(&self) -> f64 {
        self.table.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Sample indices at which the discrete slope changes sign.
    ///
    /// Index `i` is reported when the step into sample `i` and the step out
    /// of it have opposite signs. Flat steps are skipped, so a plateau does
    /// not count as a reversal.
    pub fn slope_sign_changes(&self) -> Vec<usize> {
        let mut changes = Vec::new();
        let mut previous: Option<bool> = None;

        for (i, w) in self.table.windows(2).enumerate() {
            let [a, b] = w else { continue };
            let step = b - a;
            if step == 0.0 {
                continue;
            }
            let rising = step > 0.0;
            if previous.is_some_and(|was_rising| was_rising != rising) {
                changes.push(i);
            }
            previous = Some(rising);
        }

        changes
    }
}

impl Default for CurveLut {
    fn default() -> Self {
        Self::linear()
    }
}

impl Serialize for CurveLut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.table.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CurveLut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec: Vec<f64> = Vec::deserialize(deserializer)?;
        let table: [f64; 256] = vec.try_into().map_err(|v: Vec<f64>| {
            <D::Error as serde::de::Error>::custom(format!(
                "Expected {} entries in CurveLut, got {}",
                CurveLut::SIZE,
                v.len()
            ))
        })?;
        Ok(CurveLut { table })
    }
}
