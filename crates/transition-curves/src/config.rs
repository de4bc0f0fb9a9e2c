//! Serializable curve selection for profiles and animation definitions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::Curve;
use crate::error::CurveError;

/// A curve choice as it appears in configuration.
///
/// Accepts either a bare curve name or a table with an optional overshoot:
///
/// ```
/// use transition_curves::{Curve, CurveConfig};
///
/// let plain: CurveConfig = serde_json::from_str(r#""outBounce""#)?;
/// assert_eq!(plain.curve, Curve::OutBounce);
///
/// let tuned: CurveConfig =
///     serde_json::from_str(r#"{ "curve": "outBack", "overshoot": 2.5 }"#)?;
/// assert_eq!(tuned.overshoot, Some(2.5));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "CurveConfigRepr")]
pub struct CurveConfig {
    /// The selected curve.
    pub curve: Curve,
    /// Overshoot for the back curves; `None` uses the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overshoot: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CurveConfigRepr {
    Name(Curve),
    Table(CurveConfigTable),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CurveConfigTable {
    curve: Curve,
    #[serde(default)]
    overshoot: Option<f64>,
}

impl From<CurveConfigRepr> for CurveConfig {
    fn from(repr: CurveConfigRepr) -> Self {
        match repr {
            CurveConfigRepr::Name(curve) => CurveConfig::from(curve),
            CurveConfigRepr::Table(table) => CurveConfig {
                curve: table.curve,
                overshoot: table.overshoot,
            },
        }
    }
}

impl From<Curve> for CurveConfig {
    fn from(curve: Curve) -> Self {
        CurveConfig {
            curve,
            overshoot: None,
        }
    }
}

impl CurveConfig {
    /// Select `curve` with an explicit overshoot.
    pub fn with_overshoot(curve: Curve, overshoot: f64) -> Self {
        CurveConfig {
            curve,
            overshoot: Some(overshoot),
        }
    }

    /// Check the configuration before it is used.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidConfiguration`] if the overshoot is not
    /// finite, or if an overshoot is set on a curve that does not read one.
    pub fn validate(&self) -> Result<(), CurveError> {
        let Some(overshoot) = self.overshoot else {
            return Ok(());
        };
        if !self.curve.accepts_overshoot() {
            debug!(curve = %self.curve, overshoot, "Rejected overshoot on curve without one");
            return Err(CurveError::InvalidConfiguration(format!(
                "Curve '{}' does not take an overshoot",
                self.curve
            )));
        }
        if !overshoot.is_finite() {
            debug!(curve = %self.curve, overshoot, "Rejected non-finite overshoot");
            return Err(CurveError::InvalidConfiguration(
                "Overshoot must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Evaluate the configured curve at `t`.
    #[inline]
    pub fn evaluate(&self, t: f64) -> f64 {
        self.curve.evaluate_with(t, self.overshoot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_bare_name() -> Result<(), serde_json::Error> {
        let config: CurveConfig = serde_json::from_str("\"inOutElastic\"")?;
        assert_eq!(config, CurveConfig::from(Curve::InOutElastic));
        Ok(())
    }

    #[test]
    fn test_deserialize_table_without_overshoot() -> Result<(), serde_json::Error> {
        let config: CurveConfig = serde_json::from_str(r#"{ "curve": "spring" }"#)?;
        assert_eq!(config.curve, Curve::Spring);
        assert_eq!(config.overshoot, None);
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields_and_names() {
        let extra: Result<CurveConfig, _> =
            serde_json::from_str(r#"{ "curve": "linear", "duration": 500 }"#);
        assert!(extra.is_err());

        let unknown: Result<CurveConfig, _> = serde_json::from_str("\"wobble\"");
        assert!(unknown.is_err());
    }

    #[test]
    fn test_serialize_round_trip() -> Result<(), serde_json::Error> {
        let config = CurveConfig::with_overshoot(Curve::InOutBack, 3.0);
        let json = serde_json::to_string(&config)?;
        assert_eq!(json, r#"{"curve":"inOutBack","overshoot":3.0}"#);
        let back: CurveConfig = serde_json::from_str(&json)?;
        assert_eq!(back, config);

        let plain = serde_json::to_string(&CurveConfig::from(Curve::Flat))?;
        assert_eq!(plain, r#"{"curve":"flat"}"#);
        Ok(())
    }

    #[test]
    fn test_validate() {
        assert!(CurveConfig::from(Curve::OutBounce).validate().is_ok());
        assert!(CurveConfig::with_overshoot(Curve::OutBack, 0.0).validate().is_ok());

        let nan = CurveConfig::with_overshoot(Curve::InBack, f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(CurveError::InvalidConfiguration(msg)) if msg.contains("finite")
        ));

        let misplaced = CurveConfig::with_overshoot(Curve::OutQuad, 2.0);
        assert!(matches!(
            misplaced.validate(),
            Err(CurveError::InvalidConfiguration(msg)) if msg.contains("outQuad")
        ));
    }

    #[test]
    fn test_evaluate_uses_overshoot() {
        let tuned = CurveConfig::with_overshoot(Curve::OutBack, 0.0);
        let default = CurveConfig::from(Curve::OutBack);
        assert!(tuned.evaluate(0.9) <= 1.0);
        assert!(default.evaluate(0.9) > 1.0);
    }
}
