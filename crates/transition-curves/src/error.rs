//! Error types for curve lookup and configuration.

/// Error type for curve operations.
///
/// Evaluating a curve never fails. These errors cover the surrounding
/// surface: resolving a curve by name, registering curves in a catalog,
/// and validating a curve configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// No curve is registered under the requested name.
    #[error("Unknown curve '{0}'")]
    UnknownCurve(String),

    /// A curve with this name is already registered in the catalog.
    #[error("Curve '{0}' is already registered")]
    DuplicateCurve(String),

    /// Invalid curve configuration.
    ///
    /// This covers errors like:
    /// - Non-finite overshoot
    /// - Overshoot given for a curve that does not take one
    #[error("Invalid curve configuration: {0}")]
    InvalidConfiguration(String),
}

impl CurveError {
    /// Create an unknown-curve error for the given name.
    pub fn unknown(name: impl Into<String>) -> Self {
        CurveError::UnknownCurve(name.into())
    }
}
