//! Name-keyed registry of curve functions.
//!
//! The catalog is what an animation layer consults when a transition names
//! its curve as a string. The standard catalog holds every [`Curve`] under
//! its catalog name and is built once per process on first use; after that
//! it is read-only and shared across threads without locking.
//!
//! # Example
//!
//! ```
//! use transition_curves::CurveCatalog;
//!
//! let catalog = CurveCatalog::global();
//! let out_back = catalog.get("outBack")?;
//!
//! assert!(out_back(0.9, None) > 1.0);
//! assert!(out_back(0.9, Some(0.0)) <= 1.0);
//! # Ok::<(), transition_curves::CurveError>(())
//! ```

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::curve::{Curve, CurveFn};
use crate::error::CurveError;

/// A mapping from unique curve names to curve functions.
#[derive(Clone, Debug, Default)]
pub struct CurveCatalog {
    entries: BTreeMap<&'static str, CurveFn>,
}

impl CurveCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding every curve in [`Curve::ALL`].
    pub fn standard() -> Self {
        let entries = Curve::ALL
            .into_iter()
            .map(|curve| (curve.name(), curve.function()))
            .collect();
        Self { entries }
    }

    /// The process-wide standard catalog.
    ///
    /// Built on first call; every later call returns the same instance.
    pub fn global() -> &'static CurveCatalog {
        static CATALOG: OnceLock<CurveCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let catalog = CurveCatalog::standard();
            debug!(curves = catalog.len(), "Standard curve catalog built");
            catalog
        })
    }

    /// Register a curve function under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DuplicateCurve`] if `name` is already taken;
    /// the existing entry is left in place.
    pub fn insert(&mut self, name: &'static str, function: CurveFn) -> Result<(), CurveError> {
        if self.entries.contains_key(name) {
            return Err(CurveError::DuplicateCurve(name.to_string()));
        }
        self.entries.insert(name, function);
        Ok(())
    }

    /// Find the function registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<CurveFn> {
        self.entries.get(name).copied()
    }

    /// Find the function registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::UnknownCurve`] when nothing is registered
    /// under `name`.
    pub fn get(&self, name: &str) -> Result<CurveFn, CurveError> {
        self.lookup(name).ok_or_else(|| CurveError::unknown(name))
    }

    /// Find the function registered under `name`, falling back to
    /// `linear` (with a warning) when the name is unknown.
    pub fn lookup_or_linear(&self, name: &str) -> CurveFn {
        match self.lookup(name) {
            Some(function) => function,
            None => {
                warn!(curve = name, "Unknown curve, falling back to linear");
                Curve::Linear.function()
            }
        }
    }

    /// Whether a curve is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered curves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no curves.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// `(name, function)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, CurveFn)> + '_ {
        self.entries.iter().map(|(name, function)| (*name, *function))
    }
}

/// Look a curve up by name in the global catalog.
pub fn lookup(name: &str) -> Option<CurveFn> {
    CurveCatalog::global().lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_standard_catalog_holds_every_curve() {
        let catalog = CurveCatalog::standard();
        assert_eq!(catalog.len(), Curve::ALL.len());
        for curve in Curve::ALL {
            assert!(catalog.contains(curve.name()), "missing {}", curve);
        }
    }

    #[test]
    fn test_lookup_matches_curve_evaluation() {
        let catalog = CurveCatalog::standard();
        for curve in Curve::ALL {
            let function = must(catalog.get(curve.name()));
            for t in [0.0, 0.1, 0.33, 0.5, 0.9, 1.0] {
                assert_eq!(function(t, None).to_bits(), curve.evaluate(t).to_bits());
            }
        }
    }

    #[test]
    fn test_lookup_miss() {
        let catalog = CurveCatalog::standard();
        assert!(catalog.lookup("inOutExp").is_none());
        assert_eq!(
            catalog.get("inOutExp").err(),
            Some(CurveError::UnknownCurve("inOutExp".to_string()))
        );
    }

    #[test]
    fn test_lookup_or_linear_falls_back() {
        let catalog = CurveCatalog::standard();
        let function = catalog.lookup_or_linear("no-such-curve");
        assert_eq!(function(0.37, None).to_bits(), 0.37f64.to_bits());

        let found = catalog.lookup_or_linear("inQuad");
        assert!((found(0.5, None) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_insert_rejects_duplicate_names() {
        let mut catalog = CurveCatalog::new();
        assert!(catalog.is_empty());

        must(catalog.insert("hold", |_, _| 0.0));
        let result = catalog.insert("hold", |t, _| t);
        assert_eq!(result, Err(CurveError::DuplicateCurve("hold".to_string())));

        // Existing entry survives the rejected insert.
        let hold = must(catalog.get("hold"));
        assert_eq!(hold(0.8, None).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_standard_catalog_can_be_extended() {
        let mut catalog = CurveCatalog::standard();
        must(catalog.insert("stepHalf", |t, _| if t < 0.5 { 0.0 } else { 1.0 }));
        assert_eq!(catalog.len(), Curve::ALL.len() + 1);
        assert!(catalog.insert("linear", |t, _| t).is_err());
    }

    #[test]
    fn test_names_are_sorted() {
        let catalog = CurveCatalog::standard();
        let names: Vec<&str> = catalog.names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(catalog.iter().count(), names.len());
    }

    #[test]
    fn test_global_is_shared() {
        let first = CurveCatalog::global();
        let second = CurveCatalog::global();
        assert!(std::ptr::eq(first, second));
        assert!(lookup("inOutBounce").is_some());
        assert!(lookup("bogus").is_none());
    }
}
