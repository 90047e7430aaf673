//! Concrete tension stress limits of the form `λ·k·sqrt(f'c) ≤ max`.

use serde::{Deserialize, Serialize};
use speclib_store::{Archive, StoreError};

use crate::tolerance::is_equal;
use crate::units::{sqrt_ksi, KSI};

/// A tension stress limit coefficient with an optional upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TensionStressLimit {
    /// Multiplier on `sqrt(f'c)`, in `sqrt(Pa)`.
    pub coefficient: f64,
    pub has_max_value: bool,
    /// Upper bound on the limit, in Pa. Only meaningful with `has_max_value`.
    pub max_value: f64,
}

impl Default for TensionStressLimit {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl TensionStressLimit {
    /// An unbounded limit.
    pub fn new(coefficient: f64) -> Self {
        Self {
            coefficient,
            has_max_value: false,
            max_value: 0.0,
        }
    }

    /// A limit bounded by `max_value`.
    pub fn with_max(coefficient: f64, max_value: f64) -> Self {
        Self {
            coefficient,
            has_max_value: true,
            max_value,
        }
    }

    /// Build from a coefficient on `sqrt(f'c [ksi])` and an optional bound in ksi.
    pub fn from_ksi(coefficient: f64, max_ksi: Option<f64>) -> Self {
        match max_ksi {
            Some(max) => Self::with_max(sqrt_ksi(coefficient), max * KSI),
            None => Self::new(sqrt_ksi(coefficient)),
        }
    }

    /// `lambda * coefficient * sqrt(fc)`, clamped to `max_value` when bounded.
    pub fn stress_limit(&self, lambda: f64, fc: f64) -> f64 {
        let limit = lambda * self.coefficient * fc.sqrt();
        if self.has_max_value {
            limit.min(self.max_value)
        } else {
            limit
        }
    }

    /// Tolerant equality. The bound only matters when both limits have one.
    pub fn is_equal(&self, other: &Self) -> bool {
        is_equal(self.coefficient, other.coefficient)
            && self.has_max_value == other.has_max_value
            && (!(self.has_max_value && other.has_max_value)
                || is_equal(self.max_value, other.max_value))
    }

    /// Exchange as a sub-unit named `name`.
    pub fn exchange(&mut self, ar: &mut dyn Archive, name: &str) -> Result<(), StoreError> {
        ar.begin_unit(name, 1.0)?;
        ar.float("Coefficient", &mut self.coefficient)?;
        ar.bool("bHasMaxValue", &mut self.has_max_value)?;
        ar.float("MaxValue", &mut self.max_value)?;
        ar.end_unit()
    }
}

/// Tolerant equality over pairs of limits.
pub fn all_equal(a: &[TensionStressLimit], b: &[TensionStressLimit]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.is_equal(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use speclib_store::{UnitReader, UnitWriter};

    #[test]
    fn unbounded_limit() {
        let tsl = TensionStressLimit::new(0.5);
        assert!(is_equal(tsl.stress_limit(1.0, 16.0), 2.0));
        assert!(is_equal(tsl.stress_limit(0.75, 16.0), 1.5));
    }

    #[test]
    fn clamped_limit() {
        let tsl = TensionStressLimit::with_max(0.5, 1.8);
        assert!(is_equal(tsl.stress_limit(1.0, 16.0), 1.8));
        assert!(is_equal(tsl.stress_limit(1.0, 4.0), 1.0));
    }

    #[test]
    fn customary_defaults() {
        let tsl = TensionStressLimit::from_ksi(0.0948, Some(0.2));
        let fc = 5.0 * KSI;
        // 0.0948 sqrt(5) = 0.212 ksi, clamped to 0.2 ksi
        assert!(is_equal(tsl.stress_limit(1.0, fc), 0.2 * KSI));
        let fc = 4.0 * KSI;
        assert!(is_equal(tsl.stress_limit(1.0, fc), 0.0948 * 2.0 * KSI));
    }

    #[test]
    fn equality_ignores_unused_bound() {
        let mut a = TensionStressLimit::new(0.24);
        let mut b = TensionStressLimit::new(0.24);
        a.max_value = 1.0;
        b.max_value = 2.0;
        assert!(a.is_equal(&b));

        a.has_max_value = true;
        assert!(!a.is_equal(&b));

        b.has_max_value = true;
        assert!(!a.is_equal(&b));

        b.max_value = 1.0;
        assert!(a.is_equal(&b));
    }

    #[test]
    fn exchange_round_trip() {
        let original = TensionStressLimit::with_max(248.9, 1.379e6);
        let mut w = UnitWriter::new();
        w.begin_unit("Outer", 1.0).unwrap();
        let mut saved = original;
        saved.exchange(&mut w, "Limit").unwrap();
        w.end_unit().unwrap();
        let root = w.finish().unwrap();

        let mut r = UnitReader::new(&root);
        r.begin_unit("Outer", 1.0).unwrap();
        let mut loaded = TensionStressLimit::default();
        loaded.exchange(&mut r, "Limit").unwrap();
        assert_eq!(loaded, original);
    }
}
