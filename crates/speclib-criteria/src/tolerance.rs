//! Tolerance-based floating point equality used by every comparison.

/// Relative tolerance, applied as an absolute tolerance for values below one.
pub const TOLERANCE: f64 = 1.0e-6;

/// `true` when `a` and `b` agree within [`TOLERANCE`]. Identical values,
/// infinities and NaN included, are always equal.
pub fn is_equal(a: f64, b: f64) -> bool {
    if a == b || (a.is_nan() && b.is_nan()) {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= TOLERANCE * scale
}

/// Element-wise [`is_equal`] over two slices of the same length.
pub fn all_equal(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| is_equal(*x, *y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_use_absolute_tolerance() {
        assert!(is_equal(0.0, 1.0e-7));
        assert!(!is_equal(0.0, 1.0e-5));
    }

    #[test]
    fn large_values_use_relative_tolerance() {
        // 200 kip in newtons, off by a rounding error
        assert!(is_equal(889_644.3, 889_644.300_1));
        assert!(!is_equal(889_644.3, 889_650.0));
    }

    #[test]
    fn non_finite_values_equal_themselves() {
        assert!(is_equal(f64::NAN, f64::NAN));
        assert!(is_equal(f64::INFINITY, f64::INFINITY));
        assert!(!is_equal(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!is_equal(f64::NAN, 0.0));
        assert!(!is_equal(f64::INFINITY, 1.0e300));
    }

    #[test]
    fn slices() {
        assert!(all_equal(&[0.8, 0.4], &[0.8, 0.4]));
        assert!(!all_equal(&[0.8, 0.4], &[0.8, 0.5]));
        assert!(!all_equal(&[0.8], &[0.8, 0.4]));
    }
}
