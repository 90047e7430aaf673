//! Conversion factors for defaults expressed in customary units.
//!
//! Stored values are SI: metres, pascals, newtons, kg/m³, radians, days.

pub const INCH: f64 = 0.0254;
pub const FOOT: f64 = 0.3048;
pub const MILLIMETER: f64 = 0.001;
pub const KIP: f64 = 4_448.221_615_260_5;
pub const KSI: f64 = 6.894_757_293_168e6;
pub const KSF: f64 = 47_880.258_980_3;
pub const MPA: f64 = 1.0e6;
/// Pound-mass per cubic foot, in kg/m³.
pub const PCF: f64 = 16.018_463_373_960_14;
pub const DEGREE: f64 = std::f64::consts::PI / 180.0;

/// Convert a coefficient on `sqrt(f'c [ksi])` giving ksi into one on
/// `sqrt(f'c [Pa])` giving Pa.
pub fn sqrt_ksi(coefficient: f64) -> f64 {
    coefficient * KSI.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::is_equal;

    #[test]
    fn sqrt_ksi_preserves_the_limit() {
        // 0.24 sqrt(f'c) with f'c = 6 ksi is 0.5879 ksi
        let fc = 6.0 * KSI;
        let limit = sqrt_ksi(0.24) * fc.sqrt();
        assert!(is_equal(limit / KSI, 0.24 * 6.0_f64.sqrt()));
    }

    #[test]
    fn customary_units() {
        assert!(is_equal(200.0 * KIP, 889_644.323));
        assert!(is_equal(24.0 * INCH, 0.6096));
    }
}
