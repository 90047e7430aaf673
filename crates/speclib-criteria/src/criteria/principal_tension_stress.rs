//! Principal tension stress in webs.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};
use crate::tolerance::is_equal;
use crate::units::{sqrt_ksi, KSI};

stored_enum! {
    pub enum PrincipalTensileStressMethod {
        #[default]
        Aashto = 0 => "AASHTO LRFD",
        Nchrp = 1 => "NCHRP Report 849",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrincipalTensionStressCriteria {
    pub method: PrincipalTensileStressMethod,
    /// Multiplier on `sqrt(f'c)`, in `sqrt(Pa)`.
    pub coefficient: f64,
    /// Tendons closer than this many duct diameters are treated as a group.
    pub tendon_nearness_factor: f64,
    /// Pa; only used by the NCHRP method.
    pub fc_threshold: f64,
    pub ungrouted_multiplier: f64,
    pub grouted_multiplier: f64,
}

impl Default for PrincipalTensionStressCriteria {
    fn default() -> Self {
        Self {
            method: PrincipalTensileStressMethod::Aashto,
            coefficient: sqrt_ksi(0.110),
            tendon_nearness_factor: 1.5,
            fc_threshold: 10.0 * KSI,
            ungrouted_multiplier: 0.5,
            grouted_multiplier: 0.25,
        }
    }
}

impl PrincipalTensionStressCriteria {
    /// Duct width deduction multipliers `(ungrouted, grouted)` for `edition`.
    pub fn duct_deduction_multipliers(edition: Edition) -> (f64, f64) {
        if edition >= Edition::NinthEdition2020 {
            (1.0, 0.0)
        } else if edition < Edition::SecondEditionWith2000Interims {
            (1.0, 0.5)
        } else {
            (0.5, 0.25)
        }
    }
}

impl CriteriaModule for PrincipalTensionStressCriteria {
    const UNIT_NAME: &'static str = "PrincipalTensionStressCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Principal Tension Stress in Webs";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        exchange_enum(ar, "Method", &mut self.method)?;
        ar.float("Coefficient", &mut self.coefficient)?;
        ar.float("TendonNearnessFactor", &mut self.tendon_nearness_factor)?;
        ar.float("FcThreshold", &mut self.fc_threshold)?;
        ar.float("UngroutedMultiplier", &mut self.ungrouted_multiplier)?;
        ar.float("GroutedMultiplier", &mut self.grouted_multiplier)
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        let differs = self.method != other.method
            || !is_equal(self.coefficient, other.coefficient)
            || !is_equal(self.tendon_nearness_factor, other.tendon_nearness_factor)
            || (self.method == PrincipalTensileStressMethod::Nchrp
                && !is_equal(self.fc_threshold, other.fc_threshold))
            || !is_equal(self.ungrouted_multiplier, other.ungrouted_multiplier)
            || !is_equal(self.grouted_multiplier, other.grouted_multiplier);
        d.group(
            differs,
            "Principal Tension Stress in Web parameters are different",
        );
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_same, labels, round_trip};

    #[test]
    fn duct_deduction_by_edition() {
        use PrincipalTensionStressCriteria as P;
        assert_eq!(P::duct_deduction_multipliers(Edition::TenthEdition2024), (1.0, 0.0));
        assert_eq!(P::duct_deduction_multipliers(Edition::NinthEdition2020), (1.0, 0.0));
        assert_eq!(P::duct_deduction_multipliers(Edition::EighthEdition2017), (0.5, 0.25));
        assert_eq!(
            P::duct_deduction_multipliers(Edition::SecondEditionWith2000Interims),
            (0.5, 0.25)
        );
        assert_eq!(P::duct_deduction_multipliers(Edition::SecondEdition1998), (1.0, 0.5));
    }

    #[test]
    fn threshold_only_used_by_nchrp() {
        let a = PrincipalTensionStressCriteria::default();
        let b = PrincipalTensionStressCriteria {
            fc_threshold: 12.0 * KSI,
            ..Default::default()
        };
        assert_same(&a, &b);

        let a = PrincipalTensionStressCriteria {
            method: PrincipalTensileStressMethod::Nchrp,
            ..a
        };
        let b = PrincipalTensionStressCriteria {
            method: PrincipalTensileStressMethod::Nchrp,
            ..b
        };
        assert_eq!(labels(&a, &b, Edition::LATEST).len(), 1);
        assert_eq!(round_trip(&b), b);
    }
}
