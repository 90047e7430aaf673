//! Concrete stress limits for closure joints in spliced girders.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::stress_limit::{all_equal, TensionStressLimit};
use crate::tolerance::is_equal;

/// Tension limits in and outside the precompressed tensile zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosureJointTensionLimits {
    pub in_ptz_without_reinforcement: TensionStressLimit,
    pub in_ptz_with_reinforcement: TensionStressLimit,
    pub other_areas_without_reinforcement: TensionStressLimit,
    pub other_areas_with_reinforcement: TensionStressLimit,
}

impl ClosureJointTensionLimits {
    fn as_array(&self) -> [TensionStressLimit; 4] {
        [
            self.in_ptz_without_reinforcement,
            self.in_ptz_with_reinforcement,
            self.other_areas_without_reinforcement,
            self.other_areas_with_reinforcement,
        ]
    }

    fn is_equal(&self, other: &Self) -> bool {
        all_equal(&self.as_array(), &other.as_array())
    }

    fn exchange(&mut self, ar: &mut dyn Archive) -> Result<(), StoreError> {
        self.in_ptz_without_reinforcement
            .exchange(ar, "TensionStressLimit_InPTZ_WithoutReinforcement")?;
        self.in_ptz_with_reinforcement
            .exchange(ar, "TensionStressLimit_InPTZ_WithReinforcement")?;
        self.other_areas_without_reinforcement
            .exchange(ar, "TensionStressLimit_OtherAreas_WithoutReinforcement")?;
        self.other_areas_with_reinforcement
            .exchange(ar, "TensionStressLimit_OtherAreas_WithReinforcement")
    }
}

impl Default for ClosureJointTensionLimits {
    fn default() -> Self {
        Self {
            in_ptz_without_reinforcement: TensionStressLimit::new(0.0),
            in_ptz_with_reinforcement: TensionStressLimit::from_ksi(0.0948, None),
            other_areas_without_reinforcement: TensionStressLimit::new(0.0),
            other_areas_with_reinforcement: TensionStressLimit::from_ksi(0.19, None),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClosureJointCriteria {
    pub compression_stress_coefficient_before_losses: f64,
    pub tension_before_losses: ClosureJointTensionLimits,

    pub compression_stress_coefficient_permanent_loads_only_after_losses: f64,
    pub compression_stress_coefficient_all_loads_after_losses: f64,
    pub tension_after_losses: ClosureJointTensionLimits,
    pub check_final_service_i_tension: bool,
    pub tension_stress_limit_service_i_permanent_loads_only: TensionStressLimit,

    pub compression_stress_coefficient_fatigue: f64,
}

impl Default for ClosureJointCriteria {
    fn default() -> Self {
        Self {
            compression_stress_coefficient_before_losses: 0.60,
            tension_before_losses: ClosureJointTensionLimits::default(),
            compression_stress_coefficient_permanent_loads_only_after_losses: 0.45,
            compression_stress_coefficient_all_loads_after_losses: 0.60,
            tension_after_losses: ClosureJointTensionLimits::default(),
            check_final_service_i_tension: false,
            tension_stress_limit_service_i_permanent_loads_only: TensionStressLimit::from_ksi(
                0.19, None,
            ),
            compression_stress_coefficient_fatigue: 0.40,
        }
    }
}

impl CriteriaModule for ClosureJointCriteria {
    const UNIT_NAME: &'static str = "ClosureJointCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Stress Limits for Concrete - Closure Joints";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.begin_unit("BeforeLosses", 1.0)?;
        ar.float(
            "CompressionStressCoefficient",
            &mut self.compression_stress_coefficient_before_losses,
        )?;
        self.tension_before_losses.exchange(ar)?;
        ar.end_unit()?;

        let after_losses = ar.begin_unit("AfterLosses", 2.0)?;
        ar.float(
            "CompressionStressCoefficient_PermanentLoadsOnly",
            &mut self.compression_stress_coefficient_permanent_loads_only_after_losses,
        )?;
        ar.float(
            "CompressionStressCoefficient_AllLoads",
            &mut self.compression_stress_coefficient_all_loads_after_losses,
        )?;
        self.tension_after_losses.exchange(ar)?;
        if after_losses > 1.0 {
            ar.begin_unit("OptionalFinalTensionStressLimit", 1.0)?;
            ar.bool(
                "bCheckFinalServiceITension",
                &mut self.check_final_service_i_tension,
            )?;
            self.tension_stress_limit_service_i_permanent_loads_only
                .exchange(ar, "TensionStressLimit_ServiceI_PermanentLoadsOnly")?;
            ar.end_unit()?;
        }
        ar.end_unit()?;

        ar.begin_unit("Fatigue", 1.0)?;
        ar.float(
            "CompressionStressCoefficient",
            &mut self.compression_stress_coefficient_fatigue,
        )?;
        ar.end_unit()
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);

        let before = !is_equal(
            self.compression_stress_coefficient_before_losses,
            other.compression_stress_coefficient_before_losses,
        ) || !self.tension_before_losses.is_equal(&other.tension_before_losses);
        if d.group(
            before,
            "Closure Joint Stress Limits for Temporary Stresses before Losses are different",
        ) {
            return false;
        }

        let after = !is_equal(
            self.compression_stress_coefficient_permanent_loads_only_after_losses,
            other.compression_stress_coefficient_permanent_loads_only_after_losses,
        ) || !is_equal(
            self.compression_stress_coefficient_all_loads_after_losses,
            other.compression_stress_coefficient_all_loads_after_losses,
        ) || !self.tension_after_losses.is_equal(&other.tension_after_losses)
            || self.check_final_service_i_tension != other.check_final_service_i_tension
            || (self.check_final_service_i_tension
                && !self
                    .tension_stress_limit_service_i_permanent_loads_only
                    .is_equal(&other.tension_stress_limit_service_i_permanent_loads_only));
        if d.group(
            after,
            "Closure Joint Stress Limits at Service Limit State after Losses are different",
        ) {
            return false;
        }

        d.group(
            !is_equal(
                self.compression_stress_coefficient_fatigue,
                other.compression_stress_coefficient_fatigue,
            ),
            "Closure Joint Allowable Concrete Stress at Fatigue Limit State are different",
        );
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{labels, round_trip};
    use speclib_store::{Entry, UnitReader, UnitWriter};

    #[test]
    fn round_trip_with_optional_limit() {
        let c = ClosureJointCriteria {
            check_final_service_i_tension: true,
            ..Default::default()
        };
        assert_eq!(round_trip(&c), c);
    }

    #[test]
    fn each_stage_reported_once() {
        let a = ClosureJointCriteria::default();
        let mut b = a.clone();
        b.tension_before_losses.in_ptz_with_reinforcement = TensionStressLimit::new(1.0);
        b.tension_after_losses.other_areas_with_reinforcement = TensionStressLimit::new(1.0);
        b.compression_stress_coefficient_fatigue = 0.5;
        assert_eq!(labels(&a, &b, Edition::LATEST).len(), 3);
    }

    #[test]
    fn after_losses_version_one_skips_optional_limit() {
        let mut w = UnitWriter::new();
        ClosureJointCriteria {
            check_final_service_i_tension: true,
            ..Default::default()
        }
        .save(&mut w)
        .unwrap();
        let mut root = w.finish().unwrap();
        for entry in &mut root.entries {
            if let Entry::Unit(unit) = entry {
                if unit.name == "AfterLosses" {
                    unit.version = 1.0;
                    unit.entries
                        .retain(|e| !matches!(e, Entry::Unit(u) if u.name == "OptionalFinalTensionStressLimit"));
                }
            }
        }
        let mut r = UnitReader::new(&root);
        let loaded = ClosureJointCriteria::read(&mut r).unwrap();
        assert!(!loaded.check_final_service_i_tension);
    }
}
