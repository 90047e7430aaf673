//! Haunch dead load and section property treatment.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};
use crate::tolerance::is_equal;

stored_enum! {
    pub enum HaunchLoadComputationType {
        #[default]
        ZeroCamber = 0 => "Assume zero excess camber",
        AccountForCamber = 1 => "Account for excess camber",
    }
}

stored_enum! {
    pub enum HaunchAnalysisSectionPropertiesType {
        #[default]
        ZeroHaunch = 0 => "Ignore haunch depth",
        UniformHaunch = 1 => "Uniform haunch depth",
        ParabolicHaunch = 2 => "Parabolic haunch depth",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HaunchCriteria {
    pub haunch_load_computation_type: HaunchLoadComputationType,
    /// m
    pub haunch_load_camber_tolerance: f64,
    pub haunch_load_camber_factor: f64,
    pub haunch_analysis_section_properties_type: HaunchAnalysisSectionPropertiesType,
}

impl Default for HaunchCriteria {
    fn default() -> Self {
        Self {
            haunch_load_computation_type: HaunchLoadComputationType::ZeroCamber,
            haunch_load_camber_tolerance: 0.0,
            haunch_load_camber_factor: 1.0,
            haunch_analysis_section_properties_type: HaunchAnalysisSectionPropertiesType::ZeroHaunch,
        }
    }
}

impl CriteriaModule for HaunchCriteria {
    const UNIT_NAME: &'static str = "HaunchCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Haunch";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        exchange_enum(
            ar,
            "HaunchLoadComputationType",
            &mut self.haunch_load_computation_type,
        )?;
        ar.float(
            "HaunchLoadCamberTolerance",
            &mut self.haunch_load_camber_tolerance,
        )?;
        ar.float("HaunchLoadCamberFactor", &mut self.haunch_load_camber_factor)?;
        exchange_enum(
            ar,
            "HaunchAnalysisSectionPropertiesType",
            &mut self.haunch_analysis_section_properties_type,
        )
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        let load = self.haunch_load_computation_type != other.haunch_load_computation_type
            || (self.haunch_load_computation_type == HaunchLoadComputationType::AccountForCamber
                && (!is_equal(
                    self.haunch_load_camber_tolerance,
                    other.haunch_load_camber_tolerance,
                ) || !is_equal(
                    self.haunch_load_camber_factor,
                    other.haunch_load_camber_factor,
                )));
        if d.group(load, "Haunch Dead Load parameters are different") {
            return false;
        }
        d.group(
            self.haunch_analysis_section_properties_type
                != other.haunch_analysis_section_properties_type,
            "Haunch Analysis methods are different",
        );
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_same, labels, round_trip};

    #[test]
    fn camber_tolerance_ignored_for_zero_camber() {
        let a = HaunchCriteria::default();
        let b = HaunchCriteria {
            haunch_load_camber_tolerance: 0.01,
            ..Default::default()
        };
        assert_same(&a, &b);

        let a = HaunchCriteria {
            haunch_load_computation_type: HaunchLoadComputationType::AccountForCamber,
            ..a
        };
        let b = HaunchCriteria {
            haunch_load_computation_type: HaunchLoadComputationType::AccountForCamber,
            ..b
        };
        assert_eq!(
            labels(&a, &b, Edition::LATEST),
            ["Haunch Dead Load parameters are different"]
        );
    }

    #[test]
    fn analysis_method_round_trip() {
        let b = HaunchCriteria {
            haunch_analysis_section_properties_type:
                HaunchAnalysisSectionPropertiesType::ParabolicHaunch,
            ..Default::default()
        };
        assert_eq!(round_trip(&b), b);
        assert_eq!(
            labels(&HaunchCriteria::default(), &b, Edition::NinthEdition2020),
            ["Haunch Analysis methods are different"]
        );
    }
}
