//! Creep durations, camber variability, and curing.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};
use crate::tolerance::{all_equal, is_equal};

stored_enum! {
    pub enum CuringMethod {
        Normal = 0 => "Normal",
        #[default]
        Accelerated = 1 => "Accelerated",
    }
}

/// Times are in days.
#[derive(Debug, Clone, PartialEq)]
pub struct CreepCriteria {
    pub xfer_time: f64,
    pub creep_duration1_min: f64,
    pub creep_duration1_max: f64,
    pub creep_duration2_min: f64,
    pub creep_duration2_max: f64,
    pub total_creep_duration: f64,
    /// Fraction of computed camber used for the lower and upper bounds.
    pub camber_variability: f64,
    pub curing_method: CuringMethod,
    /// Days of normal curing equivalent to one day of accelerated curing.
    pub curing_method_time_adjustment_factor: f64,
}

impl Default for CreepCriteria {
    fn default() -> Self {
        Self {
            xfer_time: 1.0,
            creep_duration1_min: 10.0,
            creep_duration1_max: 40.0,
            creep_duration2_min: 90.0,
            creep_duration2_max: 120.0,
            total_creep_duration: 2000.0,
            camber_variability: 0.5,
            curing_method: CuringMethod::Accelerated,
            curing_method_time_adjustment_factor: 7.0,
        }
    }
}

impl CreepCriteria {
    fn durations(&self) -> [f64; 6] {
        [
            self.xfer_time,
            self.creep_duration1_min,
            self.creep_duration1_max,
            self.creep_duration2_min,
            self.creep_duration2_max,
            self.total_creep_duration,
        ]
    }
}

impl CriteriaModule for CreepCriteria {
    const UNIT_NAME: &'static str = "CreepCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Creep and Camber";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.float("XferTime", &mut self.xfer_time)?;
        ar.float("CreepDuration1Min", &mut self.creep_duration1_min)?;
        ar.float("CreepDuration1Max", &mut self.creep_duration1_max)?;
        ar.float("CreepDuration2Min", &mut self.creep_duration2_min)?;
        ar.float("CreepDuration2Max", &mut self.creep_duration2_max)?;
        ar.float("TotalCreepDuration", &mut self.total_creep_duration)?;
        ar.float("CamberVariability", &mut self.camber_variability)?;
        exchange_enum(ar, "CuringMethod", &mut self.curing_method)?;
        ar.float(
            "CuringMethodTimeAdjustmentFactor",
            &mut self.curing_method_time_adjustment_factor,
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
        let durations = !all_equal(&self.durations(), &other.durations());
        if d.group(durations, "Creep parameters are different") {
            return false;
        }
        if d.group(
            !is_equal(self.camber_variability, other.camber_variability),
            "Camber Variability is different",
        ) {
            return false;
        }
        let curing = self.curing_method != other.curing_method
            || !is_equal(
                self.curing_method_time_adjustment_factor,
                other.curing_method_time_adjustment_factor,
            );
        d.group(curing, "Curing Method parameters are different");
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_same, labels, round_trip};

    #[test]
    fn defaults_round_trip() {
        let a = CreepCriteria::default();
        assert_eq!(round_trip(&a), a);
        assert_same(&a, &a);
    }

    #[test]
    fn every_group_reported() {
        let a = CreepCriteria::default();
        let b = CreepCriteria {
            total_creep_duration: 1000.0,
            camber_variability: 0.4,
            curing_method: CuringMethod::Normal,
            ..Default::default()
        };
        assert_eq!(
            labels(&a, &b, Edition::LATEST),
            [
                "Creep parameters are different",
                "Camber Variability is different",
                "Curing Method parameters are different"
            ]
        );
        assert_eq!(labels(&b, &a, Edition::LATEST).len(), 3);
    }
}
