//! Thermal movement design factor.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::tolerance::is_equal;

#[derive(Debug, Clone, PartialEq)]
pub struct ThermalMovementCriteria {
    /// Fraction of the full thermal range used for design movement.
    pub thermal_movement_factor: f64,
}

impl Default for ThermalMovementCriteria {
    fn default() -> Self {
        Self {
            thermal_movement_factor: 0.65,
        }
    }
}

impl CriteriaModule for ThermalMovementCriteria {
    const UNIT_NAME: &'static str = "ThermalMovementCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Thermal Movement";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.float("ThermalMovementFactor", &mut self.thermal_movement_factor)
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        d.group(
            !is_equal(self.thermal_movement_factor, other.thermal_movement_factor),
            "Thermal Movement parameters are different",
        );
        d.finish()
    }
}
