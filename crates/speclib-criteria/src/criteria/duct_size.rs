//! Duct size limits relative to tendon area and web width.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::tolerance::is_equal;

#[derive(Debug, Clone, PartialEq)]
pub struct DuctSizeCriteria {
    /// Minimum duct area / tendon area for tendons installed by pushing.
    pub duct_area_push_ratio: f64,
    /// Minimum duct area / tendon area for tendons installed by pulling.
    pub duct_area_pull_ratio: f64,
    /// Maximum duct diameter / web thickness.
    pub duct_diameter_ratio: f64,
}

impl Default for DuctSizeCriteria {
    fn default() -> Self {
        Self {
            duct_area_push_ratio: 2.0,
            duct_area_pull_ratio: 2.5,
            duct_diameter_ratio: 0.4,
        }
    }
}

impl CriteriaModule for DuctSizeCriteria {
    const UNIT_NAME: &'static str = "DuctSizeCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Duct Size";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.float("DuctAreaPushRatio", &mut self.duct_area_push_ratio)?;
        ar.float("DuctAreaPullRatio", &mut self.duct_area_pull_ratio)?;
        ar.float("DuctDiameterRatio", &mut self.duct_diameter_ratio)
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        let differs = !is_equal(self.duct_area_push_ratio, other.duct_area_push_ratio)
            || !is_equal(self.duct_area_pull_ratio, other.duct_area_pull_ratio)
            || !is_equal(self.duct_diameter_ratio, other.duct_diameter_ratio);
        d.group(differs, "Duct Size requirements are different");
        d.finish()
    }
}
