//! Plant handling weight limit.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::tolerance::is_equal;
use crate::units::KIP;

#[derive(Debug, Clone, PartialEq)]
pub struct PlantHandlingCriteria {
    pub check: bool,
    /// N
    pub weight_limit: f64,
}

impl Default for PlantHandlingCriteria {
    fn default() -> Self {
        Self {
            check: false,
            weight_limit: 200.0 * KIP,
        }
    }
}

impl CriteriaModule for PlantHandlingCriteria {
    const UNIT_NAME: &'static str = "PlantHandlingCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Plant Handling";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.bool("bCheck", &mut self.check)?;
        ar.float("WeightLimit", &mut self.weight_limit)
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        let differs = self.check != other.check
            || (self.check && !is_equal(self.weight_limit, other.weight_limit));
        d.group(differs, "Plant Handling Weight Limit requirements are different");
        d.finish()
    }
}
