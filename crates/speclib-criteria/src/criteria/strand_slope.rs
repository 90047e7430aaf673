//! Maximum harped strand slopes by strand diameter.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::tolerance::is_equal;

/// Slopes are expressed as 1:n.
#[derive(Debug, Clone, PartialEq)]
pub struct StrandSlopeCriteria {
    pub check: bool,
    pub design: bool,
    /// 0.5 in. strands
    pub max_slope_05: f64,
    /// 0.6 in. strands
    pub max_slope_06: f64,
    /// 0.7 in. strands
    pub max_slope_07: f64,
}

impl Default for StrandSlopeCriteria {
    fn default() -> Self {
        Self {
            check: true,
            design: false,
            max_slope_05: 6.0,
            max_slope_06: 8.0,
            max_slope_07: 10.0,
        }
    }
}

impl CriteriaModule for StrandSlopeCriteria {
    const UNIT_NAME: &'static str = "StrandSlopeCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Strand Slope";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.bool("bCheck", &mut self.check)?;
        ar.bool("bDesign", &mut self.design)?;
        ar.float("MaxSlope05", &mut self.max_slope_05)?;
        ar.float("MaxSlope06", &mut self.max_slope_06)?;
        ar.float("MaxSlope07", &mut self.max_slope_07)
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
            || self.design != other.design
            || (self.check
                && (!is_equal(self.max_slope_05, other.max_slope_05)
                    || !is_equal(self.max_slope_06, other.max_slope_06)
                    || !is_equal(self.max_slope_07, other.max_slope_07)));
        d.group(differs, "Strand Slope requirements are different");
        d.finish()
    }
}
