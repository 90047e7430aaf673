//! Stability of girders inclined by roadway superelevation.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::tolerance::is_equal;

#[derive(Debug, Clone, PartialEq)]
pub struct GirderInclinationCriteria {
    pub check: bool,
    /// Deduction from the bearing pad width, m.
    pub bearing_pad_deduction: f64,
    /// Minimum factor of safety against rollover.
    pub factor_of_safety: f64,
}

impl Default for GirderInclinationCriteria {
    fn default() -> Self {
        Self {
            check: false,
            bearing_pad_deduction: 0.0,
            factor_of_safety: 1.2,
        }
    }
}

impl CriteriaModule for GirderInclinationCriteria {
    const UNIT_NAME: &'static str = "GirderInclinationCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Girder Inclination";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.bool("bCheck", &mut self.check)?;
        ar.float("BrgPadDeduction", &mut self.bearing_pad_deduction)?;
        ar.float("FS", &mut self.factor_of_safety)
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
            || (self.check
                && (!is_equal(self.bearing_pad_deduction, other.bearing_pad_deduction)
                    || !is_equal(self.factor_of_safety, other.factor_of_safety)));
        d.group(differs, "Inclined Girder requirements are different");
        d.finish()
    }
}
