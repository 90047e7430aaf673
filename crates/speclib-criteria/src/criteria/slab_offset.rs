//! Slab offset ("A" dimension) checking, design, and rounding.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};
use crate::tolerance::is_equal;
use crate::units::INCH;

stored_enum! {
    pub enum SlabOffsetRoundingMethod {
        #[default]
        RoundNearest = 0 => "Round to nearest",
        RoundUp = 1 => "Round up",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlabOffsetCriteria {
    pub check: bool,
    pub design: bool,
    pub rounding_method: SlabOffsetRoundingMethod,
    /// Rounding increment, m.
    pub slab_offset_tolerance: f64,
    /// m
    pub finished_elevation_tolerance: f64,
}

impl Default for SlabOffsetCriteria {
    fn default() -> Self {
        Self {
            check: true,
            design: true,
            rounding_method: SlabOffsetRoundingMethod::RoundNearest,
            slab_offset_tolerance: 0.25 * INCH,
            finished_elevation_tolerance: 0.25 * INCH,
        }
    }
}

impl CriteriaModule for SlabOffsetCriteria {
    const UNIT_NAME: &'static str = "SlabOffsetCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Slab Offset";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.bool("bCheck", &mut self.check)?;
        ar.bool("bDesign", &mut self.design)?;
        exchange_enum(ar, "RoundingMethod", &mut self.rounding_method)?;
        ar.float("SlabOffsetTolerance", &mut self.slab_offset_tolerance)?;
        ar.float(
            "FinishedElevationTolerance",
            &mut self.finished_elevation_tolerance,
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
        let offset = self.check != other.check
            || self.design != other.design
            || self.rounding_method != other.rounding_method
            || !is_equal(self.slab_offset_tolerance, other.slab_offset_tolerance);
        if d.group(offset, "Slab Offset requirements are different") {
            return false;
        }
        d.group(
            !is_equal(
                self.finished_elevation_tolerance,
                other.finished_elevation_tolerance,
            ),
            "Finished Elevation Tolerance requirements are different",
        );
        d.finish()
    }
}
