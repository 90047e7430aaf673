//! Minimum clearance below the bottom flange for girder access.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::tolerance::is_equal;
use crate::units::FOOT;

#[derive(Debug, Clone, PartialEq)]
pub struct BottomFlangeClearanceCriteria {
    pub check: bool,
    /// m
    pub min_clearance: f64,
}

impl Default for BottomFlangeClearanceCriteria {
    fn default() -> Self {
        Self {
            check: false,
            min_clearance: 1.5 * FOOT,
        }
    }
}

impl CriteriaModule for BottomFlangeClearanceCriteria {
    const UNIT_NAME: &'static str = "BottomFlangeClearanceCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Bottom Flange Clearance";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.bool("bCheck", &mut self.check)?;
        ar.float("MinClearance", &mut self.min_clearance)
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
            || (self.check && !is_equal(self.min_clearance, other.min_clearance));
        d.group(differs, "Bottom Flange Clearance requirements are different");
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_same, labels, round_trip};

    #[test]
    fn check_flag_is_always_compared() {
        let a = BottomFlangeClearanceCriteria::default();
        let b = BottomFlangeClearanceCriteria {
            check: true,
            ..Default::default()
        };
        assert_eq!(labels(&a, &b, Edition::LATEST).len(), 1);
        assert_same(
            &a,
            &BottomFlangeClearanceCriteria {
                min_clearance: 2.0,
                ..Default::default()
            },
        );
        assert_eq!(round_trip(&b), b);
    }
}
