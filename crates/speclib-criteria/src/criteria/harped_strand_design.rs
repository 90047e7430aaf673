//! Strategy for filling harped strand positions during design.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};

stored_enum! {
    pub enum StrandFillType {
        GridOrder = 0 => "Fill in grid order",
        #[default]
        MinimizeHarping = 1 => "Minimize harping",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarpedStrandDesignCriteria {
    pub strand_fill_type: StrandFillType,
}

impl CriteriaModule for HarpedStrandDesignCriteria {
    const UNIT_NAME: &'static str = "HarpedStrandDesignCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Harped Strand Design";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        exchange_enum(ar, "StrandFillType", &mut self.strand_fill_type)
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
            self.strand_fill_type != other.strand_fill_type,
            "Harped Strand Design strategies are different",
        );
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{labels, round_trip};

    #[test]
    fn fill_type() {
        let a = HarpedStrandDesignCriteria::default();
        let b = HarpedStrandDesignCriteria {
            strand_fill_type: StrandFillType::GridOrder,
        };
        assert_eq!(labels(&a, &b, Edition::LATEST).len(), 1);
        assert_eq!(round_trip(&b), b);
    }
}
