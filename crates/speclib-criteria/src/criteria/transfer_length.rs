//! Prestress transfer length computation.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};

stored_enum! {
    pub enum TransferLengthType {
        #[default]
        UsingSpecification = 0 => "Using the design specification",
        MinuteValue = 1 => "Minute value (zero length)",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferLengthCriteria {
    pub calculation_method: TransferLengthType,
}

impl CriteriaModule for TransferLengthCriteria {
    const UNIT_NAME: &'static str = "TransferLengthCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Transfer Length";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        exchange_enum(ar, "TransferLengthType", &mut self.calculation_method)
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
            self.calculation_method != other.calculation_method,
            "Prestress Transfer Length methods are different",
        );
        d.finish()
    }
}
