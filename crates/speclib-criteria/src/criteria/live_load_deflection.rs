//! Live load deflection limit, expressed as span/n.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::tolerance::is_equal;

#[derive(Debug, Clone, PartialEq)]
pub struct LiveLoadDeflectionCriteria {
    pub check: bool,
    pub deflection_limit: f64,
}

impl Default for LiveLoadDeflectionCriteria {
    fn default() -> Self {
        Self {
            check: true,
            deflection_limit: 800.0,
        }
    }
}

impl CriteriaModule for LiveLoadDeflectionCriteria {
    const UNIT_NAME: &'static str = "LiveLoadDeflectionCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Live Load Deflections";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.bool("bCheck", &mut self.check)?;
        ar.float("DeflectionLimit", &mut self.deflection_limit)
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
            || (self.check && !is_equal(self.deflection_limit, other.deflection_limit));
        d.group(differs, "Live Load Deflection requirements are different");
        d.finish()
    }
}
