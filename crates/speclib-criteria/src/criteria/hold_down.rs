//! Hold-down force limits for harped strands.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};
use crate::tolerance::is_equal;
use crate::units::KIP;

stored_enum! {
    /// Whether the force limit applies to the whole strand group or per strand.
    pub enum HoldDownForceType {
        #[default]
        Total = 0 => "Total",
        PerStrand = 1 => "Per strand",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoldDownCriteria {
    pub check: bool,
    pub design: bool,
    pub force_type: HoldDownForceType,
    /// N
    pub force_limit: f64,
    /// Friction factor applied to the hold-down force.
    pub friction: f64,
}

impl Default for HoldDownCriteria {
    fn default() -> Self {
        Self {
            check: true,
            design: false,
            force_type: HoldDownForceType::Total,
            force_limit: 200.0 * KIP,
            friction: 0.0,
        }
    }
}

impl CriteriaModule for HoldDownCriteria {
    const UNIT_NAME: &'static str = "HoldDownCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Hold Down Force";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.bool("bCheck", &mut self.check)?;
        ar.bool("bDesign", &mut self.design)?;
        exchange_enum(ar, "HoldDownForceType", &mut self.force_type)?;
        ar.float("HoldDownForce", &mut self.force_limit)?;
        ar.float("HoldDownFriction", &mut self.friction)
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
                && (self.force_type != other.force_type
                    || !is_equal(self.force_limit, other.force_limit)
                    || !is_equal(self.friction, other.friction)));
        d.group(differs, "Hold Down Force requirements are different");
        d.finish()
    }
}
