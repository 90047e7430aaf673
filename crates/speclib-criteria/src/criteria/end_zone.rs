//! Splitting and confinement reinforcement in girder end zones.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::tolerance::is_equal;

#[derive(Debug, Clone, PartialEq)]
pub struct EndZoneCriteria {
    pub check_splitting: bool,
    pub design_splitting: bool,
    pub check_confinement: bool,
    pub design_confinement: bool,
    /// Splitting zone length is h divided by this factor.
    pub splitting_zone_length_factor: f64,
}

impl Default for EndZoneCriteria {
    fn default() -> Self {
        Self {
            check_splitting: true,
            design_splitting: true,
            check_confinement: true,
            design_confinement: true,
            splitting_zone_length_factor: 4.0,
        }
    }
}

impl CriteriaModule for EndZoneCriteria {
    const UNIT_NAME: &'static str = "EndZoneCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "End Zone Reinforcement";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.bool("bCheckSplitting", &mut self.check_splitting)?;
        ar.bool("bDesignSplitting", &mut self.design_splitting)?;
        ar.float("SplittingZoneLengthFactor", &mut self.splitting_zone_length_factor)?;
        ar.bool("bCheckConfinement", &mut self.check_confinement)?;
        ar.bool("bDesignConfinement", &mut self.design_confinement)
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        let splitting = self.check_splitting != other.check_splitting
            || self.design_splitting != other.design_splitting
            || (self.check_splitting
                && !is_equal(
                    self.splitting_zone_length_factor,
                    other.splitting_zone_length_factor,
                ));
        if d.group(splitting, "Splitting Zone requirements are different") {
            return false;
        }
        let confinement = self.check_confinement != other.check_confinement
            || self.design_confinement != other.design_confinement;
        d.group(confinement, "Confinement Zone requirements are different");
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{labels, round_trip};

    #[test]
    fn groups_are_independent() {
        let a = EndZoneCriteria::default();
        let b = EndZoneCriteria {
            splitting_zone_length_factor: 5.0,
            design_confinement: false,
            ..Default::default()
        };
        assert_eq!(
            labels(&a, &b, Edition::LATEST),
            [
                "Splitting Zone requirements are different",
                "Confinement Zone requirements are different"
            ]
        );
        let mut diffs = Vec::new();
        assert!(!a.compare(&b, Edition::LATEST, &mut diffs, true));
        assert_eq!(diffs.len(), 1);
        assert_eq!(round_trip(&b), b);
    }
}
