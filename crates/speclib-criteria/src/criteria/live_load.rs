//! Pedestrian live load on sidewalks.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::tolerance::is_equal;
use crate::units::{FOOT, KSF};

#[derive(Debug, Clone, PartialEq)]
pub struct LiveLoadCriteria {
    /// Pa
    pub pedestrian_load: f64,
    /// Sidewalks narrower than this carry no pedestrian load. m
    pub min_sidewalk_width: f64,
}

impl Default for LiveLoadCriteria {
    fn default() -> Self {
        Self {
            pedestrian_load: 0.075 * KSF,
            min_sidewalk_width: 2.0 * FOOT,
        }
    }
}

impl CriteriaModule for LiveLoadCriteria {
    const UNIT_NAME: &'static str = "LiveLoadCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Live Loads";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.float("PedestrianLoad", &mut self.pedestrian_load)?;
        ar.float("MinSidewalkWidth", &mut self.min_sidewalk_width)
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        let differs = !is_equal(self.pedestrian_load, other.pedestrian_load)
            || !is_equal(self.min_sidewalk_width, other.min_sidewalk_width);
        d.group(differs, "Pedestrian Live Load requirements are different");
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{labels, round_trip};

    #[test]
    fn pedestrian_load() {
        let a = LiveLoadCriteria::default();
        assert!((a.pedestrian_load - 3591.0).abs() < 0.1);
        let b = LiveLoadCriteria {
            pedestrian_load: 0.085 * KSF,
            ..Default::default()
        };
        assert_eq!(labels(&a, &b, Edition::LATEST).len(), 1);
        assert_eq!(round_trip(&b), b);
    }
}
