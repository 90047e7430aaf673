//! Bearing design alerts and reactions.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::CriteriaModule;
use crate::tolerance::is_equal;

#[derive(Debug, Clone, PartialEq)]
pub struct BearingCriteria {
    pub alert_tapered_sole_plate_requirement: bool,
    /// Slope above which a tapered sole plate is required.
    pub tapered_sole_plate_inclination_threshold: f64,
    /// Include dynamic load allowance in bearing reactions.
    pub use_impact_for_bearing_reactions: bool,
}

impl Default for BearingCriteria {
    fn default() -> Self {
        Self {
            alert_tapered_sole_plate_requirement: true,
            tapered_sole_plate_inclination_threshold: 0.01,
            use_impact_for_bearing_reactions: false,
        }
    }
}

impl CriteriaModule for BearingCriteria {
    const UNIT_NAME: &'static str = "BearingCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Bearings";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.bool(
            "bAlertTaperedSolePlateRequirement",
            &mut self.alert_tapered_sole_plate_requirement,
        )?;
        ar.float(
            "TaperedSolePlateInclinationThreshold",
            &mut self.tapered_sole_plate_inclination_threshold,
        )?;
        ar.bool(
            "bUseImpactForBearingReactions",
            &mut self.use_impact_for_bearing_reactions,
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
        let sole_plate = self.alert_tapered_sole_plate_requirement
            != other.alert_tapered_sole_plate_requirement
            || (self.alert_tapered_sole_plate_requirement
                && !is_equal(
                    self.tapered_sole_plate_inclination_threshold,
                    other.tapered_sole_plate_inclination_threshold,
                ));
        if d.group(sole_plate, "Tapered Sole Plate requirements are different") {
            return false;
        }
        if self.use_impact_for_bearing_reactions != other.use_impact_for_bearing_reactions {
            d.push(DifferenceItem::bool(
                "Dynamic load allowance (impact) for bearing reactions is different",
                self.use_impact_for_bearing_reactions,
                other.use_impact_for_bearing_reactions,
            ));
        }
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difference::DifferencePayload;
    use crate::testing::{labels, round_trip};

    #[test]
    fn impact_is_the_only_difference() {
        let a = BearingCriteria {
            alert_tapered_sole_plate_requirement: true,
            tapered_sole_plate_inclination_threshold: 0.05,
            use_impact_for_bearing_reactions: false,
        };
        let b = BearingCriteria {
            use_impact_for_bearing_reactions: true,
            ..a.clone()
        };
        let mut diffs = Vec::new();
        assert!(!a.compare(&b, Edition::LATEST, &mut diffs, false));
        assert_eq!(diffs.len(), 1);
        assert!(diffs[0].item.contains("Dynamic load allowance"));
        assert_eq!(
            diffs[0].payload,
            DifferencePayload::Bool { old: false, new: true }
        );

        let mut reversed = Vec::new();
        assert!(!b.compare(&a, Edition::LATEST, &mut reversed, true));
        assert_eq!(
            reversed[0].payload,
            DifferencePayload::Bool { old: true, new: false }
        );
    }

    #[test]
    fn threshold_guarded_by_alert() {
        let a = BearingCriteria {
            alert_tapered_sole_plate_requirement: false,
            ..Default::default()
        };
        let b = BearingCriteria {
            tapered_sole_plate_inclination_threshold: 0.02,
            ..a.clone()
        };
        assert!(labels(&a, &b, Edition::LATEST).is_empty());
        assert_eq!(round_trip(&b), b);
    }
}
