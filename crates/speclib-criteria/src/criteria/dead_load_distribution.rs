//! Distribution of railing system and overlay dead loads to girders.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_count, exchange_enum, stored_enum, CriteriaModule};

stored_enum! {
    pub enum TrafficBarrierDistribution {
        AllGirders = 0 => "Evenly to all girders",
        #[default]
        NearestGirders = 1 => "Evenly to nearest girders",
        NearestMatingSurfaces = 2 => "Evenly to nearest mating surfaces",
        NearestWebs = 3 => "Evenly to nearest webs",
    }
}

stored_enum! {
    pub enum OverlayLoadDistribution {
        #[default]
        Uniform = 0 => "Uniformly to all girders",
        TributaryArea = 1 => "By tributary area",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeadLoadDistributionCriteria {
    pub traffic_barrier_distribution: TrafficBarrierDistribution,
    pub max_girders_traffic_barrier: u32,
    pub max_girders_utility: u32,
    pub overlay_load_distribution: OverlayLoadDistribution,
}

impl Default for DeadLoadDistributionCriteria {
    fn default() -> Self {
        Self {
            traffic_barrier_distribution: TrafficBarrierDistribution::NearestGirders,
            max_girders_traffic_barrier: 4,
            max_girders_utility: 4,
            overlay_load_distribution: OverlayLoadDistribution::Uniform,
        }
    }
}

impl CriteriaModule for DeadLoadDistributionCriteria {
    const UNIT_NAME: &'static str = "DeadLoadDistributionCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Dead Load Distribution";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        exchange_enum(
            ar,
            "TrafficBarrierDistribution",
            &mut self.traffic_barrier_distribution,
        )?;
        exchange_count(
            ar,
            "MaxGirdersTrafficBarrier",
            &mut self.max_girders_traffic_barrier,
        )?;
        exchange_count(ar, "MaxGirdersUtility", &mut self.max_girders_utility)?;
        exchange_enum(
            ar,
            "OverlayLoadDistribution",
            &mut self.overlay_load_distribution,
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
        let railing = self.traffic_barrier_distribution != other.traffic_barrier_distribution
            || self.max_girders_traffic_barrier != other.max_girders_traffic_barrier
            || self.max_girders_utility != other.max_girders_utility;
        if d.group(railing, "Railing System Distribution requirements are different") {
            return false;
        }
        d.group(
            self.overlay_load_distribution != other.overlay_load_distribution,
            "Overlay Load Distribution methods are different",
        );
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{labels, round_trip};

    #[test]
    fn railing_and_overlay() {
        let a = DeadLoadDistributionCriteria::default();
        let b = DeadLoadDistributionCriteria {
            max_girders_utility: 6,
            overlay_load_distribution: OverlayLoadDistribution::TributaryArea,
            ..Default::default()
        };
        assert_eq!(labels(&a, &b, Edition::LATEST).len(), 2);
        assert_eq!(round_trip(&b), b);
    }
}
