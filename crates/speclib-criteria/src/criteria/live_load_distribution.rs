//! Live load distribution factor method and range of applicability.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};
use crate::tolerance::is_equal;
use crate::units::DEGREE;

stored_enum! {
    pub enum LldfMethod {
        #[default]
        Lrfd = 0 => "AASHTO LRFD",
        WsDot = 1 => "WSDOT",
        TxDot = 2 => "TxDOT",
        LeverRule = 3 => "Lever rule",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiveLoadDistributionCriteria {
    pub lldf_method: LldfMethod,
    pub ignore_skew_reduction_for_moment: bool,
    /// rad
    pub max_angular_deviation_between_girders: f64,
    pub min_girder_stiffness_ratio: f64,
    /// Fraction of the span where girder spacing is measured.
    pub girder_spacing_location: f64,
    pub use_rigid_method: bool,
    pub include_dual_tandem: bool,
    pub limit_distribution_factors_to_lanes_beams: bool,
    pub exterior_lldf_gt_adjacent_interior: bool,
}

impl Default for LiveLoadDistributionCriteria {
    fn default() -> Self {
        Self {
            lldf_method: LldfMethod::Lrfd,
            ignore_skew_reduction_for_moment: false,
            max_angular_deviation_between_girders: 5.0 * DEGREE,
            min_girder_stiffness_ratio: 0.9,
            girder_spacing_location: 0.5,
            use_rigid_method: false,
            include_dual_tandem: true,
            limit_distribution_factors_to_lanes_beams: false,
            exterior_lldf_gt_adjacent_interior: false,
        }
    }
}

impl CriteriaModule for LiveLoadDistributionCriteria {
    const UNIT_NAME: &'static str = "LiveLoadDistributionCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Live Load Distribution Factors";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        exchange_enum(ar, "LldfMethod", &mut self.lldf_method)?;
        ar.bool(
            "bIgnoreSkewReductionForMoment",
            &mut self.ignore_skew_reduction_for_moment,
        )?;
        ar.float(
            "MaxAngularDeviationBetweenGirders",
            &mut self.max_angular_deviation_between_girders,
        )?;
        ar.float(
            "MinGirderStiffnessRatio",
            &mut self.min_girder_stiffness_ratio,
        )?;
        ar.float("GirderSpacingLocation", &mut self.girder_spacing_location)?;
        ar.bool("bUseRigidMethod", &mut self.use_rigid_method)?;
        ar.bool("bIncludeDualTandem", &mut self.include_dual_tandem)?;
        ar.bool(
            "bLimitDistributionFactorsToLanesBeams",
            &mut self.limit_distribution_factors_to_lanes_beams,
        )?;
        ar.bool(
            "bExteriorLiveLoadDistributionGTAdjacentInteriorRule",
            &mut self.exterior_lldf_gt_adjacent_interior,
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
        let method = self.lldf_method != other.lldf_method
            || self.ignore_skew_reduction_for_moment != other.ignore_skew_reduction_for_moment
            || self.use_rigid_method != other.use_rigid_method
            || self.include_dual_tandem != other.include_dual_tandem
            || self.limit_distribution_factors_to_lanes_beams
                != other.limit_distribution_factors_to_lanes_beams
            || self.exterior_lldf_gt_adjacent_interior != other.exterior_lldf_gt_adjacent_interior;
        if d.group(method, "Live Load Distribution Factor methods are different") {
            return false;
        }
        let range = !is_equal(
            self.max_angular_deviation_between_girders,
            other.max_angular_deviation_between_girders,
        ) || !is_equal(
            self.min_girder_stiffness_ratio,
            other.min_girder_stiffness_ratio,
        ) || !is_equal(self.girder_spacing_location, other.girder_spacing_location);
        d.group(
            range,
            "Live Load Distribution Factor range of applicability requirements are different",
        );
        d.finish()
    }
}
