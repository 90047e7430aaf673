//! Decoding of specification entries stored before the per-module layout.
//!
//! Entries older than [`MODERN_FORMAT_VERSION`](crate::entry::MODERN_FORMAT_VERSION)
//! are one flat unit whose property set grew release by release. Properties
//! are read in the order they were written; removed properties are skipped by
//! the cursor reader.
//!
//! Versions 44 through 53 were issued by two release branches at the same
//! time, so a field one branch added there may be missing from the other
//! branch's files. Those versions go through [`OverlapDecoder`], which treats
//! the branch-sensitive fields as optional. Every other version goes through
//! [`MainlineDecoder`].

use std::marker::PhantomData;

use serde::Serialize;
use speclib_store::{Archive, StoreError, UnitReader};
use tracing::{debug, warn};

use crate::concrete::{ConcreteArray, ConcreteType};
use crate::criteria::{
    HoldDownForceType, LimitStateConcreteStrength, LossMethod, PrincipalTensionStressCriteria,
    ShearCapacityMethod, SlabOffsetRoundingMethod, StrandStressStage, TrafficBarrierDistribution,
    TransferLengthType,
};
use crate::edition::{Edition, Units};
use crate::entry::SpecificationEntry;
use crate::module::{decode_enum, StoredEnum};
use crate::stress_limit::TensionStressLimit;
use crate::units::{FOOT, INCH, KIP, KSF, MILLIMETER, MPA};

/// First version of the overlap range.
pub const MIN_OVERLAP_VERSION: f64 = 44.0;

/// Last version of the overlap range.
pub const MAX_OVERLAP_VERSION: f64 = 53.0;

/// Values older entries stored in the specification that now belong to
/// per-project data. Surfaced once by a legacy load for the owning document
/// to take over.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RefactoredParameters {
    /// Present when the entry used general lump-sum losses.
    pub lump_sum_losses: Option<LumpSumLosses>,
    pub post_tensioning: Option<PostTensioningParameters>,
    pub old_haul_truck: Option<HaulTruckParameters>,
    pub ignore_range_of_applicability: Option<bool>,
    /// Structural analysis type code from entries before version 28.
    pub analysis_type: Option<i64>,
}

impl RefactoredParameters {
    /// `true` when nothing was surfaced.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Lump-sum prestress losses, Pa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LumpSumLosses {
    pub before_transfer: f64,
    pub after_transfer: f64,
    pub lifting: f64,
    pub shipping: f64,
    pub before_temporary_strand_removal: f64,
    pub after_temporary_strand_removal: f64,
    pub after_deck_placement: f64,
    pub after_sidl: f64,
    pub final_losses: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PostTensioningParameters {
    /// m
    pub anchor_set: f64,
    /// 1/m
    pub wobble_friction: f64,
    pub friction_coefficient: f64,
}

/// Haul truck description stored before version 56.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HaulTruckParameters {
    /// Distance between truck supports, m.
    pub support_distance: f64,
    /// m
    pub max_overhang: f64,
    /// 0 = lumped stiffness, 1 = stiffness from axle weights.
    pub roll_stiffness_method: i64,
    /// N·m/rad
    pub roll_stiffness: f64,
    /// N
    pub axle_weight_limit: f64,
    /// N·m/rad
    pub axle_stiffness: f64,
    /// N·m/rad
    pub min_roll_stiffness: f64,
    /// Height of girder bottom above the roadway, m.
    pub girder_height: f64,
    /// m
    pub roll_center_height: f64,
    /// Center-to-center wheel spacing, m.
    pub axle_width: f64,
    /// N
    pub max_weight: f64,
}

impl Default for HaulTruckParameters {
    fn default() -> Self {
        Self {
            support_distance: 0.0,
            max_overhang: 15.0 * FOOT,
            roll_stiffness_method: 0,
            roll_stiffness: 0.0,
            axle_weight_limit: 0.0,
            axle_stiffness: 0.0,
            min_roll_stiffness: 0.0,
            girder_height: 0.0,
            roll_center_height: 0.0,
            axle_width: 0.0,
            max_weight: 200.0 * KIP,
        }
    }
}

/// How one release line reads the flat legacy layout.
pub trait LegacyDecoder {
    const NAME: &'static str;

    /// `true` when the stirrup spacing is stored as one `MaxStirrupSpacing`.
    fn single_stirrup_spacing(version: f64) -> bool;

    fn branch_bool(r: &mut UnitReader<'_>, name: &str) -> Result<Option<bool>, StoreError>;

    fn branch_integer(r: &mut UnitReader<'_>, name: &str) -> Result<Option<i64>, StoreError>;

    fn branch_float(r: &mut UnitReader<'_>, name: &str) -> Result<Option<f64>, StoreError>;

    /// Open a unit that one release branch may not have written.
    fn branch_unit(
        r: &mut UnitReader<'_>,
        name: &str,
        max_version: f64,
    ) -> Result<Option<f64>, StoreError>;
}

/// Versions below 44 and above 53. Every documented field is required from
/// the version that introduced it.
#[derive(Debug)]
pub struct MainlineDecoder;

impl LegacyDecoder for MainlineDecoder {
    const NAME: &'static str = "mainline";

    fn single_stirrup_spacing(version: f64) -> bool {
        version < 46.0
    }

    fn branch_bool(r: &mut UnitReader<'_>, name: &str) -> Result<Option<bool>, StoreError> {
        r.read_bool(name).map(Some)
    }

    fn branch_integer(r: &mut UnitReader<'_>, name: &str) -> Result<Option<i64>, StoreError> {
        r.read_integer(name).map(Some)
    }

    fn branch_float(r: &mut UnitReader<'_>, name: &str) -> Result<Option<f64>, StoreError> {
        r.read_float(name).map(Some)
    }

    fn branch_unit(
        r: &mut UnitReader<'_>,
        name: &str,
        max_version: f64,
    ) -> Result<Option<f64>, StoreError> {
        r.begin_unit(name, max_version).map(Some)
    }
}

/// Versions 44 through 53. Branch-sensitive fields keep their defaults when
/// absent.
#[derive(Debug)]
pub struct OverlapDecoder;

fn absent<T>(name: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        debug!(field = name, "field not written by this release branch");
    }
    value
}

impl LegacyDecoder for OverlapDecoder {
    const NAME: &'static str = "overlap";

    fn single_stirrup_spacing(version: f64) -> bool {
        version < 46.0 || version == 50.0
    }

    fn branch_bool(r: &mut UnitReader<'_>, name: &str) -> Result<Option<bool>, StoreError> {
        Ok(absent(name, r.read_bool_opt(name)?))
    }

    fn branch_integer(r: &mut UnitReader<'_>, name: &str) -> Result<Option<i64>, StoreError> {
        Ok(absent(name, r.read_integer_opt(name)?))
    }

    fn branch_float(r: &mut UnitReader<'_>, name: &str) -> Result<Option<f64>, StoreError> {
        Ok(absent(name, r.read_float_opt(name)?))
    }

    fn branch_unit(
        r: &mut UnitReader<'_>,
        name: &str,
        max_version: f64,
    ) -> Result<Option<f64>, StoreError> {
        Ok(absent(name, r.try_begin_unit(name, max_version)?))
    }
}

/// Decode the body of a legacy entry unit that `reader` has already opened.
pub(crate) fn decode(
    reader: &mut UnitReader<'_>,
    version: f64,
) -> Result<(SpecificationEntry, RefactoredParameters), StoreError> {
    if (MIN_OVERLAP_VERSION..=MAX_OVERLAP_VERSION).contains(&version) {
        warn!(version, "entry is from the overlapping release range");
        Legacy::<OverlapDecoder>::new(reader, version).run()
    } else {
        Legacy::<MainlineDecoder>::new(reader, version).run()
    }
}

/// Legacy loss method codes, mapped to the current methods.
fn legacy_loss_method(code: i64) -> Result<LossMethod, StoreError> {
    let method = match code {
        0 | 6 => LossMethod::AashtoRefined,
        1 => LossMethod::AashtoLumpSum,
        3 => LossMethod::GeneralLumpSum,
        4 | 7 => LossMethod::WsdotLumpSum,
        5 => LossMethod::AashtoLumpSum2005,
        8 | 9 => LossMethod::WsdotRefined,
        10 => LossMethod::TxdotRefined2004,
        11 => LossMethod::TxdotRefined2013,
        12 => LossMethod::TimeStep,
        _ => return Err(invalid("LossMethod", "LossMethod", code)),
    };
    Ok(method)
}

/// Shear capacity method codes as stored before the per-module layout.
fn legacy_shear_capacity_method(code: i64) -> Result<ShearCapacityMethod, StoreError> {
    match code {
        0 => Ok(ShearCapacityMethod::BtEquations),
        1 => Ok(ShearCapacityMethod::Wsdot2001),
        2 => Ok(ShearCapacityMethod::VciVcw),
        3 => Ok(ShearCapacityMethod::BtTables),
        4 => Ok(ShearCapacityMethod::Wsdot2007),
        _ => Err(invalid("ShearCapacityMethod", ShearCapacityMethod::KIND, code)),
    }
}

/// The general method became the tables method with the 2008 interims, and
/// the WSDOT 2007 method became the general method.
fn shear_method_for_edition(method: ShearCapacityMethod, edition: Edition) -> ShearCapacityMethod {
    match method {
        ShearCapacityMethod::BtEquations if edition < Edition::FourthEditionWith2008Interims => {
            ShearCapacityMethod::BtTables
        }
        ShearCapacityMethod::Wsdot2007 if edition >= Edition::FourthEditionWith2008Interims => {
            ShearCapacityMethod::BtEquations
        }
        other => other,
    }
}

fn legacy_traffic_barrier_distribution(code: i64) -> Result<TrafficBarrierDistribution, StoreError> {
    match code {
        0 => Ok(TrafficBarrierDistribution::NearestGirders),
        1 => Ok(TrafficBarrierDistribution::NearestMatingSurfaces),
        2 => Ok(TrafficBarrierDistribution::NearestWebs),
        _ => Err(invalid(
            "Bs2TrafficBarrierDistributionType",
            TrafficBarrierDistribution::KIND,
            code,
        )),
    }
}

fn invalid(name: &str, kind: &'static str, value: i64) -> StoreError {
    StoreError::InvalidEnumValue {
        name: name.to_string(),
        kind,
        value,
    }
}

/// Sand- and all-lightweight slots, in the order legacy units list them.
const LEGACY_CONCRETE: [(ConcreteType, &str); 3] = [
    (ConcreteType::Normal, "Normal"),
    (ConcreteType::AllLightweight, "AllLightweight"),
    (ConcreteType::SandLightweight, "SandLightweight"),
];

struct Legacy<'r, 'a, D> {
    r: &'r mut UnitReader<'a>,
    v: f64,
    entry: SpecificationEntry,
    refactored: RefactoredParameters,
    _decoder: PhantomData<D>,
}

impl<'r, 'a, D: LegacyDecoder> Legacy<'r, 'a, D> {
    fn new(r: &'r mut UnitReader<'a>, v: f64) -> Self {
        debug!(version = v, decoder = D::NAME, "decoding legacy specification entry");
        Self {
            r,
            v,
            entry: SpecificationEntry::default(),
            refactored: RefactoredParameters::default(),
            _decoder: PhantomData,
        }
    }

    fn run(mut self) -> Result<(SpecificationEntry, RefactoredParameters), StoreError> {
        self.specification()?;
        self.strand_slope_and_hold_down()?;
        self.end_zone_and_handling()?;
        self.stirrup_spacing()?;
        self.casting_yard_and_lifting_stresses()?;
        self.lifting()?;
        self.hauling()?;
        self.concrete_strength_and_support_locations()?;
        self.temporary_and_final_stresses()?;
        self.dead_load_and_haunch()?;
        self.service_stresses()?;
        self.moment_capacity()?;
        self.live_load_distribution()?;
        self.creep_and_losses()?;
        self.strand_and_tendon_stress()?;
        self.elastic_gains()?;
        self.deflection_and_limits()?;
        self.slab_offset_and_design()?;
        self.shear()?;
        self.live_load_and_transfer()?;
        self.duct_size_and_closure_joint()?;
        self.clearance_and_inclination()?;
        self.slab_offset_rounding_and_bearings()?;
        self.fixup();
        Ok((self.entry, self.refactored))
    }

    fn after(&self, version: f64) -> bool {
        self.v > version
    }

    fn since(&self, version: f64) -> bool {
        self.v >= version
    }

    fn is_si(&self) -> bool {
        self.entry.specification.units == Units::SI
    }

    fn bool(&mut self, name: &str) -> Result<bool, StoreError> {
        self.r.read_bool(name)
    }

    fn float(&mut self, name: &str) -> Result<f64, StoreError> {
        self.r.read_float(name)
    }

    fn integer(&mut self, name: &str) -> Result<i64, StoreError> {
        self.r.read_integer(name)
    }

    fn enumeration<E: StoredEnum>(&mut self, name: &str) -> Result<E, StoreError> {
        let stored = self.integer(name)?;
        decode_enum(name, stored)
    }

    /// A coefficient, a bound flag, and a bound, stored as three properties.
    fn tension_limit(
        &mut self,
        coefficient: &str,
        has_max: &str,
        max: &str,
    ) -> Result<TensionStressLimit, StoreError> {
        Ok(TensionStressLimit {
            coefficient: self.float(coefficient)?,
            has_max_value: self.bool(has_max)?,
            max_value: self.float(max)?,
        })
    }

    fn concrete_properties(
        &mut self,
        values: &mut ConcreteArray<f64>,
    ) -> Result<(), StoreError> {
        for (ct, name) in LEGACY_CONCRETE {
            values[ct] = self.float(name)?;
        }
        Ok(())
    }

    fn open(&mut self, name: &str, max_version: f64) -> Result<f64, StoreError> {
        self.r.begin_unit(name, max_version)
    }

    fn close(&mut self) -> Result<(), StoreError> {
        self.r.end_unit()
    }

    fn specification(&mut self) -> Result<(), StoreError> {
        let name = self.r.read_string("Name")?;
        self.entry.name = name;
        let spec = &mut self.entry.specification;
        spec.description = self.r.read_string("Description")?;
        spec.use_current_specification = if self.v > 76.0 {
            self.r.read_bool("UseCurrentSpecification")?
        } else {
            false
        };

        let key = self.r.read_string("SpecificationType")?;
        spec.edition = Edition::from_key(&key).ok_or_else(|| {
            StoreError::malformed(format!("`{key}` is not a known specification edition"))
        })?;

        let units = self.r.read_string("SpecificationUnits")?;
        spec.units = match units.as_str() {
            "SiUnitsSpec" => Units::SI,
            "UsUnitsSpec" => Units::US,
            other => {
                return Err(StoreError::malformed(format!(
                    "`{other}` is not a known unit system"
                )))
            }
        };

        if self.since(50.0) {
            self.entry.section_properties.section_property_mode =
                self.enumeration("SectionPropertyType")?;
        }
        Ok(())
    }

    fn strand_slope_and_hold_down(&mut self) -> Result<(), StoreError> {
        let check = self.bool("DoCheckStrandSlope")?;
        let design = if self.v < 15.0 {
            check
        } else {
            self.bool("DoDesignStrandSlope")?
        };
        let max_05 = self.float("MaxSlope05")?;
        let max_06 = self.float("MaxSlope06")?;
        let slope = &mut self.entry.strand_slope;
        slope.check = check;
        slope.design = design;
        slope.max_slope_05 = max_05;
        slope.max_slope_06 = max_06;
        if self.since(35.0) {
            self.entry.strand_slope.max_slope_07 = self.float("MaxSlope07")?;
        }

        let check = self.bool("DoCheckHoldDown")?;
        let design = if self.v < 15.0 {
            check
        } else {
            self.bool("DoDesignHoldDown")?
        };
        self.entry.hold_down.check = check;
        self.entry.hold_down.design = design;
        if self.after(69.0) {
            self.entry.hold_down.force_type = self.enumeration("HoldDownForceType")?;
        } else {
            self.entry.hold_down.force_type = HoldDownForceType::Total;
        }
        self.entry.hold_down.force_limit = self.float("HoldDownForce")?;
        if self.after(69.0) {
            self.entry.hold_down.friction = self.float("HoldDownFriction")?;
        }
        Ok(())
    }

    fn end_zone_and_handling(&mut self) -> Result<(), StoreError> {
        if self.after(32.0) && self.v < 39.0 {
            let check = self.bool("DoCheckAnchorage")?;
            let ez = &mut self.entry.end_zone;
            ez.check_splitting = check;
            ez.design_splitting = check;
            ez.check_confinement = check;
            ez.design_confinement = check;
        } else if self.since(39.0) {
            self.entry.end_zone.check_splitting = self.bool("DoCheckSplitting")?;
            self.entry.end_zone.design_splitting = self.bool("DoDesignSplitting")?;
            self.entry.end_zone.check_confinement = self.bool("DoCheckConfinement")?;
            self.entry.end_zone.design_confinement = self.bool("DoDesignConfinement")?;
        }

        if self.after(69.0) {
            self.entry.plant_handling.check = self.bool("DoCheckHandlingWeightLimit")?;
            self.entry.plant_handling.weight_limit = self.float("HandlingWeightLimit")?;
        }
        Ok(())
    }

    fn stirrup_spacing(&mut self) -> Result<(), StoreError> {
        if D::single_stirrup_spacing(self.v) {
            let spacing = self.float("MaxStirrupSpacing")?;
            let si = self.is_si();
            let shear = &mut self.entry.shear_capacity;
            shear.max_stirrup_spacing[0] = spacing;
            if si {
                shear.max_stirrup_spacing[1] = 300.0 * MILLIMETER;
            }
        } else {
            let shear = &mut self.entry.shear_capacity;
            shear.stirrup_spacing_coefficient[0] = self.r.read_float("StirrupSpacingCoefficient1")?;
            shear.max_stirrup_spacing[0] = self.r.read_float("MaxStirrupSpacing1")?;
            shear.stirrup_spacing_coefficient[1] = self.r.read_float("StirrupSpacingCoefficient2")?;
            shear.max_stirrup_spacing[1] = self.r.read_float("MaxStirrupSpacing2")?;
        }
        Ok(())
    }

    fn casting_yard_and_lifting_stresses(&mut self) -> Result<(), StoreError> {
        self.entry.lifting.fs_cracking = self.float("CyLiftingCrackFs")?;
        self.entry.lifting.fs_failure = self.float("CyLiftingFailFs")?;
        self.entry
            .prestressed_element
            .compression_stress_coefficient_before_losses = self.float("CyCompStressServ")?;

        if self.v < 65.0 {
            let coefficient = self.float("CyCompStressLifting")?;
            self.entry.lifting.compression_stress_coefficient_global_stress = coefficient;
            self.entry.lifting.compression_stress_coefficient_peak_stress = coefficient;
        } else {
            self.entry.lifting.compression_stress_coefficient_global_stress =
                self.float("CyGlobalCompStressLifting")?;
            self.entry.lifting.compression_stress_coefficient_peak_stress =
                self.float("CyPeakCompStressLifting")?;
        }

        self.entry
            .prestressed_element
            .tension_stress_limit_other_areas_without_reinforcement_before_losses = self
            .tension_limit("CyTensStressServ", "CyDoTensStressServMax", "CyTensStressServMax")?;
        self.entry.lifting.tension_stress_limit_without_reinforcement = self.tension_limit(
            "CyTensStressLifting",
            "CyDoTensStressLiftingMax",
            "CyTensStressLiftingMax",
        )?;

        if self.since(1.4) {
            self.entry.end_zone.splitting_zone_length_factor =
                self.float("BurstingZoneLengthFactor")?;
        }

        self.entry.lifting.impact_up = self.float("LiftingUpwardImpact")?;
        self.entry.lifting.impact_down = self.float("LiftingDownwardImpact")?;
        self.entry.hauling.wsdot.impact_up = self.float("HaulingUpwardImpact")?;
        self.entry.hauling.wsdot.impact_down = self.float("HaulingDownwardImpact")?;
        self.entry.creep.curing_method = self.enumeration("CuringMethod")?;
        Ok(())
    }

    /// Check and design flags shared by lifting and hauling.
    fn check_and_design(&mut self, check: &str, design: &str) -> Result<(bool, bool), StoreError> {
        if self.v < 11.0 {
            return Ok((true, true));
        }
        let c = self.bool(check)?;
        let d = if self.v < 15.0 { c } else { self.bool(design)? };
        Ok((c, d))
    }

    fn lifting(&mut self) -> Result<(), StoreError> {
        let (check, design) = self.check_and_design("EnableLiftingCheck", "EnableLiftingDesign")?;
        self.entry.lifting.check = check;
        self.entry.lifting.design = design;

        self.entry.lifting.pick_point_height = self.float("PickPointHeight")?;
        self.entry.lifting.lifting_loop_tolerance = self.float("LiftingLoopTolerance")?;
        self.entry.lifting.min_cable_inclination = self.float("MinCableInclination")?;
        self.entry.lifting.sweep_tolerance = self.float("MaxGirderSweepLifting")?;
        if self.after(55.0) {
            if self.after(57.0) {
                self.entry.lifting.camber_multiplier = self.float("LiftingCamberMultiplier")?;
            }
            self.entry.lifting.wind_load_type = self.enumeration("LiftingWindType")?;
            self.entry.lifting.wind_load = self.float("LiftingWindLoad")?;
        }
        Ok(())
    }

    fn hauling(&mut self) -> Result<(), StoreError> {
        let (check, design) = self.check_and_design("EnableHaulingCheck", "EnableHaulingDesign")?;
        self.entry.hauling.check = check;
        self.entry.hauling.design = design;
        if self.since(43.0) {
            self.entry.hauling.analysis_method = self.enumeration("HaulingAnalysisMethod")?;
        }

        self.entry.hauling.wsdot.sweep_tolerance = self.float("MaxGirderSweepHauling")?;
        if self.after(65.0) {
            self.entry.hauling.wsdot.sweep_growth = self.float("SweepGrowthHauling")?;
        }

        let mut truck = HaulTruckParameters::default();
        if self.v < 56.0 {
            truck.support_distance = self.float("HaulingSupportDistance")?;
            if self.since(2.0) {
                truck.max_overhang = self.float("MaxHaulingOverhang")?;
            }
        }

        self.entry.hauling.wsdot.support_placement_tolerance =
            self.float("HaulingSupportPlacementTolerance")?;
        if self.after(57.0) {
            self.entry.hauling.wsdot.camber_multiplier = self.float("HaulingCamberMultiplier")?;
        }
        if self.after(55.0) {
            let wsdot = &mut self.entry.hauling.wsdot;
            wsdot.wind_load_type = decode_enum("HaulingWindType", self.r.read_integer("HaulingWindType")?)?;
            wsdot.wind_load = self.r.read_float("HaulingWindLoad")?;
            wsdot.centrifugal_force_type =
                decode_enum("CentrifugalForceType", self.r.read_integer("CentrifugalForceType")?)?;
            wsdot.hauling_speed = self.r.read_float("HaulingSpeed")?;
            wsdot.turning_radius = self.r.read_float("TurningRadius")?;
        }

        if self.v < 65.0 {
            let coefficient = self.float("CompStressHauling")?;
            self.entry.hauling.wsdot.compression_stress_coefficient_global_stress = coefficient;
            self.entry.hauling.wsdot.compression_stress_coefficient_peak_stress = coefficient;
        } else {
            self.entry.hauling.wsdot.compression_stress_coefficient_global_stress =
                self.float("GlobalCompStressHauling")?;
            self.entry.hauling.wsdot.compression_stress_coefficient_peak_stress =
                self.float("PeakCompStressHauling")?;
        }

        if self.v < 56.0 {
            let limit = self.tension_limit(
                "TensStressHauling",
                "DoTensStressHaulingMax",
                "TensStressHaulingMax",
            )?;
            self.entry.hauling.wsdot.tension_stress_limit_without_reinforcement = [limit; 2];
        } else {
            let crown = self.tension_limit(
                "TensStressHaulingNormalCrown",
                "DoTensStressHaulingMaxNormalCrown",
                "TensStressHaulingMaxNormalCrown",
            )?;
            let superelevation = self.tension_limit(
                "TensStressHaulingMaxSuper",
                "DoTensStressHaulingMaxMaxSuper",
                "TensStressHaulingMaxMaxSuper",
            )?;
            self.entry.hauling.wsdot.tension_stress_limit_without_reinforcement =
                [crown, superelevation];
        }

        self.entry.hauling.wsdot.fs_cracking = self.float("HeHaulingCrackFs")?;
        self.entry.hauling.wsdot.fs_failure = self.float("HeHaulingFailFs")?;
        if self.after(55.0) {
            self.entry.hauling.wsdot.impact_usage = self.enumeration("HaulingImpactUsage")?;
            self.entry.hauling.wsdot.roadway_crown_slope = self.float("RoadwayCrownSlope")?;
        }
        self.entry.hauling.wsdot.roadway_superelevation = self.float("RoadwaySuperelevation")?;

        if self.v < 56.0 {
            if self.v < 1.9 {
                truck.roll_stiffness = self.float("TruckRollStiffness")?;
            } else {
                truck.roll_stiffness_method = self.integer("TruckRollStiffnessMethod")?;
                truck.roll_stiffness = self.float("TruckRollStiffness")?;
                truck.axle_weight_limit = self.float("AxleWeightLimit")?;
                truck.axle_stiffness = self.float("AxleStiffness")?;
                truck.min_roll_stiffness = self.float("MinRollStiffness")?;
            }
            truck.girder_height = self.float("TruckGirderHeight")?;
            truck.roll_center_height = self.float("TruckRollCenterHeight")?;
            truck.axle_width = self.float("TruckAxleWidth")?;
            if self.since(1.3) {
                truck.max_weight = self.float("MaxGirderWgt")?;
            }
            self.refactored.old_haul_truck = Some(truck);
        }
        Ok(())
    }

    fn concrete_strength_and_support_locations(&mut self) -> Result<(), StoreError> {
        if self.after(52.0) {
            self.entry
                .limit_state_concrete_strength
                .limit_state_concrete_strength = self.enumeration("LimitStateConcreteStrength")?;
        }
        if self.after(71.0) {
            self.entry
                .limit_state_concrete_strength
                .use_90_day_concrete_strength = self.bool("Use90DayConcreteStrength")?;
            self.entry
                .limit_state_concrete_strength
                .slow_curing_concrete_strength_factor =
                self.float("SlowCuringConcreteStrengthFactor")?;
        }

        if self.v < 37.0 {
            if self.since(12.0) {
                self.entry.hauling.wsdot.modulus_of_rupture_coefficient[ConcreteType::Normal] =
                    self.float("HaulingModulusOfRuptureCoefficient")?;
            }
            if self.since(20.0) {
                self.entry.lifting.modulus_of_rupture_coefficient[ConcreteType::Normal] =
                    self.float("LiftingModulusOfRuptureCoefficient")?;
            }
        }

        if self.since(25.0) {
            self.entry.lifting.min_pick_point = self.float("MinLiftingPointLocation")?;
            self.entry.lifting.pick_point_accuracy = self.float("LiftingPointLocationAccuracy")?;
            self.entry.hauling.min_bunk_point = self.float("MinHaulingSupportLocation")?;
            self.entry.hauling.bunk_point_accuracy =
                self.float("HaulingSupportLocationAccuracy")?;
        }

        if self.since(43.0) {
            self.entry.hauling.use_min_bunk_point_limit =
                self.bool("UseMinTruckSupportLocationFactor")?;
            self.entry.hauling.min_bunk_point_limit_factor =
                self.float("MinTruckSupportLocationFactor")?;
            self.entry.hauling.kdot.overhang_g_factor = self.float("OverhangGFactor")?;
            self.entry.hauling.kdot.interior_g_factor = self.float("InteriorGFactor")?;
        }

        if self.after(3.2) {
            let cy = self.float("CastingYardTensileStressLimitWithMildRebar")?;
            self.entry
                .prestressed_element
                .tension_stress_limit_with_reinforcement_before_losses = TensionStressLimit::new(cy);
            let lifting = self.float("LiftingTensileStressLimitWithMildRebar")?;
            self.entry.lifting.tension_stress_limit_with_reinforcement =
                TensionStressLimit::new(lifting);
            if self.v < 56.0 {
                let hauling = self.float("HaulingTensileStressLimitWithMildRebar")?;
                self.entry.hauling.wsdot.tension_stress_limit_with_reinforcement =
                    [TensionStressLimit::new(hauling); 2];
            } else {
                let crown = self.float("HaulingTensileStressLimitWithMildRebarNormalCrown")?;
                let superelevation = self.float("HaulingTensileStressLimitWithMildRebarMaxSuper")?;
                self.entry.hauling.wsdot.tension_stress_limit_with_reinforcement = [
                    TensionStressLimit::new(crown),
                    TensionStressLimit::new(superelevation),
                ];
            }
        }
        Ok(())
    }

    fn temporary_and_final_stresses(&mut self) -> Result<(), StoreError> {
        if self.after(29.0) {
            self.entry
                .prestressed_element
                .compression_stress_coefficient_temporary_strand_removal =
                self.float("TempStrandRemovalCompStress")?;
            self.entry
                .prestressed_element
                .tension_stress_limit_without_reinforcement_temporary_strand_removal = self
                .tension_limit(
                    "TempStrandRemovalTensStress",
                    "TempStrandRemovalDoTensStressMax",
                    "TempStrandRemovalTensStressMax",
                )?;
        }
        if self.after(48.0) {
            if let Some(value) = D::branch_float(self.r, "TempStrandRemovalTensStressWithRebar")? {
                self.entry
                    .prestressed_element
                    .tension_stress_limit_with_reinforcement_temporary_strand_removal =
                    TensionStressLimit::new(value);
            }
        }
        if self.after(46.0) {
            if let Some(check) = D::branch_bool(self.r, "CheckTemporaryStresses")? {
                self.entry.prestressed_element.check_temporary_stresses = check;
            }
        }

        // deck placement properties carried an `m_` prefix before version 30
        let prefix = if self.v < 30.0 { "m_" } else { "" };
        let pe = format!("{prefix}Bs1CompStress");
        self.entry
            .prestressed_element
            .compression_stress_coefficient_after_deck_placement = self.float(&pe)?;
        self.entry
            .prestressed_element
            .tension_stress_limit_after_deck_placement = self.tension_limit(
            &format!("{prefix}Bs1TensStress"),
            &format!("{prefix}Bs1DoTensStressMax"),
            &format!("{prefix}Bs1TensStressMax"),
        )?;
        self.entry
            .prestressed_element
            .compression_stress_coefficient_permanent_loads_only_after_losses =
            self.float(&format!("{prefix}Bs2CompStress"))?;

        if self.after(46.0) {
            if let Some(check) = D::branch_bool(self.r, "CheckBs2Tension")? {
                self.entry.prestressed_element.check_final_service_i_tension = check;
            }
            self.entry
                .prestressed_element
                .tension_stress_limit_service_i_permanent_loads_only = self.tension_limit(
                "Bs2TensStress",
                "Bs2DoTensStressMax",
                "Bs2TensStressMax",
            )?;
        }
        Ok(())
    }

    fn dead_load_and_haunch(&mut self) -> Result<(), StoreError> {
        if self.since(36.0) {
            let code = self.integer("Bs2TrafficBarrierDistributionType")?;
            self.entry
                .dead_load_distribution
                .traffic_barrier_distribution = legacy_traffic_barrier_distribution(code)?;
            let count = self.integer("Bs2MaxGirdersTrafficBarrier")?;
            self.entry.dead_load_distribution.max_girders_traffic_barrier =
                u32::try_from(count)
                    .map_err(|_| invalid("Bs2MaxGirdersTrafficBarrier", "count", count))?;
        }
        if self.after(33.0) {
            self.entry.dead_load_distribution.overlay_load_distribution =
                self.enumeration("OverlayLoadDistribution")?;
        }

        if self.after(53.0) {
            self.entry.haunch.haunch_load_computation_type =
                self.enumeration("HaunchLoadComputationType")?;
            self.entry.haunch.haunch_load_camber_tolerance =
                self.float("HaunchLoadCamberTolerance")?;
        }
        if self.after(59.0) {
            self.entry.haunch.haunch_load_camber_factor = self.float("HaunchLoadCamberFactor")?;
        }
        if self.after(62.0) {
            self.entry.haunch.haunch_analysis_section_properties_type =
                self.enumeration("HaunchAnalysisComputationType")?;
        }
        Ok(())
    }

    fn service_stresses(&mut self) -> Result<(), StoreError> {
        let pe = &mut self.entry.prestressed_element;
        pe.compression_stress_coefficient_all_loads_after_losses =
            self.r.read_float("Bs3CompStressServ")?;
        pe.compression_stress_coefficient_fatigue = self.r.read_float("Bs3CompStressService1A")?;
        self.entry
            .prestressed_element
            .tension_stress_limit_service_iii_in_ptz_moderate_corrosion = self.tension_limit(
            "Bs3TensStressServNc",
            "Bs3DoTensStressServNcMax",
            "Bs3TensStressServNcMax",
        )?;
        self.entry
            .prestressed_element
            .tension_stress_limit_service_iii_in_ptz_severe_corrosion = self.tension_limit(
            "Bs3TensStressServSc",
            "Bs3DoTensStressServScMax",
            "Bs3TensStressServScMax",
        )?;

        let edition = self.entry.specification.edition;
        if self.after(75.0) {
            self.entry.principal_tension_stress.method =
                self.enumeration("PrincipalTensileStressMethod")?;
            self.entry.principal_tension_stress.coefficient =
                self.float("PrincipalTensileStressCoefficient")?;
        }
        if self.after(76.0) {
            self.entry.principal_tension_stress.tendon_nearness_factor =
                self.float("PrincipalTensileStressTendonNearnessFactor")?;
        }
        if self.after(77.0) {
            self.entry.principal_tension_stress.fc_threshold =
                self.float("PrincipalTensileStressFcThreshold")?;
        }
        if self.after(79.0) {
            self.entry.principal_tension_stress.ungrouted_multiplier =
                self.float("PrincipalTensileStressUngroutedMultiplier")?;
            self.entry.principal_tension_stress.grouted_multiplier =
                self.float("PrincipalTensileStressGroutedMultiplier")?;
        } else {
            let (ungrouted, grouted) =
                PrincipalTensionStressCriteria::duct_deduction_multipliers(edition);
            self.entry.principal_tension_stress.ungrouted_multiplier = ungrouted;
            self.entry.principal_tension_stress.grouted_multiplier = grouted;
        }

        if self.since(1.4) && self.v < 29.0 {
            self.refactored.ignore_range_of_applicability =
                Some(self.bool("Bs3IgnoreRangeOfApplicability")?);
        }
        Ok(())
    }

    fn moment_capacity(&mut self) -> Result<(), StoreError> {
        if self.v < 37.0 {
            if self.since(1.8) {
                self.entry.moment_capacity.over_reinforced_moment_capacity =
                    self.enumeration("Bs3LRFDOverreinforcedMomentCapacity")?;
            }
            if self.since(7.0) {
                let include = self.integer("IncludeRebar_MomentCapacity")?;
                self.entry.moment_capacity.include_rebar = include != 0;
            }
            if self.since(9.0) {
                self.entry.moment_capacity.modulus_of_rupture_coefficient[ConcreteType::Normal] =
                    self.float("ModulusOfRuptureCoefficient")?;
            }
            if self.since(18.0) {
                self.entry.shear_capacity.modulus_of_rupture_coefficient[ConcreteType::Normal] =
                    self.float("ShearModulusOfRuptureCoefficient")?;
            }
            return Ok(());
        }

        let mc = self.open("MomentCapacity", 5.0)?;
        self.entry.moment_capacity.over_reinforced_moment_capacity =
            self.enumeration("Bs3LRFDOverreinforcedMomentCapacity")?;
        if mc > 3.0 {
            self.entry.moment_capacity.include_strand_for_neg_moment =
                self.bool("IncludeStrandForNegMoment")?;
        }
        let include = self.integer("IncludeRebarForCapacity")?;
        self.entry.moment_capacity.include_rebar = include != 0;
        if mc > 4.0 {
            self.entry.moment_capacity.consider_reinforcement_strain_limit =
                self.bool("ConsiderReinforcementStrainLimit")?;
        }
        let slices = self.integer("MomentCapacitySliceCount")?;
        self.entry.moment_capacity.moment_capacity_slices = u32::try_from(slices)
            .map_err(|_| invalid("MomentCapacitySliceCount", "count", slices))?;
        if mc >= 2.0 {
            self.entry
                .moment_capacity
                .include_noncomposite_moments_for_neg_moment_design =
                self.bool("IncludeNoncompositeMomentForNegMomentDesign")?;
        }

        let factor_unit = if mc < 3.0 { "ReductionFactor" } else { "ResistanceFactor" };
        self.open(factor_unit, 2.0)?;
        for (ct, name) in [
            (ConcreteType::Normal, "NormalWeight"),
            (ConcreteType::AllLightweight, "AllLightweight"),
            (ConcreteType::SandLightweight, "SandLightweight"),
        ] {
            let unit_version = self.open(name, 2.0)?;
            let mut phi = self.entry.moment_capacity.phi[ct];
            phi.tension_rc = self.float("TensionControlled_RC")?;
            phi.tension_ps = self.float("TensionControlled_PS")?;
            if unit_version > 1.0 {
                phi.tension_spliced = self.float("TensionControlled_Spliced")?;
            }
            phi.compression = self.float("CompressionControlled")?;
            self.entry.moment_capacity.phi[ct] = phi;
            self.close()?;
        }
        self.close()?;

        if mc > 2.0 {
            self.open("ClosureJointResistanceFactor", 1.0)?;
            for (ct, name) in [
                (ConcreteType::Normal, "NormalWeight"),
                (ConcreteType::AllLightweight, "AllLightweight"),
                (ConcreteType::SandLightweight, "SandLightweight"),
            ] {
                self.open(name, 1.0)?;
                self.entry.moment_capacity.phi_closure_joint[ct] =
                    self.float("FullyBondedTendons")?;
                self.close()?;
            }
            self.close()?;
        }
        self.close()?;

        self.open("ModulusOfRuptureCoefficient", 1.0)?;
        let mut moment = self.entry.moment_capacity.modulus_of_rupture_coefficient;
        let mut shear = self.entry.shear_capacity.modulus_of_rupture_coefficient;
        let mut lifting = self.entry.lifting.modulus_of_rupture_coefficient;
        let mut shipping = self.entry.hauling.wsdot.modulus_of_rupture_coefficient;
        for (unit, values) in [
            ("Moment", &mut moment),
            ("Shear", &mut shear),
            ("Lifting", &mut lifting),
            ("Shipping", &mut shipping),
        ] {
            self.open(unit, 3.0)?;
            self.concrete_properties(values)?;
            self.close()?;
        }
        self.close()?;
        self.entry.moment_capacity.modulus_of_rupture_coefficient = moment;
        self.entry.shear_capacity.modulus_of_rupture_coefficient = shear;
        self.entry.lifting.modulus_of_rupture_coefficient = lifting;
        self.entry.hauling.wsdot.modulus_of_rupture_coefficient = shipping;
        Ok(())
    }

    fn live_load_distribution(&mut self) -> Result<(), StoreError> {
        self.entry.live_load_distribution.lldf_method = self.enumeration("BsLldfMethod")?;
        let lldf = &mut self.entry.live_load_distribution;
        if self.v > 73.0 {
            lldf.ignore_skew_reduction_for_moment =
                self.r.read_bool("IgnoreSkewReductionForMoment")?;
        }
        if self.v > 28.0 {
            lldf.max_angular_deviation_between_girders =
                self.r.read_float("MaxAngularDeviationBetweenGirders")?;
            lldf.min_girder_stiffness_ratio = self.r.read_float("MinGirderStiffnessRatio")?;
            lldf.girder_spacing_location = self.r.read_float("LLDFGirderSpacingLocation")?;
        }
        if self.v > 69.0 {
            lldf.use_rigid_method = self.r.read_bool("UseRigidMethod")?;
        }
        if self.v > 60.0 {
            lldf.include_dual_tandem = self.r.read_bool("IncludeDualTandem")?;
        }
        if self.v > 30.0 {
            lldf.limit_distribution_factors_to_lanes_beams =
                self.r.read_bool("LimitDistributionFactorsToLanesBeams")?;
        }
        if self.v > 80.0 {
            lldf.exterior_lldf_gt_adjacent_interior =
                self.r.read_bool("ExteriorLiveLoadDistributionGTAdjacentInteriorRule")?;
        }

        if self.v < 37.0 {
            if self.since(1.2) {
                self.entry
                    .shear_capacity
                    .longitudinal_reinforcement_for_shear_method =
                    self.enumeration("LongReinfShearMethod")?;
            }
            if self.since(7.0) {
                let include = self.integer("IncludeRebar_Shear")?;
                self.entry.shear_capacity.include_rebar = include != 0;
            }
        }
        Ok(())
    }

    fn creep_and_losses(&mut self) -> Result<(), StoreError> {
        if self.since(3.0) {
            let creep = &mut self.entry.creep;
            creep.creep_duration1_min = self.r.read_float("CreepDuration1Min")?;
            creep.creep_duration1_max = self.r.read_float("CreepDuration1Max")?;
            creep.creep_duration2_min = self.r.read_float("CreepDuration2Min")?;
            creep.creep_duration2_max = self.r.read_float("CreepDuration2Max")?;
            creep.xfer_time = self.r.read_float("XferTime")?;
            if self.since(3.2) {
                self.entry.creep.total_creep_duration = self.float("TotalCreepDuration")?;
            }
        } else if self.since(1.6) {
            let first = self.float("CreepDuration1")?;
            let second = self.float("CreepDuration2")?;
            let creep = &mut self.entry.creep;
            creep.creep_duration1_min = first;
            creep.creep_duration1_max = first;
            creep.creep_duration2_min = second;
            creep.creep_duration2_max = second;
            creep.xfer_time = self.r.read_float("XferTime")?;
        } else {
            let duration = self.float("CreepDuration")?;
            let creep = &mut self.entry.creep;
            creep.creep_duration1_min = duration;
            creep.creep_duration1_max = duration;
            creep.creep_duration2_min = duration;
            creep.creep_duration2_max = duration;
            creep.xfer_time = self.r.read_float("XferTime")?;
        }

        if self.since(44.0) {
            if let Some(value) = D::branch_float(self.r, "CamberVariability")? {
                self.entry.creep.camber_variability = value;
            }
        }

        let code = self.integer("LossMethod")?;
        let method = legacy_loss_method(code)?;
        self.entry.prestress_loss.loss_method = method;
        if self.since(50.0) {
            self.entry.prestress_loss.time_dependent_concrete_model =
                self.enumeration("TimeDependentModel")?;
        }

        let mut losses = LumpSumLosses::default();
        if self.since(50.0) {
            losses.shipping = self.float("ShippingLosses")?;
            self.entry.prestress_loss.shipping_losses = losses.shipping;
            self.entry.prestress_loss.shipping_time = self.float("ShippingTime")?;
        } else {
            losses.final_losses = self.float("FinalLosses")?;
            losses.shipping = self.float("ShippingLosses")?;
            losses.before_transfer = self.float("BeforeXferLosses")?;
            losses.after_transfer = self.float("AfterXferLosses")?;
            self.entry.prestress_loss.shipping_losses = losses.shipping;
            if self.since(13.0) {
                self.entry.prestress_loss.shipping_time = self.float("ShippingTime")?;
            }
            if self.since(22.0) {
                losses.lifting = self.float("LiftingLosses")?;
                losses.before_temporary_strand_removal =
                    self.float("BeforeTempStrandRemovalLosses")?;
                losses.after_temporary_strand_removal =
                    self.float("AfterTempStrandRemovalLosses")?;
                losses.after_deck_placement = self.float("AfterDeckPlacementLosses")?;
                losses.after_sidl = if self.since(38.0) {
                    self.float("AfterSIDLLosses")?
                } else {
                    losses.after_deck_placement
                };
            } else {
                losses.lifting = losses.after_transfer;
                losses.before_temporary_strand_removal = if losses.shipping < 0.0 {
                    losses.lifting
                } else {
                    losses.shipping
                };
                losses.after_temporary_strand_removal = losses.before_temporary_strand_removal;
                losses.after_deck_placement = losses.final_losses;
                losses.after_sidl = losses.final_losses;
            }
        }
        if method == LossMethod::GeneralLumpSum {
            self.refactored.lump_sum_losses = Some(losses);
        }

        if self.since(19.0) {
            self.entry.creep.curing_method_time_adjustment_factor =
                self.float("CuringMethodFactor")?;
        }
        Ok(())
    }

    fn strand_and_tendon_stress(&mut self) -> Result<(), StoreError> {
        if self.since(1.5) {
            for stage in StrandStressStage::ALL {
                let key = stage.key();
                let check = self.bool(&format!("CheckStrandStress{key}"))?;
                let stress_relieved = self.float(&format!("Coeff_{key}_StressRel"))?;
                let low_relaxation = self.float(&format!("Coeff_{key}_LowRelax"))?;
                let limit = self.entry.strand_stress.limit_mut(stage);
                limit.check = check;
                limit.stress_relieved = stress_relieved;
                limit.low_relaxation = low_relaxation;
            }
        }

        if self.since(50.0) {
            self.entry.tendon_stress.check_at_jacking = self.bool("CheckTendonStressAtJacking")?;
            self.entry.tendon_stress.check_prior_to_seating =
                self.bool("CheckTendonStressPriorToSeating")?;
            for (i, key) in [
                "AtJacking",
                "PriorToSeating",
                "AtAnchoragesAfterSeating",
                "ElsewhereAfterSeating",
                "AfterAllLosses",
            ]
            .into_iter()
            .enumerate()
            {
                let stress_relieved = self.float(&format!("Coeff_{key}_StressRel"))?;
                let low_relaxation = self.float(&format!("Coeff_{key}_LowRelax"))?;
                self.entry.tendon_stress.coefficients[i] = (stress_relieved, low_relaxation);
            }
        }

        if self.after(22.0) && self.v < 50.0 {
            self.refactored.post_tensioning = Some(PostTensioningParameters {
                anchor_set: self.float("AnchorSet")?,
                wobble_friction: self.float("WobbleFriction")?,
                friction_coefficient: self.float("CoefficientOfFriction")?,
            });
        }
        Ok(())
    }

    fn elastic_gains(&mut self) -> Result<(), StoreError> {
        if !self.after(39.0) {
            return Ok(());
        }
        self.entry.prestress_loss.relaxation_loss_method =
            self.enumeration("RelaxationLossMethod")?;
        let pl = &mut self.entry.prestress_loss;
        pl.slab_elastic_gain = self.r.read_float("SlabElasticGain")?;
        pl.slab_pad_elastic_gain = self.r.read_float("HaunchElasticGain")?;
        pl.diaphragm_elastic_gain = self.r.read_float("DiaphragmElasticGain")?;
        pl.user_dc_elastic_gain_before_deck_placement =
            self.r.read_float("UserDCElasticGainBS1")?;
        pl.user_dw_elastic_gain_before_deck_placement =
            self.r.read_float("UserDWElasticGainBS1")?;
        pl.user_dc_elastic_gain_after_deck_placement =
            self.r.read_float("UserDCElasticGainBS2")?;
        pl.user_dw_elastic_gain_after_deck_placement =
            self.r.read_float("UserDWElasticGainBS2")?;
        pl.railing_system_elastic_gain = self.r.read_float("RailingSystemElasticGain")?;
        pl.overlay_elastic_gain = self.r.read_float("OverlayElasticGain")?;
        pl.slab_shrinkage_elastic_gain = self.r.read_float("SlabShrinkageElasticGain")?;
        if self.after(41.0) {
            self.entry.prestress_loss.live_load_elastic_gain = self.float("LiveLoadElasticGain")?;
        }
        if self.after(44.0) && self.entry.prestress_loss.loss_method == LossMethod::TxdotRefined2013
        {
            if let Some(code) = D::branch_integer(self.r, "FcgpComputationMethod")? {
                self.entry.prestress_loss.fcgp_computation_method =
                    decode_enum("FcgpComputationMethod", code)?;
            }
        }
        Ok(())
    }

    fn deflection_and_limits(&mut self) -> Result<(), StoreError> {
        if self.after(1.6) {
            self.entry.live_load_deflection.check = self.bool("CheckLiveLoadDeflection")?;
            self.entry.live_load_deflection.deflection_limit =
                self.float("LiveLoadDeflectionLimit")?;
        }
        if self.since(8.0) && self.v < 28.0 {
            self.refactored.analysis_type = Some(self.integer("AnalysisType")?);
        }

        if self.since(10.0) && self.v < 37.0 {
            let mut normal = self.entry.limits.concrete[ConcreteType::Normal];
            normal.max_slab_fc = self.float("MaxSlabFc")?;
            normal.max_segment_fci = self.float("MaxGirderFci")?;
            normal.max_segment_fc = self.float("MaxGirderFc")?;
            normal.max_concrete_unit_weight = self.float("MaxConcreteUnitWeight")?;
            normal.max_concrete_agg_size = self.float("MaxConcreteAggSize")?;
            self.entry.limits.concrete[ConcreteType::Normal] = normal;
        } else if self.since(37.0) {
            self.open("Limits", 1.0)?;
            for (ct, name) in LEGACY_CONCRETE {
                let unit_version = self.open(name, 2.0)?;
                let mut limits = self.entry.limits.concrete[ct];
                limits.max_slab_fc = self.float("MaxSlabFc")?;
                limits.max_segment_fci = self.float("MaxGirderFci")?;
                limits.max_segment_fc = self.float("MaxGirderFc")?;
                if unit_version > 1.0 {
                    limits.max_closure_fci = self.float("MaxClosureFci")?;
                    limits.max_closure_fc = self.float("MaxClosureFc")?;
                }
                limits.max_concrete_unit_weight = self.float("MaxConcreteUnitWeight")?;
                limits.max_concrete_agg_size = self.float("MaxConcreteAggSize")?;
                self.entry.limits.concrete[ct] = limits;
                self.close()?;
            }
            self.close()?;
        }

        if self.since(44.0) && D::branch_unit(self.r, "Warnings", 1.0)?.is_some() {
            self.entry.limits.check_stirrup_spacing_compatibility =
                self.bool("DoCheckStirrupSpacingCompatibility")?;
            self.entry.limits.check_sag = self.bool("CheckGirderSag")?;
            self.entry.limits.sag_camber_type = self.enumeration("SagCamberType")?;
            self.close()?;
        }
        Ok(())
    }

    fn slab_offset_and_design(&mut self) -> Result<(), StoreError> {
        if self.since(15.0) {
            self.entry.slab_offset.check = self.bool("EnableSlabOffsetCheck")?;
            self.entry.slab_offset.design = self.bool("EnableSlabOffsetDesign")?;
            self.entry.harped_strand_design.strand_fill_type =
                self.enumeration("DesignStrandFillType")?;
        }
        if self.since(16.0) {
            self.entry
                .section_properties
                .effective_flange_width_method = self.enumeration("EffectiveFlangeWidthMethod")?;
        }
        Ok(())
    }

    fn shear(&mut self) -> Result<(), StoreError> {
        let edition = self.entry.specification.edition;
        if self.since(18.0) && self.v < 37.0 {
            self.entry.interface_shear.shear_flow_method = self.enumeration("ShearFlowMethod")?;
            self.entry.interface_shear.max_interface_shear_connector_spacing = if self.is_si() {
                600.0 * MILLIMETER
            } else {
                24.0 * INCH
            };
            let code = self.integer("ShearCapacityMethod")?;
            self.entry.shear_capacity.capacity_method =
                shear_method_for_edition(legacy_shear_capacity_method(code)?, edition);
            return Ok(());
        }
        if self.v < 37.0 {
            return Ok(());
        }

        let sv = self.open("Shear", 4.0)?;
        // the WSDOT longitudinal reinforcement method has been rescinded
        let _rescinded: i64 = self.integer("LongReinfShearMethod")?;
        let shear = &mut self.entry.shear_capacity;
        shear.longitudinal_reinforcement_for_shear_method = Default::default();
        shear.include_rebar = self.r.read_integer("IncludeRebarForCapacity")? != 0;
        self.entry.interface_shear.shear_flow_method = self.enumeration("ShearFlowMethod")?;
        if sv > 1.0 {
            if let Some(spacing) = self.r.read_float_opt("MaxInterfaceShearConnectorSpacing")? {
                self.entry.interface_shear.max_interface_shear_connector_spacing = spacing;
            }
        }
        if sv > 2.0 {
            self.entry.interface_shear.use_deck_weight_for_pc = self.bool("UseDeckWeightForPc")?;
        }
        let code = self.integer("ShearCapacityMethod")?;
        self.entry.shear_capacity.capacity_method = legacy_shear_capacity_method(code)?;
        if sv > 3.0 {
            self.entry
                .shear_capacity
                .limit_net_tension_strain_to_positive_values =
                self.bool("LimitNetTensionStrainToPositiveValues")?;
        }

        let opened = if sv < 2.0 {
            self.r.try_begin_unit("ReductionFactor", 1.0)?
        } else if sv == 2.0 {
            match self.r.try_begin_unit("ReductionFactor", 1.0)? {
                Some(v) => Some(v),
                None => self.r.try_begin_unit("ResistanceFactor", 1.0)?,
            }
        } else {
            self.r.try_begin_unit("ResistanceFactor", 1.0)?
        };
        if opened.is_none() {
            return Err(StoreError::malformed("expected shear resistance factors"));
        }
        let mut phi = self.entry.shear_capacity.phi;
        self.concrete_properties(&mut phi)?;
        self.entry.shear_capacity.phi = phi;
        self.close()?;

        if self.since(64.0) {
            self.open("ResistanceFactorDebonded", 2.0)?;
            let mut phi = self.entry.shear_capacity.phi_debonded;
            self.concrete_properties(&mut phi)?;
            self.entry.shear_capacity.phi_debonded = phi;
            self.close()?;
        }

        if sv > 1.0 && self.r.try_begin_unit("ClosureJointResistanceFactor", 1.0)?.is_some() {
            let mut phi = self.entry.shear_capacity.phi_closure_joint;
            self.concrete_properties(&mut phi)?;
            self.entry.shear_capacity.phi_closure_joint = phi;
            self.close()?;
        }
        self.close()
    }

    fn live_load_and_transfer(&mut self) -> Result<(), StoreError> {
        if self.v < 26.0 {
            let si = self.is_si();
            let ll = &mut self.entry.live_load;
            if si {
                ll.pedestrian_load = 3.6e-3 * MPA;
                ll.min_sidewalk_width = 600.0 * MILLIMETER;
            } else {
                ll.pedestrian_load = 0.075 * KSF;
                ll.min_sidewalk_width = 2.0 * FOOT;
            }
        } else {
            self.entry.live_load.pedestrian_load = self.float("PedestrianLoad")?;
            self.entry.live_load.min_sidewalk_width = self.float("MinSidewalkWidth")?;
        }

        if self.since(32.0) {
            let code = self.integer("PrestressTransferComputationType")?;
            self.entry.transfer_length.calculation_method = if code == 0 {
                TransferLengthType::MinuteValue
            } else {
                TransferLengthType::UsingSpecification
            };
        }
        Ok(())
    }

    fn duct_size_and_closure_joint(&mut self) -> Result<(), StoreError> {
        if self.since(52.0) && D::branch_unit(self.r, "DuctSize", 1.0)?.is_some() {
            self.entry.duct_size.duct_area_push_ratio = self.float("DuctAreaPushRatio")?;
            self.entry.duct_size.duct_area_pull_ratio = self.float("DuctAreaPullRatio")?;
            self.entry.duct_size.duct_diameter_ratio = self.float("DuctDiameterRatio")?;
            self.close()?;
        }

        if self.since(50.0) {
            self.open("ClosureJoint", 1.0)?;
            let cj = &mut self.entry.closure_joint;
            cj.compression_stress_coefficient_before_losses =
                self.r.read_float("ClosureCompStressAtStressing")?;
            for (limit, name) in [
                (
                    &mut cj.tension_before_losses.in_ptz_without_reinforcement,
                    "ClosureTensStressPTZAtStressing",
                ),
                (
                    &mut cj.tension_before_losses.in_ptz_with_reinforcement,
                    "ClosureTensStressPTZWithRebarAtStressing",
                ),
                (
                    &mut cj.tension_before_losses.other_areas_without_reinforcement,
                    "ClosureTensStressAtStressing",
                ),
                (
                    &mut cj.tension_before_losses.other_areas_with_reinforcement,
                    "ClosureTensStressWithRebarAtStressing",
                ),
            ] {
                *limit = TensionStressLimit::new(self.r.read_float(name)?);
            }
            cj.compression_stress_coefficient_permanent_loads_only_after_losses =
                self.r.read_float("ClosureCompStressAtService")?;
            cj.compression_stress_coefficient_all_loads_after_losses =
                self.r.read_float("ClosureCompStressWithLiveLoadAtService")?;
            for (limit, name) in [
                (
                    &mut cj.tension_after_losses.in_ptz_without_reinforcement,
                    "ClosureTensStressPTZAtService",
                ),
                (
                    &mut cj.tension_after_losses.in_ptz_with_reinforcement,
                    "ClosureTensStressPTZWithRebarAtService",
                ),
                (
                    &mut cj.tension_after_losses.other_areas_without_reinforcement,
                    "ClosureTensStressAtService",
                ),
                (
                    &mut cj.tension_after_losses.other_areas_with_reinforcement,
                    "ClosureTensStressWithRebarAtService",
                ),
            ] {
                *limit = TensionStressLimit::new(self.r.read_float(name)?);
            }
            cj.compression_stress_coefficient_fatigue =
                self.r.read_float("ClosureCompStressFatigue")?;
            self.close()?;
        }
        Ok(())
    }

    fn clearance_and_inclination(&mut self) -> Result<(), StoreError> {
        if self.after(47.0) {
            if let Some(check) = D::branch_bool(self.r, "CheckBottomFlangeClearance")? {
                self.entry.bottom_flange_clearance.check = check;
                self.entry.bottom_flange_clearance.min_clearance =
                    self.float("MinBottomFlangeClearance")?;
            }
        }
        if self.after(56.0) {
            self.entry.girder_inclination.check = self.bool("CheckGirderInclination")?;
            if self.v < 71.0 {
                self.entry.girder_inclination.bearing_pad_deduction =
                    self.float("InclindedGirder_BrgPadDeduction")?;
            }
            self.entry.girder_inclination.factor_of_safety = self.float("InclindedGirder_FSmax")?;
        }
        Ok(())
    }

    fn slab_offset_rounding_and_bearings(&mut self) -> Result<(), StoreError> {
        if self.after(61.0) {
            self.entry.slab_offset.finished_elevation_tolerance =
                self.float("FinishedElevationTolerance")?;
        }
        if self.after(72.0) {
            self.entry.slab_offset.rounding_method = self.enumeration("SlabOffsetRoundingMethod")?;
            self.entry.slab_offset.slab_offset_tolerance =
                self.float("SlabOffsetRoundingTolerance")?;
        } else {
            self.entry.slab_offset.rounding_method = SlabOffsetRoundingMethod::RoundNearest;
            self.entry.slab_offset.slab_offset_tolerance = if self.is_si() {
                5.0 * MILLIMETER
            } else {
                0.25 * INCH
            };
        }

        if self.after(78.0) {
            self.open("Bearings", 1.0)?;
            self.entry.bearing.alert_tapered_sole_plate_requirement =
                self.bool("AlertTaperedSolePlateRequirement")?;
            // stored with this spelling
            self.entry.bearing.tapered_sole_plate_inclination_threshold =
                self.float("TaperedSolePlaneInclinationThreshold")?;
            self.entry.bearing.use_impact_for_bearing_reactions =
                self.bool("UseImpactForBearingReactions")?;
            self.close()?;
        }
        Ok(())
    }

    fn fixup(&mut self) {
        let strength = &mut self.entry.limit_state_concrete_strength;
        if self.v < 72.0
            && self.entry.prestress_loss.loss_method != LossMethod::TimeStep
            && strength.limit_state_concrete_strength
                == LimitStateConcreteStrength::StrengthAtTimeOfLoading
        {
            strength.limit_state_concrete_strength = LimitStateConcreteStrength::SpecifiedStrength;
        }
    }
}
