//! Integration tests for specification entries and the library.

use speclib_criteria::{
    units::{KIP, KSF},
    BearingCriteria, CriteriaError, DifferencePayload, Edition, HoldDownCriteria,
    HoldDownForceType, LibraryManager, LimitStateConcreteStrength, LimitsCriteria, LossMethod,
    PrincipalTensionStressCriteria, ShearCapacityMethod, SpecificationEntry, CURRENT_VERSION,
};
use speclib_store::{Entry, LibraryFile, StoreError, Unit, Value};

// ---------------------------------------------------------------------------
// Flat legacy entry fixtures
// ---------------------------------------------------------------------------

/// Knobs for a hand-built legacy entry.
struct Legacy {
    version: f64,
    edition: Edition,
    loss_code: i64,
    shear_code: i64,
    limit_state_strength: i64,
    hold_down_force: f64,
    /// Property names to leave out, as a release branch might have.
    omit: Vec<&'static str>,
}

impl Legacy {
    fn new(version: f64) -> Self {
        Self {
            version,
            edition: Edition::FourthEdition2007,
            loss_code: 0,
            shear_code: 0,
            limit_state_strength: 0,
            hold_down_force: 45.0 * KIP,
            omit: Vec::new(),
        }
    }
}

/// Writes properties in the order the legacy layout stores them.
struct Builder<'a> {
    stack: Vec<Unit>,
    omit: &'a [&'static str],
}

impl<'a> Builder<'a> {
    fn new(version: f64, omit: &'a [&'static str]) -> Self {
        Self {
            stack: vec![Unit::new("SpecificationLibraryEntry", version)],
            omit,
        }
    }

    fn put(&mut self, name: &str, value: Value) {
        if self.omit.iter().any(|o| *o == name) {
            return;
        }
        self.stack.last_mut().unwrap().push_property(name, value);
    }

    fn b(&mut self, name: &str, value: bool) {
        self.put(name, Value::Bool(value));
    }

    fn i(&mut self, name: &str, value: i64) {
        self.put(name, Value::Integer(value));
    }

    fn f(&mut self, name: &str, value: f64) {
        self.put(name, Value::Float(value));
    }

    fn s(&mut self, name: &str, value: &str) {
        self.put(name, Value::String(value.to_string()));
    }

    fn floats(&mut self, names: &[&str]) {
        for name in names {
            self.f(name, 0.5);
        }
    }

    /// Opens a unit. Omitted units are still built but dropped on close.
    fn open(&mut self, name: &str, version: f64) {
        self.stack.push(Unit::new(name, version));
    }

    fn close(&mut self) {
        let unit = self.stack.pop().unwrap();
        if !self.omit.iter().any(|o| *o == unit.name) {
            self.stack.last_mut().unwrap().entries.push(Entry::Unit(unit));
        }
    }

    fn concrete_unit(&mut self, name: &str, version: f64) {
        self.open(name, version);
        self.floats(&["Normal", "AllLightweight", "SandLightweight"]);
        self.close();
    }

    fn finish(mut self) -> Unit {
        assert_eq!(self.stack.len(), 1);
        self.stack.pop().unwrap()
    }
}

fn legacy_entry(spec: &Legacy) -> Unit {
    let v = spec.version;
    let mut w = Builder::new(v, &spec.omit);

    w.s("Name", "Legacy");
    w.s("Description", "Converted");
    if v > 76.0 {
        w.b("UseCurrentSpecification", false);
    }
    w.s("SpecificationType", &spec.edition.key());
    w.s("SpecificationUnits", "UsUnitsSpec");
    if v >= 50.0 {
        w.i("SectionPropertyType", 0);
    }

    w.b("DoCheckStrandSlope", true);
    w.b("DoDesignStrandSlope", true);
    w.floats(&["MaxSlope05", "MaxSlope06"]);
    if v >= 35.0 {
        w.f("MaxSlope07", 0.5);
    }
    w.b("DoCheckHoldDown", true);
    w.b("DoDesignHoldDown", false);
    if v > 69.0 {
        w.i("HoldDownForceType", 1);
    }
    w.f("HoldDownForce", spec.hold_down_force);
    if v > 69.0 {
        w.f("HoldDownFriction", 0.0);
    }

    if v > 32.0 && v < 39.0 {
        w.b("DoCheckAnchorage", true);
    } else if v >= 39.0 {
        for name in [
            "DoCheckSplitting",
            "DoDesignSplitting",
            "DoCheckConfinement",
            "DoDesignConfinement",
        ] {
            w.b(name, true);
        }
    }
    if v > 69.0 {
        w.b("DoCheckHandlingWeightLimit", false);
        w.f("HandlingWeightLimit", 130.0 * KIP);
    }

    // both layouts; the reader skips the one it does not ask for
    w.f("MaxStirrupSpacing", 0.6);
    w.floats(&[
        "StirrupSpacingCoefficient1",
        "MaxStirrupSpacing1",
        "StirrupSpacingCoefficient2",
        "MaxStirrupSpacing2",
    ]);

    w.floats(&["CyLiftingCrackFs", "CyLiftingFailFs", "CyCompStressServ"]);
    if v < 65.0 {
        w.f("CyCompStressLifting", 0.6);
    } else {
        w.floats(&["CyGlobalCompStressLifting", "CyPeakCompStressLifting"]);
    }
    w.f("CyTensStressServ", 0.0948);
    w.b("CyDoTensStressServMax", true);
    w.f("CyTensStressServMax", 0.2);
    w.f("CyTensStressLifting", 0.0948);
    w.b("CyDoTensStressLiftingMax", true);
    w.f("CyTensStressLiftingMax", 0.2);
    w.floats(&[
        "BurstingZoneLengthFactor",
        "LiftingUpwardImpact",
        "LiftingDownwardImpact",
        "HaulingUpwardImpact",
        "HaulingDownwardImpact",
    ]);
    w.i("CuringMethod", 0);

    w.b("EnableLiftingCheck", true);
    w.b("EnableLiftingDesign", true);
    w.floats(&[
        "PickPointHeight",
        "LiftingLoopTolerance",
        "MinCableInclination",
        "MaxGirderSweepLifting",
    ]);
    if v > 55.0 {
        if v > 57.0 {
            w.f("LiftingCamberMultiplier", 1.0);
        }
        w.i("LiftingWindType", 0);
        w.f("LiftingWindLoad", 0.0);
    }

    w.b("EnableHaulingCheck", true);
    w.b("EnableHaulingDesign", true);
    if v >= 43.0 {
        w.i("HaulingAnalysisMethod", 0);
    }
    w.f("MaxGirderSweepHauling", 0.5);
    if v > 65.0 {
        w.f("SweepGrowthHauling", 0.5);
    }
    if v < 56.0 {
        w.floats(&["HaulingSupportDistance", "MaxHaulingOverhang"]);
    }
    w.f("HaulingSupportPlacementTolerance", 0.5);
    if v > 57.0 {
        w.f("HaulingCamberMultiplier", 1.0);
    }
    if v > 55.0 {
        w.i("HaulingWindType", 0);
        w.f("HaulingWindLoad", 0.0);
        w.i("CentrifugalForceType", 0);
        w.floats(&["HaulingSpeed", "TurningRadius"]);
    }
    if v < 65.0 {
        w.f("CompStressHauling", 0.6);
    } else {
        w.floats(&["GlobalCompStressHauling", "PeakCompStressHauling"]);
    }
    if v < 56.0 {
        w.f("TensStressHauling", 0.0948);
        w.b("DoTensStressHaulingMax", true);
        w.f("TensStressHaulingMax", 0.2);
    } else {
        w.f("TensStressHaulingNormalCrown", 0.0948);
        w.b("DoTensStressHaulingMaxNormalCrown", true);
        w.f("TensStressHaulingMaxNormalCrown", 0.2);
        w.f("TensStressHaulingMaxSuper", 0.0948);
        w.b("DoTensStressHaulingMaxMaxSuper", true);
        w.f("TensStressHaulingMaxMaxSuper", 0.2);
    }
    w.floats(&["HeHaulingCrackFs", "HeHaulingFailFs"]);
    if v > 55.0 {
        w.i("HaulingImpactUsage", 0);
        w.f("RoadwayCrownSlope", 0.02);
    }
    w.f("RoadwaySuperelevation", 0.06);
    if v < 56.0 {
        w.i("TruckRollStiffnessMethod", 0);
        w.floats(&[
            "TruckRollStiffness",
            "AxleWeightLimit",
            "AxleStiffness",
            "MinRollStiffness",
            "TruckGirderHeight",
            "TruckRollCenterHeight",
            "TruckAxleWidth",
            "MaxGirderWgt",
        ]);
    }

    if v > 52.0 {
        w.i("LimitStateConcreteStrength", spec.limit_state_strength);
    }
    if v > 71.0 {
        w.b("Use90DayConcreteStrength", false);
        w.f("SlowCuringConcreteStrengthFactor", 1.15);
    }
    if v < 37.0 {
        w.floats(&[
            "HaulingModulusOfRuptureCoefficient",
            "LiftingModulusOfRuptureCoefficient",
        ]);
    }
    if v >= 25.0 {
        w.floats(&[
            "MinLiftingPointLocation",
            "LiftingPointLocationAccuracy",
            "MinHaulingSupportLocation",
            "HaulingSupportLocationAccuracy",
        ]);
    }
    if v >= 43.0 {
        w.b("UseMinTruckSupportLocationFactor", false);
        w.floats(&[
            "MinTruckSupportLocationFactor",
            "OverhangGFactor",
            "InteriorGFactor",
        ]);
    }
    w.floats(&[
        "CastingYardTensileStressLimitWithMildRebar",
        "LiftingTensileStressLimitWithMildRebar",
    ]);
    if v < 56.0 {
        w.f("HaulingTensileStressLimitWithMildRebar", 0.19);
    } else {
        w.floats(&[
            "HaulingTensileStressLimitWithMildRebarNormalCrown",
            "HaulingTensileStressLimitWithMildRebarMaxSuper",
        ]);
    }

    if v > 29.0 {
        w.f("TempStrandRemovalCompStress", 0.45);
        w.f("TempStrandRemovalTensStress", 0.19);
        w.b("TempStrandRemovalDoTensStressMax", false);
        w.f("TempStrandRemovalTensStressMax", 0.6);
    }
    if v > 48.0 {
        w.f("TempStrandRemovalTensStressWithRebar", 0.24);
    }
    if v > 46.0 {
        w.b("CheckTemporaryStresses", false);
    }
    let prefix = if v < 30.0 { "m_" } else { "" };
    w.f(&format!("{prefix}Bs1CompStress"), 0.6);
    w.f(&format!("{prefix}Bs1TensStress"), 0.0);
    w.b(&format!("{prefix}Bs1DoTensStressMax"), false);
    w.f(&format!("{prefix}Bs1TensStressMax"), 0.0);
    w.f(&format!("{prefix}Bs2CompStress"), 0.45);
    if v > 46.0 {
        w.b("CheckBs2Tension", true);
        w.f("Bs2TensStress", 0.0);
        w.b("Bs2DoTensStressMax", false);
        w.f("Bs2TensStressMax", 0.0);
    }

    if v >= 36.0 {
        w.i("Bs2TrafficBarrierDistributionType", 1);
        w.i("Bs2MaxGirdersTrafficBarrier", 4);
    }
    if v > 33.0 {
        w.i("OverlayLoadDistribution", 0);
    }
    if v > 53.0 {
        w.i("HaunchLoadComputationType", 0);
        w.f("HaunchLoadCamberTolerance", 0.0);
    }
    if v > 59.0 {
        w.f("HaunchLoadCamberFactor", 1.0);
    }
    if v > 62.0 {
        w.i("HaunchAnalysisComputationType", 0);
    }

    w.floats(&["Bs3CompStressServ", "Bs3CompStressService1A"]);
    w.f("Bs3TensStressServNc", 0.19);
    w.b("Bs3DoTensStressServNcMax", false);
    w.f("Bs3TensStressServNcMax", 0.6);
    w.f("Bs3TensStressServSc", 0.0948);
    w.b("Bs3DoTensStressServScMax", false);
    w.f("Bs3TensStressServScMax", 0.3);
    if v > 75.0 {
        w.i("PrincipalTensileStressMethod", 0);
        w.f("PrincipalTensileStressCoefficient", 0.110);
    }
    if v > 76.0 {
        w.f("PrincipalTensileStressTendonNearnessFactor", 1.5);
    }
    if v > 77.0 {
        w.f("PrincipalTensileStressFcThreshold", 0.0);
    }
    if v > 79.0 {
        w.f("PrincipalTensileStressUngroutedMultiplier", 0.7);
        w.f("PrincipalTensileStressGroutedMultiplier", 0.3);
    }
    if v < 29.0 {
        w.b("Bs3IgnoreRangeOfApplicability", true);
    }

    if v < 37.0 {
        w.i("Bs3LRFDOverreinforcedMomentCapacity", 0);
        w.i("IncludeRebar_MomentCapacity", 1);
        w.floats(&[
            "ModulusOfRuptureCoefficient",
            "ShearModulusOfRuptureCoefficient",
        ]);
    } else {
        w.open("MomentCapacity", 5.0);
        w.i("Bs3LRFDOverreinforcedMomentCapacity", 0);
        w.b("IncludeStrandForNegMoment", true);
        w.i("IncludeRebarForCapacity", 1);
        w.b("ConsiderReinforcementStrainLimit", false);
        w.i("MomentCapacitySliceCount", 50);
        w.b("IncludeNoncompositeMomentForNegMomentDesign", true);
        w.open("ResistanceFactor", 2.0);
        for name in ["NormalWeight", "AllLightweight", "SandLightweight"] {
            w.open(name, 2.0);
            w.f("TensionControlled_RC", 0.9);
            w.f("TensionControlled_PS", 1.0);
            w.f("TensionControlled_Spliced", 0.95);
            w.f("CompressionControlled", 0.75);
            w.close();
        }
        w.close();
        w.open("ClosureJointResistanceFactor", 1.0);
        for name in ["NormalWeight", "AllLightweight", "SandLightweight"] {
            w.open(name, 1.0);
            w.f("FullyBondedTendons", 0.95);
            w.close();
        }
        w.close();
        w.close();

        w.open("ModulusOfRuptureCoefficient", 1.0);
        for name in ["Moment", "Shear", "Lifting", "Shipping"] {
            w.concrete_unit(name, 3.0);
        }
        w.close();
    }

    w.i("BsLldfMethod", 0);
    if v > 73.0 {
        w.b("IgnoreSkewReductionForMoment", false);
    }
    if v > 28.0 {
        w.floats(&[
            "MaxAngularDeviationBetweenGirders",
            "MinGirderStiffnessRatio",
            "LLDFGirderSpacingLocation",
        ]);
    }
    if v > 69.0 {
        w.b("UseRigidMethod", false);
    }
    if v > 60.0 {
        w.b("IncludeDualTandem", true);
    }
    if v > 30.0 {
        w.b("LimitDistributionFactorsToLanesBeams", false);
    }
    if v > 80.0 {
        w.b("ExteriorLiveLoadDistributionGTAdjacentInteriorRule", false);
    }
    if v < 37.0 {
        w.i("LongReinfShearMethod", 0);
        w.i("IncludeRebar_Shear", 0);
    }

    w.floats(&[
        "CreepDuration1Min",
        "CreepDuration1Max",
        "CreepDuration2Min",
        "CreepDuration2Max",
        "XferTime",
        "TotalCreepDuration",
    ]);
    if v >= 44.0 {
        w.f("CamberVariability", 0.25);
    }
    w.i("LossMethod", spec.loss_code);
    if v >= 50.0 {
        w.i("TimeDependentModel", 0);
        w.floats(&["ShippingLosses", "ShippingTime"]);
    } else {
        w.f("FinalLosses", 0.3);
        w.f("ShippingLosses", 0.2);
        w.f("BeforeXferLosses", 0.05);
        w.f("AfterXferLosses", 0.1);
        w.f("ShippingTime", 10.0);
        w.f("LiftingLosses", 0.12);
        w.floats(&[
            "BeforeTempStrandRemovalLosses",
            "AfterTempStrandRemovalLosses",
            "AfterDeckPlacementLosses",
        ]);
        if v >= 38.0 {
            w.f("AfterSIDLLosses", 0.25);
        }
    }
    w.f("CuringMethodFactor", 7.0);

    for key in ["AtJacking", "BeforeTransfer", "AfterTransfer", "AfterAllLosses"] {
        w.b(&format!("CheckStrandStress{key}"), true);
        w.f(&format!("Coeff_{key}_StressRel"), 0.72);
        w.f(&format!("Coeff_{key}_LowRelax"), 0.78);
    }
    if v >= 50.0 {
        w.b("CheckTendonStressAtJacking", false);
        w.b("CheckTendonStressPriorToSeating", true);
        for key in [
            "AtJacking",
            "PriorToSeating",
            "AtAnchoragesAfterSeating",
            "ElsewhereAfterSeating",
            "AfterAllLosses",
        ] {
            w.f(&format!("Coeff_{key}_StressRel"), 0.7);
            w.f(&format!("Coeff_{key}_LowRelax"), 0.74);
        }
    }
    if v > 22.0 && v < 50.0 {
        w.f("AnchorSet", 0.01);
        w.f("WobbleFriction", 0.0007);
        w.f("CoefficientOfFriction", 0.25);
    }

    if v > 39.0 {
        w.i("RelaxationLossMethod", 0);
        w.floats(&[
            "SlabElasticGain",
            "HaunchElasticGain",
            "DiaphragmElasticGain",
            "UserDCElasticGainBS1",
            "UserDWElasticGainBS1",
            "UserDCElasticGainBS2",
            "UserDWElasticGainBS2",
            "RailingSystemElasticGain",
            "OverlayElasticGain",
            "SlabShrinkageElasticGain",
        ]);
        if v > 41.0 {
            w.f("LiveLoadElasticGain", 0.0);
        }
        if v > 44.0 {
            w.i("FcgpComputationMethod", 0);
        }
    }

    w.b("CheckLiveLoadDeflection", true);
    w.f("LiveLoadDeflectionLimit", 800.0);
    if v >= 8.0 && v < 28.0 {
        w.i("AnalysisType", 2);
    }
    if v < 37.0 {
        w.floats(&[
            "MaxSlabFc",
            "MaxGirderFci",
            "MaxGirderFc",
            "MaxConcreteUnitWeight",
            "MaxConcreteAggSize",
        ]);
    } else {
        w.open("Limits", 1.0);
        for name in ["Normal", "AllLightweight", "SandLightweight"] {
            w.open(name, 2.0);
            w.floats(&[
                "MaxSlabFc",
                "MaxGirderFci",
                "MaxGirderFc",
                "MaxClosureFci",
                "MaxClosureFc",
                "MaxConcreteUnitWeight",
                "MaxConcreteAggSize",
            ]);
            w.close();
        }
        w.close();
    }
    if v >= 44.0 {
        w.open("Warnings", 1.0);
        w.b("DoCheckStirrupSpacingCompatibility", true);
        w.b("CheckGirderSag", true);
        w.i("SagCamberType", 0);
        w.close();
    }

    w.b("EnableSlabOffsetCheck", true);
    w.b("EnableSlabOffsetDesign", true);
    w.i("DesignStrandFillType", 0);
    w.i("EffectiveFlangeWidthMethod", 0);

    if v < 37.0 {
        w.i("ShearFlowMethod", 0);
        w.i("ShearCapacityMethod", spec.shear_code);
    } else {
        w.open("Shear", 4.0);
        w.i("LongReinfShearMethod", 1);
        w.i("IncludeRebarForCapacity", 0);
        w.i("ShearFlowMethod", 0);
        w.f("MaxInterfaceShearConnectorSpacing", 0.6);
        w.b("UseDeckWeightForPc", false);
        w.i("ShearCapacityMethod", spec.shear_code);
        w.b("LimitNetTensionStrainToPositiveValues", true);
        w.concrete_unit("ResistanceFactor", 1.0);
        if v >= 64.0 {
            w.concrete_unit("ResistanceFactorDebonded", 2.0);
        }
        w.concrete_unit("ClosureJointResistanceFactor", 1.0);
        w.close();
    }

    if v >= 26.0 {
        w.f("PedestrianLoad", 3_591.0);
        w.f("MinSidewalkWidth", 0.6);
    }
    if v >= 32.0 {
        w.i("PrestressTransferComputationType", 1);
    }

    if v >= 52.0 {
        w.open("DuctSize", 1.0);
        w.floats(&["DuctAreaPushRatio", "DuctAreaPullRatio", "DuctDiameterRatio"]);
        w.close();
    }
    if v >= 50.0 {
        w.open("ClosureJoint", 1.0);
        w.floats(&[
            "ClosureCompStressAtStressing",
            "ClosureTensStressPTZAtStressing",
            "ClosureTensStressPTZWithRebarAtStressing",
            "ClosureTensStressAtStressing",
            "ClosureTensStressWithRebarAtStressing",
            "ClosureCompStressAtService",
            "ClosureCompStressWithLiveLoadAtService",
            "ClosureTensStressPTZAtService",
            "ClosureTensStressPTZWithRebarAtService",
            "ClosureTensStressAtService",
            "ClosureTensStressWithRebarAtService",
            "ClosureCompStressFatigue",
        ]);
        w.close();
    }

    if v > 47.0 {
        w.b("CheckBottomFlangeClearance", true);
        w.f("MinBottomFlangeClearance", 1.0);
    }
    if v > 56.0 {
        w.b("CheckGirderInclination", true);
        if v < 71.0 {
            w.f("InclindedGirder_BrgPadDeduction", 0.0);
        }
        w.f("InclindedGirder_FSmax", 1.2);
    }

    if v > 61.0 {
        w.f("FinishedElevationTolerance", 0.01);
    }
    if v > 72.0 {
        w.i("SlabOffsetRoundingMethod", 1);
        w.f("SlabOffsetRoundingTolerance", 0.005);
    }
    if v > 78.0 {
        w.open("Bearings", 1.0);
        w.b("AlertTaperedSolePlateRequirement", true);
        w.f("TaperedSolePlaneInclinationThreshold", 0.02);
        w.b("UseImpactForBearingReactions", true);
        w.close();
    }

    w.finish()
}

fn load_legacy(spec: &Legacy) -> Result<SpecificationEntry, CriteriaError> {
    SpecificationEntry::from_unit(&legacy_entry(spec))
}

// ---------------------------------------------------------------------------
// Legacy loading
// ---------------------------------------------------------------------------

#[test]
fn legacy_general_lump_sum_is_refactored() {
    let mut spec = Legacy::new(30.0);
    spec.loss_code = 3;
    let mut entry = load_legacy(&spec).unwrap();

    assert_eq!(entry.name(), "Legacy");
    assert_eq!(entry.specification().edition, Edition::FourthEdition2007);
    assert_eq!(entry.prestress_loss().loss_method, LossMethod::GeneralLumpSum);
    assert_eq!(entry.hold_down().force_type, HoldDownForceType::Total);
    assert!((entry.hold_down().force_limit - 45.0 * KIP).abs() < 1e-6);

    let params = entry.take_refactored_parameters().unwrap();
    let losses = params.lump_sum_losses.unwrap();
    assert_eq!(losses.final_losses, 0.3);
    assert_eq!(losses.lifting, 0.12);
    // no SIDL losses before version 38
    assert_eq!(losses.after_sidl, losses.after_deck_placement);
    assert!(params.post_tensioning.is_some());
    assert!(params.old_haul_truck.is_some());
    assert_eq!(params.ignore_range_of_applicability, None);
    assert_eq!(params.analysis_type, None);

    assert!(entry.take_refactored_parameters().is_none());
}

#[test]
fn legacy_early_flat_fields() {
    let mut spec = Legacy::new(20.0);
    spec.edition = Edition::ThirdEdition2004;
    spec.shear_code = 0;
    let mut entry = load_legacy(&spec).unwrap();

    // general method before the 2008 interims is the tables method
    assert_eq!(
        entry.shear_capacity().capacity_method,
        ShearCapacityMethod::BtTables
    );
    // pedestrian load was not stored yet
    assert!((entry.live_load().pedestrian_load - 0.075 * KSF).abs() < 1e-6);

    let params = entry.take_refactored_parameters().unwrap();
    assert_eq!(params.analysis_type, Some(2));
    assert_eq!(params.ignore_range_of_applicability, Some(true));
    assert!(params.lump_sum_losses.is_none());
    assert!(params.post_tensioning.is_none());
}

#[test]
fn legacy_overlap_range_tolerates_missing_branch_fields() {
    let mut spec = Legacy::new(50.0);
    spec.omit = vec![
        "CheckTemporaryStresses",
        "CheckBs2Tension",
        "CamberVariability",
        "Warnings",
        "CheckBottomFlangeClearance",
    ];
    let entry = load_legacy(&spec).unwrap();
    let defaults = SpecificationEntry::default();

    assert_eq!(
        entry.prestressed_element().check_temporary_stresses,
        defaults.prestressed_element().check_temporary_stresses
    );
    assert_eq!(
        entry.creep().camber_variability,
        defaults.creep().camber_variability
    );
    assert_eq!(entry.limits().check_sag, defaults.limits().check_sag);
    assert_eq!(
        entry.bottom_flange_clearance(),
        defaults.bottom_flange_clearance()
    );
    // version 50 of one branch stored a single stirrup spacing
    assert_eq!(entry.shear_capacity().max_stirrup_spacing[0], 0.6);
}

#[test]
fn legacy_overlap_range_reads_branch_fields_when_present() {
    let entry = load_legacy(&Legacy::new(49.0)).unwrap();
    assert!(!entry.prestressed_element().check_temporary_stresses);
    assert_eq!(entry.creep().camber_variability, 0.25);
    assert!(entry.bottom_flange_clearance().check);
    assert_eq!(entry.shear_capacity().max_stirrup_spacing[0], 0.5);
}

#[test]
fn legacy_mainline_requires_branch_fields() {
    let mut spec = Legacy::new(54.0);
    spec.omit = vec!["CheckTemporaryStresses"];
    assert!(matches!(
        load_legacy(&spec),
        Err(CriteriaError::InvalidFileFormat(_))
    ));
}

#[test]
fn legacy_unknown_loss_method_is_invalid_format() {
    let mut spec = Legacy::new(60.0);
    spec.loss_code = 2;
    assert!(matches!(
        load_legacy(&spec),
        Err(CriteriaError::InvalidFileFormat(_))
    ));
}

#[test]
fn legacy_strength_at_loading_reset_without_time_step() {
    let mut spec = Legacy::new(60.0);
    spec.limit_state_strength = 1;
    let entry = load_legacy(&spec).unwrap();
    assert_eq!(
        entry.limit_state_concrete_strength().limit_state_concrete_strength,
        LimitStateConcreteStrength::SpecifiedStrength
    );

    spec.loss_code = 12;
    let entry = load_legacy(&spec).unwrap();
    assert_eq!(
        entry.limit_state_concrete_strength().limit_state_concrete_strength,
        LimitStateConcreteStrength::StrengthAtTimeOfLoading
    );
}

#[test]
fn legacy_principal_multipliers_follow_version() {
    let mut spec = Legacy::new(70.0);
    spec.edition = Edition::NinthEdition2020;
    let entry = load_legacy(&spec).unwrap();
    let (ungrouted, grouted) =
        PrincipalTensionStressCriteria::duct_deduction_multipliers(Edition::NinthEdition2020);
    assert_eq!(entry.principal_tension_stress().ungrouted_multiplier, ungrouted);
    assert_eq!(entry.principal_tension_stress().grouted_multiplier, grouted);

    let mut spec = Legacy::new(82.0);
    spec.edition = Edition::NinthEdition2020;
    let mut entry = load_legacy(&spec).unwrap();
    assert_eq!(entry.principal_tension_stress().ungrouted_multiplier, 0.7);
    assert_eq!(entry.principal_tension_stress().grouted_multiplier, 0.3);
    assert_eq!(entry.hold_down().force_type, HoldDownForceType::PerStrand);
    assert!(entry.bearing().use_impact_for_bearing_reactions);

    // a recent legacy entry has nothing to hand back, but still reports it once
    let params = entry.take_refactored_parameters().unwrap();
    assert!(params.is_empty());
}

#[test]
fn legacy_entry_saves_in_current_format() {
    let entry = load_legacy(&Legacy::new(60.0)).unwrap();
    let unit = entry.to_unit().unwrap();
    assert_eq!(unit.version, CURRENT_VERSION);
    let reloaded = SpecificationEntry::from_unit(&unit).unwrap();
    assert!(!reloaded.has_refactored_parameters());
    let mut diffs = Vec::new();
    assert!(entry.compare(&reloaded, &mut diffs, false), "{diffs:?}");
}

// ---------------------------------------------------------------------------
// Current format
// ---------------------------------------------------------------------------

#[test]
fn version_83_entry_has_no_thermal_movement() {
    let mut entry = SpecificationEntry::new("Gated");
    let mut thermal = entry.thermal_movement().clone();
    thermal.thermal_movement_factor = 0.5;
    entry.set_thermal_movement(thermal);

    let mut unit = entry.to_unit().unwrap();
    unit.version = 83.0;
    unit.entries
        .retain(|e| !matches!(e, Entry::Unit(u) if u.name == "ThermalMovementCriteria"));

    let loaded = SpecificationEntry::from_unit(&unit).unwrap();
    assert_eq!(
        loaded.thermal_movement(),
        SpecificationEntry::default().thermal_movement()
    );
    assert!(!loaded.has_refactored_parameters());
}

#[test]
fn default_limits_round_trip() {
    let mut entry = SpecificationEntry::new("Limits");
    entry.set_limits(LimitsCriteria::default());
    let loaded = SpecificationEntry::from_unit(&entry.to_unit().unwrap()).unwrap();
    assert_eq!(loaded.limits(), &LimitsCriteria::default());
}

#[test]
fn bearing_impact_is_a_single_difference() {
    let a = SpecificationEntry::new("A");
    let mut b = a.clone();
    b.set_bearing(BearingCriteria {
        use_impact_for_bearing_reactions: !a.bearing().use_impact_for_bearing_reactions,
        ..a.bearing().clone()
    });

    let mut diffs = Vec::new();
    assert!(!a.compare(&b, &mut diffs, false));
    assert_eq!(diffs.len(), 1);
    assert!(diffs[0].item.contains("Dynamic load allowance"));
    assert!(matches!(diffs[0].payload, DifferencePayload::Bool { .. }));
}

#[test]
fn hold_down_force_type_difference() {
    let mut a = SpecificationEntry::new("A");
    a.set_hold_down(HoldDownCriteria {
        check: true,
        force_type: HoldDownForceType::Total,
        force_limit: 50_000.0,
        ..Default::default()
    });
    let mut b = a.clone();
    b.set_hold_down(HoldDownCriteria {
        force_type: HoldDownForceType::PerStrand,
        ..a.hold_down().clone()
    });

    let mut diffs = Vec::new();
    assert!(!a.compare(&b, &mut diffs, false));
    assert_eq!(diffs.len(), 1);
    diffs.clear();
    assert!(!b.compare(&a, &mut diffs, false));
    assert_eq!(diffs.len(), 1);
}

#[test]
fn stop_on_first_reports_one_item() {
    let a = SpecificationEntry::new("A");
    let mut b = a.clone();
    b.set_hold_down(HoldDownCriteria {
        design: !a.hold_down().design,
        ..a.hold_down().clone()
    });
    b.set_bearing(BearingCriteria {
        use_impact_for_bearing_reactions: !a.bearing().use_impact_for_bearing_reactions,
        ..a.bearing().clone()
    });

    let mut all = Vec::new();
    assert!(!a.compare(&b, &mut all, false));
    assert_eq!(all.len(), 2);

    let mut first = Vec::new();
    assert!(!a.compare(&b, &mut first, true));
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].item, all[0].item);
}

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

#[test]
fn library_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("criteria.slf");

    let mut lib = LibraryManager::new();
    lib.new_entry("WSDOT").unwrap();
    let entry = lib.new_entry("TxDOT").unwrap();
    let mut hold_down = entry.hold_down().clone();
    hold_down.force_type = HoldDownForceType::PerStrand;
    entry.set_hold_down(hold_down);

    std::fs::write(&path, lib.to_bytes().unwrap()).unwrap();
    let (loaded, refactored) = LibraryManager::from_bytes(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(loaded, lib);
    assert!(refactored.is_empty());
}

#[test]
fn library_returns_legacy_parameters_by_key() {
    let mut spec = Legacy::new(30.0);
    spec.loss_code = 3;
    let root = Unit::new("SpecificationLibrary", 1.0).with_unit(legacy_entry(&spec));

    let bytes = LibraryFile::new(root).to_bytes().unwrap();
    let (lib, refactored) = LibraryManager::from_bytes(&bytes).unwrap();
    assert!(lib.contains("Legacy"));
    assert!(!lib.get("Legacy").unwrap().has_refactored_parameters());
    assert!(refactored["Legacy"].lump_sum_losses.is_some());
}

#[test]
fn library_rejects_reserved_entry_names() {
    let entry = SpecificationEntry::new("HL-93");
    let root = Unit::new("SpecificationLibrary", 1.0).with_unit(entry.to_unit().unwrap());
    let mut lib = LibraryManager::new();
    assert!(matches!(
        lib.load_unit(&root),
        Err(CriteriaError::ReservedName(_))
    ));
}

#[test]
fn replaced_entry_keeps_its_key() {
    let mut lib = LibraryManager::new();
    lib.new_entry("A").unwrap();
    lib.new_entry("B").unwrap();
    *lib.get_mut("A").unwrap() = SpecificationEntry::new("B");

    let (loaded, _) = LibraryManager::from_bytes(&lib.to_bytes().unwrap())
        .expect("library saved under its keys reloads");
    assert_eq!(loaded.keys().collect::<Vec<_>>(), ["A", "B"]);
}

#[test]
fn non_finite_value_is_not_saved() {
    let mut lib = LibraryManager::new();
    let entry = lib.new_entry("A").unwrap();
    let mut creep = entry.creep().clone();
    creep.xfer_time = f64::NAN;
    entry.set_creep(creep);

    let entry = lib.get("A").unwrap();
    let mut diffs = Vec::new();
    assert!(entry.compare(&entry.clone(), &mut diffs, false));
    assert!(diffs.is_empty());

    assert!(matches!(
        lib.to_bytes(),
        Err(CriteriaError::Store(StoreError::NonFiniteFloat { .. }))
    ));
}
