//! The criteria modules that make up a specification entry.

mod bearing;
mod bottom_flange_clearance;
mod closure_joint;
mod creep;
mod dead_load_distribution;
mod duct_size;
mod end_zone;
mod girder_inclination;
mod harped_strand_design;
mod haunch;
mod hauling;
mod hold_down;
mod interface_shear;
mod lifting;
mod limit_state_concrete_strength;
mod limits;
mod live_load;
mod live_load_deflection;
mod live_load_distribution;
mod moment_capacity;
mod plant_handling;
mod prestress_loss;
mod prestressed_element;
mod principal_tension_stress;
mod section_properties;
mod shear_capacity;
mod slab_offset;
mod specification;
mod strand_slope;
mod strand_stress;
mod tendon_stress;
mod thermal_movement;
mod transfer_length;

pub use bearing::BearingCriteria;
pub use bottom_flange_clearance::BottomFlangeClearanceCriteria;
pub use closure_joint::{ClosureJointCriteria, ClosureJointTensionLimits};
pub use creep::{CreepCriteria, CuringMethod};
pub use dead_load_distribution::{
    DeadLoadDistributionCriteria, OverlayLoadDistribution, TrafficBarrierDistribution,
};
pub use duct_size::DuctSizeCriteria;
pub use end_zone::EndZoneCriteria;
pub use girder_inclination::GirderInclinationCriteria;
pub use harped_strand_design::{HarpedStrandDesignCriteria, StrandFillType};
pub use haunch::{HaunchAnalysisSectionPropertiesType, HaunchCriteria, HaunchLoadComputationType};
pub use hauling::{
    CentrifugalForceType, HaulingAnalysisMethod, HaulingCriteria, HaulingImpact, HaulingSlope,
    KdotHaulingCriteria, WsdotHaulingCriteria,
};
pub use hold_down::{HoldDownCriteria, HoldDownForceType};
pub use interface_shear::{InterfaceShearCriteria, ShearFlowMethod};
pub use lifting::{LiftingCriteria, WindLoadType};
pub use limit_state_concrete_strength::{
    LimitStateConcreteStrength, LimitStateConcreteStrengthCriteria,
};
pub use limits::{ConcreteLimits, LimitsCriteria, SagCamberType};
pub use live_load::LiveLoadCriteria;
pub use live_load_deflection::LiveLoadDeflectionCriteria;
pub use live_load_distribution::{LiveLoadDistributionCriteria, LldfMethod};
pub use moment_capacity::{
    FlexureResistanceFactors, MomentCapacityCriteria, OverReinforcedMomentCapacity,
};
pub use plant_handling::PlantHandlingCriteria;
pub use prestress_loss::{
    FcgpComputationMethod, LossMethod, PrestressLossCriteria, RelaxationLossMethod,
    TimeDependentConcreteModel,
};
pub use prestressed_element::PrestressedElementCriteria;
pub use principal_tension_stress::{PrincipalTensileStressMethod, PrincipalTensionStressCriteria};
pub use section_properties::{
    EffectiveFlangeWidthMethod, SectionPropertiesCriteria, SectionPropertyMode,
};
pub use shear_capacity::{
    LongitudinalReinforcementForShearMethod, ShearCapacityCriteria, ShearCapacityMethod,
};
pub use slab_offset::{SlabOffsetCriteria, SlabOffsetRoundingMethod};
pub use specification::SpecificationCriteria;
pub(crate) use specification::exchange_edition;
pub use strand_slope::StrandSlopeCriteria;
pub use strand_stress::{StrandStressCriteria, StrandStressLimit, StrandStressStage};
pub use tendon_stress::{TendonCoefficients, TendonStressCriteria, TendonStressStage};
pub use thermal_movement::ThermalMovementCriteria;
pub use transfer_length::{TransferLengthCriteria, TransferLengthType};
