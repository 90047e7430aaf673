//! The specification entry: every criteria module under one name.

use speclib_store::{Archive, StoreError, Unit, UnitReader, UnitWriter};
use tracing::debug;

use crate::criteria::*;
use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::error::CriteriaError;
use crate::legacy::{self, RefactoredParameters};
use crate::module::CriteriaModule;
use crate::report::ReportSink;

/// Name of the unit an entry is stored in.
pub const UNIT_NAME: &str = "SpecificationLibraryEntry";

/// Version this build writes. Also the highest version it reads.
pub const CURRENT_VERSION: f64 = 84.0;

/// First version stored as one unit per criteria module. Older entries go
/// through the legacy decoders.
pub const MODERN_FORMAT_VERSION: f64 = 83.0;

/// Lowest version any build ever wrote.
pub const MIN_VERSION: f64 = 1.0;

/// Declares the entry with one field per module, in save order. Each module
/// names the outer version its unit first appeared in.
macro_rules! specification_entry {
    ( $( $field:ident : $ty:ty => $set:ident, since $since:literal; )+ ) => {
        /// A named, complete set of design criteria.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct SpecificationEntry {
            pub(crate) name: String,
            $( pub(crate) $field: $ty, )+
            refactored: Option<RefactoredParameters>,
        }

        impl SpecificationEntry {
            $(
                pub fn $field(&self) -> &$ty {
                    &self.$field
                }

                pub fn $set(&mut self, value: $ty) {
                    self.$field = value;
                }
            )+

            fn save_modules(&self, ar: &mut dyn Archive) -> Result<(), StoreError> {
                $( self.$field.save(ar)?; )+
                Ok(())
            }

            fn read_modules(
                &mut self,
                reader: &mut UnitReader<'_>,
                version: f64,
            ) -> Result<(), StoreError> {
                $(
                    if version >= $since {
                        self.$field = <$ty>::read(reader)?;
                    }
                )+
                Ok(())
            }

            fn report_modules(
                &self,
                edition: Edition,
                sink: &mut dyn ReportSink,
            ) -> Result<(), StoreError> {
                $( self.$field.report(edition, sink)?; )+
                Ok(())
            }
        }
    };
}

specification_entry! {
    specification: SpecificationCriteria => set_specification, since 83.0;
    section_properties: SectionPropertiesCriteria => set_section_properties, since 83.0;
    thermal_movement: ThermalMovementCriteria => set_thermal_movement, since 84.0;
    hold_down: HoldDownCriteria => set_hold_down, since 83.0;
    strand_slope: StrandSlopeCriteria => set_strand_slope, since 83.0;
    end_zone: EndZoneCriteria => set_end_zone, since 83.0;
    plant_handling: PlantHandlingCriteria => set_plant_handling, since 83.0;
    live_load_deflection: LiveLoadDeflectionCriteria => set_live_load_deflection, since 83.0;
    bottom_flange_clearance: BottomFlangeClearanceCriteria => set_bottom_flange_clearance, since 83.0;
    girder_inclination: GirderInclinationCriteria => set_girder_inclination, since 83.0;
    slab_offset: SlabOffsetCriteria => set_slab_offset, since 83.0;
    harped_strand_design: HarpedStrandDesignCriteria => set_harped_strand_design, since 83.0;
    limit_state_concrete_strength: LimitStateConcreteStrengthCriteria => set_limit_state_concrete_strength, since 83.0;
    prestressed_element: PrestressedElementCriteria => set_prestressed_element, since 83.0;
    principal_tension_stress: PrincipalTensionStressCriteria => set_principal_tension_stress, since 83.0;
    closure_joint: ClosureJointCriteria => set_closure_joint, since 83.0;
    strand_stress: StrandStressCriteria => set_strand_stress, since 83.0;
    tendon_stress: TendonStressCriteria => set_tendon_stress, since 83.0;
    transfer_length: TransferLengthCriteria => set_transfer_length, since 83.0;
    duct_size: DuctSizeCriteria => set_duct_size, since 83.0;
    lifting: LiftingCriteria => set_lifting, since 83.0;
    hauling: HaulingCriteria => set_hauling, since 83.0;
    dead_load_distribution: DeadLoadDistributionCriteria => set_dead_load_distribution, since 83.0;
    live_load: LiveLoadCriteria => set_live_load, since 83.0;
    live_load_distribution: LiveLoadDistributionCriteria => set_live_load_distribution, since 83.0;
    moment_capacity: MomentCapacityCriteria => set_moment_capacity, since 83.0;
    shear_capacity: ShearCapacityCriteria => set_shear_capacity, since 83.0;
    interface_shear: InterfaceShearCriteria => set_interface_shear, since 83.0;
    creep: CreepCriteria => set_creep, since 83.0;
    haunch: HaunchCriteria => set_haunch, since 83.0;
    prestress_loss: PrestressLossCriteria => set_prestress_loss, since 83.0;
    limits: LimitsCriteria => set_limits, since 83.0;
    bearing: BearingCriteria => set_bearing, since 83.0;
}

impl SpecificationEntry {
    /// A default entry named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The edition in force for this entry.
    pub fn edition(&self) -> Edition {
        self.specification.effective_edition()
    }

    /// Write this entry as one unit.
    pub fn save(&self, ar: &mut dyn Archive) -> Result<(), CriteriaError> {
        self.save_as(&self.name, ar)
    }

    /// Save under `name` instead of the entry's own name.
    pub(crate) fn save_as(&self, name: &str, ar: &mut dyn Archive) -> Result<(), CriteriaError> {
        self.save_unit(name, ar).map_err(CriteriaError::Store)
    }

    fn save_unit(&self, name: &str, ar: &mut dyn Archive) -> Result<(), StoreError> {
        ar.begin_unit(UNIT_NAME, CURRENT_VERSION)?;
        let mut name = name.to_string();
        ar.string("Name", &mut name)?;
        self.save_modules(ar)?;
        ar.end_unit()
    }

    /// Read the next entry unit. Any decoding problem is an invalid file
    /// format.
    pub fn read(reader: &mut UnitReader<'_>) -> Result<Self, CriteriaError> {
        Self::decode(reader).map_err(CriteriaError::invalid_format)
    }

    /// Replace `self` with the next stored entry. On error `self` is
    /// unchanged.
    pub fn load(&mut self, reader: &mut UnitReader<'_>) -> Result<(), CriteriaError> {
        *self = Self::read(reader)?;
        Ok(())
    }

    fn decode(reader: &mut UnitReader<'_>) -> Result<Self, StoreError> {
        let version = reader.begin_unit(UNIT_NAME, CURRENT_VERSION)?;
        if version < MIN_VERSION {
            return Err(StoreError::UnsupportedVersion {
                unit: UNIT_NAME.to_string(),
                found: version,
                max: CURRENT_VERSION,
            });
        }

        let mut entry = if version < MODERN_FORMAT_VERSION {
            let (mut entry, refactored) = legacy::decode(reader, version)?;
            entry.refactored = Some(refactored);
            entry
        } else {
            let mut entry = Self {
                name: reader.read_string("Name")?,
                ..Default::default()
            };
            entry.read_modules(reader, version)?;
            entry
        };
        reader.end_unit()?;

        entry.normalize();
        debug!(name = %entry.name, version, "loaded specification entry");
        Ok(entry)
    }

    /// Serialize into a standalone unit tree.
    pub fn to_unit(&self) -> Result<Unit, CriteriaError> {
        let mut w = UnitWriter::new();
        self.save(&mut w)?;
        w.finish().map_err(CriteriaError::Store)
    }

    /// Decode a standalone unit tree produced by [`Self::to_unit`] or by an
    /// older build.
    pub fn from_unit(unit: &Unit) -> Result<Self, CriteriaError> {
        let mut reader = UnitReader::new(unit);
        let entry = Self::read(&mut reader)?;
        reader.finish().map_err(CriteriaError::invalid_format)?;
        Ok(entry)
    }

    /// The time-dependent concrete model only applies to time-step losses.
    pub fn normalize(&mut self) {
        if self.prestress_loss.loss_method != LossMethod::TimeStep {
            self.prestress_loss.time_dependent_concrete_model = TimeDependentConcreteModel::Aashto;
        }
    }

    /// Values a legacy load moved out of the specification. Returns `Some`
    /// only once after such a load.
    pub fn take_refactored_parameters(&mut self) -> Option<RefactoredParameters> {
        self.refactored.take()
    }

    /// `true` when a legacy load left refactored parameters behind.
    pub fn has_refactored_parameters(&self) -> bool {
        self.refactored.is_some()
    }

    /// Set the principal stress duct deduction multipliers for the entry's
    /// edition.
    pub fn determine_principal_stress_duct_deduction_multiplier(&mut self) {
        let (ungrouted, grouted) =
            PrincipalTensionStressCriteria::duct_deduction_multipliers(self.edition());
        self.principal_tension_stress.ungrouted_multiplier = ungrouted;
        self.principal_tension_stress.grouted_multiplier = grouted;
    }

    /// Compare against `other` under this entry's edition.
    pub fn compare(
        &self,
        other: &Self,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        self.compare_in(other, self.edition(), diffs, stop_on_first)
    }

    /// Compare every module against `other` under `edition`. Returns `true`
    /// when nothing differs.
    pub fn compare_in(
        &self,
        other: &Self,
        edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);

        macro_rules! compare_modules {
            ($($field:ident),+ $(,)?) => {
                $(
                    if d.nested(|diffs, stop| {
                        self.$field.compare(&other.$field, edition, diffs, stop)
                    }) {
                        return false;
                    }
                )+
            };
        }

        compare_modules!(
            specification,
            section_properties,
            thermal_movement,
            hold_down,
            strand_slope,
            plant_handling,
            end_zone,
            lifting,
            hauling,
            slab_offset,
            live_load_deflection,
            bottom_flange_clearance,
            girder_inclination,
            harped_strand_design,
            limit_state_concrete_strength,
            prestressed_element,
            principal_tension_stress,
            closure_joint,
            strand_stress,
            tendon_stress,
            transfer_length,
            duct_size,
            dead_load_distribution,
            live_load_distribution,
            live_load,
            moment_capacity,
            shear_capacity,
            interface_shear,
            creep,
            haunch,
            prestress_loss,
            limits,
            bearing,
        );

        d.finish()
    }

    /// Report every module under a heading per module.
    pub fn report(&self, sink: &mut dyn ReportSink) -> Result<(), CriteriaError> {
        sink.heading(&self.name);
        let edition = self.edition();
        sink.line(&format!("Edition: {edition}"));
        self.report_modules(edition, sink).map_err(CriteriaError::Store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concrete::ConcreteType;
    use crate::report::TextReport;
    use speclib_store::Value;

    fn labels(a: &SpecificationEntry, b: &SpecificationEntry) -> Vec<String> {
        let mut diffs = Vec::new();
        a.compare(b, &mut diffs, false);
        diffs.into_iter().map(|d| d.item).collect()
    }

    #[test]
    fn default_round_trip() {
        let entry = SpecificationEntry::new("Default");
        let unit = entry.to_unit().unwrap();
        assert_eq!(unit.name, UNIT_NAME);
        assert_eq!(unit.version, CURRENT_VERSION);
        assert_eq!(unit.units().count(), 33);

        let loaded = SpecificationEntry::from_unit(&unit).unwrap();
        assert_eq!(loaded, entry);
        assert!(!loaded.has_refactored_parameters());
    }

    #[test]
    fn modified_round_trip() {
        let mut entry = SpecificationEntry::new("WSDOT");
        entry.set_hold_down(HoldDownCriteria {
            force_type: HoldDownForceType::PerStrand,
            ..Default::default()
        });
        let mut limits = LimitsCriteria::default();
        limits.concrete[ConcreteType::Uhpc].max_segment_fc *= 0.5;
        entry.set_limits(limits);

        let loaded = SpecificationEntry::from_unit(&entry.to_unit().unwrap()).unwrap();
        assert_eq!(loaded.name(), "WSDOT");
        assert_eq!(loaded.hold_down().force_type, HoldDownForceType::PerStrand);
        let mut diffs = Vec::new();
        assert!(entry.compare(&loaded, &mut diffs, false));
        assert!(diffs.is_empty());
    }

    #[test]
    fn thermal_movement_absent_before_84() {
        let mut entry = SpecificationEntry::new("Old");
        entry.set_thermal_movement(ThermalMovementCriteria {
            thermal_movement_factor: 0.5,
        });
        let mut unit = entry.to_unit().unwrap();
        unit.version = MODERN_FORMAT_VERSION;
        // a version 83 file never contained the unit, so it is not looked for
        let loaded = SpecificationEntry::from_unit(&unit).unwrap();
        assert_eq!(*loaded.thermal_movement(), ThermalMovementCriteria::default());
        assert_eq!(loaded.hold_down(), entry.hold_down());
    }

    #[test]
    fn newer_version_rejected() {
        let mut unit = SpecificationEntry::default().to_unit().unwrap();
        unit.version = CURRENT_VERSION + 1.0;
        let err = SpecificationEntry::from_unit(&unit).unwrap_err();
        assert!(matches!(
            err,
            CriteriaError::InvalidFileFormat(StoreError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn failed_load_leaves_entry_unchanged() {
        let mut entry = SpecificationEntry::new("Keep");
        let broken = Unit::new(UNIT_NAME, CURRENT_VERSION).with_property("Name", Value::Integer(3));
        let mut reader = UnitReader::new(&broken);
        assert!(entry.load(&mut reader).is_err());
        assert_eq!(entry, SpecificationEntry::new("Keep"));
    }

    #[test]
    fn normalize_resets_unused_model() {
        let mut entry = SpecificationEntry::default();
        entry.prestress_loss.time_dependent_concrete_model = TimeDependentConcreteModel::CebFip;
        entry.normalize();
        assert_eq!(
            entry.prestress_loss().time_dependent_concrete_model,
            TimeDependentConcreteModel::Aashto
        );

        entry.prestress_loss.loss_method = LossMethod::TimeStep;
        entry.prestress_loss.time_dependent_concrete_model = TimeDependentConcreteModel::Aci209;
        entry.normalize();
        assert_eq!(
            entry.prestress_loss().time_dependent_concrete_model,
            TimeDependentConcreteModel::Aci209
        );
    }

    #[test]
    fn compare_is_idempotent() {
        let entry = SpecificationEntry::new("A");
        assert!(labels(&entry, &entry).is_empty());
    }

    #[test]
    fn compare_walks_modules_in_order() {
        let a = SpecificationEntry::new("A");
        let mut b = a.clone();
        b.set_bearing(BearingCriteria {
            use_impact_for_bearing_reactions: true,
            ..Default::default()
        });
        b.set_hold_down(HoldDownCriteria {
            force_type: HoldDownForceType::PerStrand,
            ..Default::default()
        });
        let found = labels(&a, &b);
        assert_eq!(found.len(), 2);
        assert!(found[1].contains("impact"));

        let mut diffs = Vec::new();
        assert!(!a.compare(&b, &mut diffs, true));
        assert_eq!(diffs.len(), 1);
    }

    #[test]
    fn name_is_not_compared() {
        let a = SpecificationEntry::new("A");
        let b = SpecificationEntry::new("B");
        assert!(labels(&a, &b).is_empty());
    }

    #[test]
    fn duct_deduction_follows_edition() {
        let mut entry = SpecificationEntry::default();
        let mut spec = entry.specification().clone();
        spec.use_current_specification = false;
        spec.edition = Edition::EighthEdition2017;
        entry.set_specification(spec);
        entry.determine_principal_stress_duct_deduction_multiplier();
        assert_eq!(entry.principal_tension_stress().ungrouted_multiplier, 0.5);
        assert_eq!(entry.principal_tension_stress().grouted_multiplier, 0.25);
    }

    #[test]
    fn report_lists_every_module() {
        let mut report = TextReport::new();
        SpecificationEntry::new("Default").report(&mut report).unwrap();
        let text = report.into_string();
        assert!(text.starts_with("Default\n"));
        assert!(text.contains(BearingCriteria::TITLE));
        assert!(text.contains(LimitsCriteria::TITLE));
    }
}
