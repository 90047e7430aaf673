//! Flexural capacity, modulus of rupture, and flexural resistance factors.

use speclib_store::{Archive, StoreError};

use crate::concrete::{ConcreteArray, ConcreteType};
use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_concrete, exchange_count, exchange_enum, stored_enum, CriteriaModule};
use crate::tolerance::is_equal;
use crate::units::sqrt_ksi;

stored_enum! {
    pub enum OverReinforcedMomentCapacity {
        #[default]
        Lrfd = 0 => "LRFD C5.7.3.3.1",
        Wsdot = 1 => "WSDOT method",
    }
}

/// Last edition that allowed a choice of over-reinforced capacity method.
const OVER_REINFORCED_LAST_EDITION: Edition = Edition::ThirdEditionWith2005Interims;

/// Flexural resistance factors for one concrete type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexureResistanceFactors {
    pub tension_ps: f64,
    pub tension_rc: f64,
    pub tension_spliced: f64,
    pub compression: f64,
}

impl FlexureResistanceFactors {
    const fn new(tension_ps: f64, tension_rc: f64, tension_spliced: f64, compression: f64) -> Self {
        Self {
            tension_ps,
            tension_rc,
            tension_spliced,
            compression,
        }
    }

    fn is_equal(&self, other: &Self) -> bool {
        is_equal(self.tension_ps, other.tension_ps)
            && is_equal(self.tension_rc, other.tension_rc)
            && is_equal(self.tension_spliced, other.tension_spliced)
            && is_equal(self.compression, other.compression)
    }
}

fn resistance_factor_unit(ct: ConcreteType) -> &'static str {
    match ct {
        ConcreteType::Normal => "NormalWeight",
        other => other.key(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MomentCapacityCriteria {
    pub over_reinforced_moment_capacity: OverReinforcedMomentCapacity,
    pub include_strand_for_neg_moment: bool,
    pub include_rebar: bool,
    pub consider_reinforcement_strain_limit: bool,
    pub moment_capacity_slices: u32,
    pub include_noncomposite_moments_for_neg_moment_design: bool,
    pub modulus_of_rupture_coefficient: ConcreteArray<f64>,
    pub phi: ConcreteArray<FlexureResistanceFactors>,
    pub phi_closure_joint: ConcreteArray<f64>,
}

impl Default for MomentCapacityCriteria {
    fn default() -> Self {
        let conventional = FlexureResistanceFactors::new(1.0, 0.9, 1.0, 0.75);
        Self {
            over_reinforced_moment_capacity: OverReinforcedMomentCapacity::Lrfd,
            include_strand_for_neg_moment: false,
            include_rebar: false,
            consider_reinforcement_strain_limit: false,
            moment_capacity_slices: 10,
            include_noncomposite_moments_for_neg_moment_design: true,
            modulus_of_rupture_coefficient: ConcreteArray::new([
                sqrt_ksi(0.37),
                sqrt_ksi(0.20),
                sqrt_ksi(0.17),
                0.0,
                0.0,
            ]),
            phi: ConcreteArray::new([
                conventional,
                conventional,
                conventional,
                conventional,
                FlexureResistanceFactors::new(0.9, 0.9, 1.0, 0.75),
            ]),
            phi_closure_joint: ConcreteArray::new([0.95, 0.90, 0.90, 0.95, 0.95]),
        }
    }
}

impl MomentCapacityCriteria {
    /// Modulus of rupture coefficient for `ct` in `edition`.
    pub fn modulus_of_rupture(&self, ct: ConcreteType, edition: Edition) -> f64 {
        self.modulus_of_rupture_coefficient.get_for(ct, edition)
    }

    pub fn resistance_factors(&self, ct: ConcreteType, edition: Edition) -> FlexureResistanceFactors {
        self.phi.get_for(ct, edition)
    }

    pub fn closure_joint_resistance_factor(&self, ct: ConcreteType, edition: Edition) -> f64 {
        self.phi_closure_joint.get_for(ct, edition)
    }
}

impl CriteriaModule for MomentCapacityCriteria {
    const UNIT_NAME: &'static str = "MomentCapacityCriteria";
    const VERSION: f64 = 2.0;
    const TITLE: &'static str = "Moment Capacity";

    fn exchange(&mut self, ar: &mut dyn Archive, version: f64) -> Result<(), StoreError> {
        exchange_enum(
            ar,
            "OverReinforcedMomentCapacity",
            &mut self.over_reinforced_moment_capacity,
        )?;
        ar.bool(
            "IncludeStrandForNegMoment",
            &mut self.include_strand_for_neg_moment,
        )?;
        ar.bool("IncludeRebarForCapacity", &mut self.include_rebar)?;
        ar.bool(
            "ConsiderReinforcementStrainLimit",
            &mut self.consider_reinforcement_strain_limit,
        )?;
        exchange_count(ar, "MomentCapacitySliceCount", &mut self.moment_capacity_slices)?;
        ar.bool(
            "bIncludeNoncompositeMomentsForNegMomentDesign",
            &mut self.include_noncomposite_moments_for_neg_moment_design,
        )?;
        exchange_concrete(
            ar,
            "ModulusOfRupture",
            &mut self.modulus_of_rupture_coefficient,
            &ConcreteType::CONVENTIONAL,
        )?;

        // UHPC rows were added in version 2
        let types: &[ConcreteType] = if version < 2.0 {
            &ConcreteType::CONVENTIONAL
        } else {
            &ConcreteType::ALL
        };

        ar.begin_unit("ResistanceFactor", 1.0)?;
        for &ct in types {
            let phi = &mut self.phi[ct];
            ar.begin_unit(resistance_factor_unit(ct), 1.0)?;
            ar.float("TensionControlled_RC", &mut phi.tension_rc)?;
            ar.float("TensionControlled_PS", &mut phi.tension_ps)?;
            ar.float("TensionControlled_Spliced", &mut phi.tension_spliced)?;
            ar.float("CompressionControlled", &mut phi.compression)?;
            ar.end_unit()?;
        }
        ar.end_unit()?;

        ar.begin_unit("ClosureJointResistanceFactor", 1.0)?;
        for &ct in types {
            ar.begin_unit(resistance_factor_unit(ct), 1.0)?;
            ar.float("FullyBondedTendons", &mut self.phi_closure_joint[ct])?;
            ar.end_unit()?;
        }
        ar.end_unit()
    }

    fn compare(
        &self,
        other: &Self,
        edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);

        let rupture_types = ConcreteType::distinct_in(edition, &ConcreteType::CONVENTIONAL);
        let parameters = (edition <= OVER_REINFORCED_LAST_EDITION
            && self.over_reinforced_moment_capacity != other.over_reinforced_moment_capacity)
            || self.include_strand_for_neg_moment != other.include_strand_for_neg_moment
            || self.consider_reinforcement_strain_limit != other.consider_reinforcement_strain_limit
            || self.moment_capacity_slices != other.moment_capacity_slices
            || self.include_rebar != other.include_rebar
            || !self
                .modulus_of_rupture_coefficient
                .is_equal_for(&other.modulus_of_rupture_coefficient, &rupture_types);
        if d.group(parameters, "Moment Capacity parameters are different") {
            return false;
        }

        let phi_types = ConcreteType::distinct_in(edition, &ConcreteType::ALL);
        let phi = phi_types
            .iter()
            .any(|&ct| !self.phi[ct].is_equal(&other.phi[ct]))
            || !self
                .phi_closure_joint
                .is_equal_for(&other.phi_closure_joint, &phi_types);
        if d.group(phi, "Moment Resistance Factors are different") {
            return false;
        }

        d.group(
            self.include_noncomposite_moments_for_neg_moment_design
                != other.include_noncomposite_moments_for_neg_moment_design,
            "Negative Moment Capacity parameters are different",
        );
        d.finish()
    }
}
