//! Shear capacity method, resistance factors, and stirrup spacing.

use speclib_store::{Archive, StoreError};

use crate::concrete::{ConcreteArray, ConcreteType};
use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_concrete, exchange_enum, stored_enum, CriteriaModule};
use crate::tolerance::{all_equal, is_equal};
use crate::units::{sqrt_ksi, INCH};

stored_enum! {
    pub enum ShearCapacityMethod {
        #[default]
        BtEquations = 0 => "General method (Beta-Theta equations)",
        VciVcw = 1 => "Simplified method (Vci and Vcw)",
        BtTables = 2 => "General method (Beta-Theta tables)",
        Wsdot2001 = 3 => "WSDOT 2001",
        Wsdot2007 = 4 => "WSDOT 2007",
    }
}

stored_enum! {
    pub enum LongitudinalReinforcementForShearMethod {
        #[default]
        Lrfd = 0 => "LRFD",
        WsDot = 1 => "WSDOT",
    }
}

/// First edition with separate resistance factors for debonded sections.
const DEBONDED_PHI_EDITION: Edition = Edition::EighthEdition2017;

#[derive(Debug, Clone, PartialEq)]
pub struct ShearCapacityCriteria {
    pub capacity_method: ShearCapacityMethod,
    pub limit_net_tension_strain_to_positive_values: bool,
    pub modulus_of_rupture_coefficient: ConcreteArray<f64>,
    /// `k` in `s_max = k dv`, for low and high shear stress.
    pub stirrup_spacing_coefficient: [f64; 2],
    /// m
    pub max_stirrup_spacing: [f64; 2],
    pub phi: ConcreteArray<f64>,
    pub phi_debonded: ConcreteArray<f64>,
    pub phi_closure_joint: ConcreteArray<f64>,
    pub longitudinal_reinforcement_for_shear_method: LongitudinalReinforcementForShearMethod,
    pub include_rebar: bool,
}

impl Default for ShearCapacityCriteria {
    fn default() -> Self {
        Self {
            capacity_method: ShearCapacityMethod::BtEquations,
            limit_net_tension_strain_to_positive_values: false,
            modulus_of_rupture_coefficient: ConcreteArray::new([
                sqrt_ksi(0.20),
                sqrt_ksi(0.20),
                sqrt_ksi(0.17),
                0.0,
                0.0,
            ]),
            stirrup_spacing_coefficient: [0.8, 0.4],
            max_stirrup_spacing: [24.0 * INCH, 12.0 * INCH],
            phi: ConcreteArray::new([0.9, 0.7, 0.7, 0.9, 0.9]),
            phi_debonded: ConcreteArray::new([0.85, 0.85, 0.85, 0.9, 0.9]),
            phi_closure_joint: ConcreteArray::new([0.9, 0.7, 0.7, 0.9, 0.9]),
            longitudinal_reinforcement_for_shear_method:
                LongitudinalReinforcementForShearMethod::Lrfd,
            include_rebar: false,
        }
    }
}

impl ShearCapacityCriteria {
    /// Resistance factor for `ct`, using the debonded value where `edition`
    /// distinguishes it.
    pub fn resistance_factor(&self, ct: ConcreteType, debonded: bool, edition: Edition) -> f64 {
        if debonded && edition >= DEBONDED_PHI_EDITION {
            self.phi_debonded.get_for(ct, edition)
        } else {
            self.phi.get_for(ct, edition)
        }
    }

    pub fn closure_joint_resistance_factor(&self, ct: ConcreteType, edition: Edition) -> f64 {
        self.phi_closure_joint.get_for(ct, edition)
    }

    /// Modulus of rupture coefficient for `ct` in `edition`.
    pub fn modulus_of_rupture(&self, ct: ConcreteType, edition: Edition) -> f64 {
        self.modulus_of_rupture_coefficient.get_for(ct, edition)
    }
}

impl CriteriaModule for ShearCapacityCriteria {
    const UNIT_NAME: &'static str = "ShearCapacityCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Shear Capacity";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        exchange_enum(ar, "ShearCapacityMethod", &mut self.capacity_method)?;
        ar.bool(
            "LimitNetTensionStrainToPositiveValues",
            &mut self.limit_net_tension_strain_to_positive_values,
        )?;
        exchange_concrete(ar, "ResistanceFactor", &mut self.phi, &ConcreteType::ALL)?;
        exchange_concrete(
            ar,
            "ResistanceFactorDebonded",
            &mut self.phi_debonded,
            &ConcreteType::ALL,
        )?;
        exchange_concrete(
            ar,
            "ClosureJointResistanceFactor",
            &mut self.phi_closure_joint,
            &ConcreteType::ALL,
        )?;
        exchange_concrete(
            ar,
            "ModulusOfRupture",
            &mut self.modulus_of_rupture_coefficient,
            &ConcreteType::CONVENTIONAL,
        )?;

        ar.begin_unit("StirrupSpacing", 1.0)?;
        ar.float(
            "StirrupSpacingCoefficient1",
            &mut self.stirrup_spacing_coefficient[0],
        )?;
        ar.float("MaxStirrupSpacing1", &mut self.max_stirrup_spacing[0])?;
        ar.float(
            "StirrupSpacingCoefficient2",
            &mut self.stirrup_spacing_coefficient[1],
        )?;
        ar.float("MaxStirrupSpacing2", &mut self.max_stirrup_spacing[1])?;
        ar.end_unit()?;

        ar.begin_unit("LongitudinalReinforcementForShear", 1.0)?;
        exchange_enum(
            ar,
            "LongitudinalReinforcementForShearMethod",
            &mut self.longitudinal_reinforcement_for_shear_method,
        )?;
        ar.bool("IncludeRebarForCapacity", &mut self.include_rebar)?;
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

        let parameters = self.capacity_method != other.capacity_method
            || self.limit_net_tension_strain_to_positive_values
                != other.limit_net_tension_strain_to_positive_values;
        if d.group(parameters, "Shear Capacity parameters are different") {
            return false;
        }

        let rupture_types = ConcreteType::distinct_in(edition, &ConcreteType::CONVENTIONAL);
        if d.group(
            !self
                .modulus_of_rupture_coefficient
                .is_equal_for(&other.modulus_of_rupture_coefficient, &rupture_types),
            "Shear modulus of rupture parameters are different",
        ) {
            return false;
        }

        let phi_types = ConcreteType::distinct_in(edition, &ConcreteType::ALL);
        let phi = !self.phi.is_equal_for(&other.phi, &phi_types)
            || !self.phi_debonded.is_equal_for(&other.phi_debonded, &phi_types)
            || !self
                .phi_closure_joint
                .is_equal_for(&other.phi_closure_joint, &phi_types);
        if d.group(phi, "Shear Resistance Factors are different") {
            return false;
        }

        let spacing = !all_equal(
            &self.stirrup_spacing_coefficient,
            &other.stirrup_spacing_coefficient,
        ) || !all_equal(&self.max_stirrup_spacing, &other.max_stirrup_spacing);
        if d.group(
            spacing,
            "Minimum Spacing of Transverse Reinforcement requirements are different",
        ) {
            return false;
        }

        let longitudinal = self.longitudinal_reinforcement_for_shear_method
            != other.longitudinal_reinforcement_for_shear_method
            || self.include_rebar != other.include_rebar;
        d.group(
            longitudinal,
            "Longitudinal Reinforcement for Shear requirements are different",
        );
        d.finish()
    }
}
