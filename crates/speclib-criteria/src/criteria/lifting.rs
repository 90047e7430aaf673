//! Stability of girders lifted from the casting bed.

use speclib_store::{Archive, StoreError};

use crate::concrete::{ConcreteArray, ConcreteType};
use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_concrete, exchange_enum, stored_enum, CriteriaModule};
use crate::stress_limit::TensionStressLimit;
use crate::tolerance::is_equal;
use crate::units::{sqrt_ksi, FOOT, INCH};

stored_enum! {
    /// How wind load on a girder in handling is specified.
    pub enum WindLoadType {
        #[default]
        Speed = 0 => "Wind speed",
        Pressure = 1 => "Wind pressure",
    }
}

/// Default modulus of rupture coefficients for cracking during handling.
pub(crate) fn handling_modulus_of_rupture() -> ConcreteArray<f64> {
    ConcreteArray::new([
        sqrt_ksi(0.24),
        sqrt_ksi(0.21),
        sqrt_ksi(0.18),
        0.0,
        0.0,
    ])
}

/// Moduli of rupture differ in any type that is distinct in `edition`.
pub(crate) fn modulus_of_rupture_differs(
    a: &ConcreteArray<f64>,
    b: &ConcreteArray<f64>,
    edition: Edition,
) -> bool {
    let types = ConcreteType::distinct_in(edition, &ConcreteType::CONVENTIONAL);
    !a.is_equal_for(b, &types)
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiftingCriteria {
    pub check: bool,
    pub design: bool,
    pub fs_cracking: f64,
    pub fs_failure: f64,
    /// Height of the pick point above the top of the girder, m.
    pub pick_point_height: f64,
    /// m
    pub lifting_loop_tolerance: f64,
    /// rad
    pub min_cable_inclination: f64,
    /// Sweep per unit length.
    pub sweep_tolerance: f64,
    pub camber_multiplier: f64,
    pub wind_load_type: WindLoadType,
    /// Speed in m/s or pressure in Pa, per `wind_load_type`.
    pub wind_load: f64,
    pub impact_up: f64,
    pub impact_down: f64,
    /// Negative means use the section depth. m
    pub min_pick_point: f64,
    /// m
    pub pick_point_accuracy: f64,
    pub modulus_of_rupture_coefficient: ConcreteArray<f64>,
    pub compression_stress_coefficient_global_stress: f64,
    pub compression_stress_coefficient_peak_stress: f64,
    pub tension_stress_limit_without_reinforcement: TensionStressLimit,
    pub tension_stress_limit_with_reinforcement: TensionStressLimit,
}

impl Default for LiftingCriteria {
    fn default() -> Self {
        Self {
            check: true,
            design: true,
            fs_cracking: 1.0,
            fs_failure: 1.5,
            pick_point_height: 0.0,
            lifting_loop_tolerance: INCH,
            min_cable_inclination: std::f64::consts::FRAC_PI_2,
            sweep_tolerance: 1.0 / 960.0,
            camber_multiplier: 1.0,
            wind_load_type: WindLoadType::Speed,
            wind_load: 0.0,
            impact_up: 0.0,
            impact_down: 0.0,
            min_pick_point: -1.0,
            pick_point_accuracy: 0.5 * FOOT,
            modulus_of_rupture_coefficient: handling_modulus_of_rupture(),
            compression_stress_coefficient_global_stress: 0.65,
            compression_stress_coefficient_peak_stress: 0.70,
            tension_stress_limit_without_reinforcement: TensionStressLimit::from_ksi(
                0.0948,
                Some(0.2),
            ),
            tension_stress_limit_with_reinforcement: TensionStressLimit::from_ksi(0.24, None),
        }
    }
}

impl LiftingCriteria {
    /// Modulus of rupture coefficient for `ct` in `edition`.
    pub fn modulus_of_rupture(&self, ct: ConcreteType, edition: Edition) -> f64 {
        self.modulus_of_rupture_coefficient.get_for(ct, edition)
    }

    pub fn tension_stress_limit(&self, with_reinforcement: bool) -> &TensionStressLimit {
        if with_reinforcement {
            &self.tension_stress_limit_with_reinforcement
        } else {
            &self.tension_stress_limit_without_reinforcement
        }
    }
}

impl CriteriaModule for LiftingCriteria {
    const UNIT_NAME: &'static str = "LiftingCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Lifting";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.bool("bCheck", &mut self.check)?;
        ar.bool("bDesign", &mut self.design)?;
        ar.float("FsCracking", &mut self.fs_cracking)?;
        ar.float("FsFailure", &mut self.fs_failure)?;
        ar.float("PickPointHeight", &mut self.pick_point_height)?;
        ar.float("LiftingLoopTolerance", &mut self.lifting_loop_tolerance)?;
        ar.float("MinCableInclination", &mut self.min_cable_inclination)?;
        ar.float("MaxGirderSweep", &mut self.sweep_tolerance)?;
        ar.float("CamberMultiplier", &mut self.camber_multiplier)?;
        exchange_enum(ar, "WindLoadType", &mut self.wind_load_type)?;
        ar.float("WindLoad", &mut self.wind_load)?;
        ar.float("ImpactUp", &mut self.impact_up)?;
        ar.float("ImpactDown", &mut self.impact_down)?;
        ar.float("MinPickPoint", &mut self.min_pick_point)?;
        ar.float("PickPointAccuracy", &mut self.pick_point_accuracy)?;
        exchange_concrete(
            ar,
            "ModulusOfRupture",
            &mut self.modulus_of_rupture_coefficient,
            &ConcreteType::CONVENTIONAL,
        )?;
        ar.float(
            "CompressionStressCoefficient_GlobalStress",
            &mut self.compression_stress_coefficient_global_stress,
        )?;
        ar.float(
            "CompressionStressCoefficient_PeakStress",
            &mut self.compression_stress_coefficient_peak_stress,
        )?;
        self.tension_stress_limit_without_reinforcement
            .exchange(ar, "TensionStressLimitWithoutReinforcement")?;
        self.tension_stress_limit_with_reinforcement
            .exchange(ar, "TensionStressLimitWithReinforcement")
    }

    fn compare(
        &self,
        other: &Self,
        edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);

        let options = self.check != other.check
            || self.design != other.design
            || !is_equal(self.min_pick_point, other.min_pick_point)
            || !is_equal(self.pick_point_accuracy, other.pick_point_accuracy);
        if d.group(options, "Lifting Check/Design Options are different") {
            return false;
        }

        let safety = !is_equal(self.fs_cracking, other.fs_cracking)
            || !is_equal(self.fs_failure, other.fs_failure);
        if d.group(safety, "Lifting Factors of Safety are different") {
            return false;
        }

        if d.group(
            modulus_of_rupture_differs(
                &self.modulus_of_rupture_coefficient,
                &other.modulus_of_rupture_coefficient,
                edition,
            ),
            "Modulus of Rupture for Cracking Moment During Lifting are different",
        ) {
            return false;
        }

        let analysis = !is_equal(self.pick_point_height, other.pick_point_height)
            || !is_equal(self.lifting_loop_tolerance, other.lifting_loop_tolerance)
            || !is_equal(self.min_cable_inclination, other.min_cable_inclination)
            || !is_equal(self.sweep_tolerance, other.sweep_tolerance)
            || !is_equal(self.camber_multiplier, other.camber_multiplier)
            || self.wind_load_type != other.wind_load_type
            || !is_equal(self.wind_load, other.wind_load)
            || !is_equal(self.impact_up, other.impact_up)
            || !is_equal(self.impact_down, other.impact_down);
        if d.group(analysis, "Lifting Analysis Parameters are different") {
            return false;
        }

        let stresses = !is_equal(
            self.compression_stress_coefficient_global_stress,
            other.compression_stress_coefficient_global_stress,
        ) || !is_equal(
            self.compression_stress_coefficient_peak_stress,
            other.compression_stress_coefficient_peak_stress,
        ) || !self
            .tension_stress_limit_without_reinforcement
            .is_equal(&other.tension_stress_limit_without_reinforcement)
            || !self
                .tension_stress_limit_with_reinforcement
                .is_equal(&other.tension_stress_limit_with_reinforcement);
        d.group(stresses, "Lifting concrete stress limits are different");
        d.finish()
    }
}
