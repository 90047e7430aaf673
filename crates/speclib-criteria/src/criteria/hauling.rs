//! Stability of girders during hauling to the bridge site.
//!
//! Two analysis methods are supported, each with its own parameter set.
//! Both sets are always persisted; only the active method is compared.

use speclib_store::{Archive, StoreError};

use crate::concrete::{ConcreteArray, ConcreteType};
use crate::criteria::lifting::{handling_modulus_of_rupture, modulus_of_rupture_differs, WindLoadType};
use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_concrete, exchange_enum, stored_enum, CriteriaModule};
use crate::stress_limit::TensionStressLimit;
use crate::tolerance::is_equal;
use crate::units::{FOOT, INCH};

stored_enum! {
    pub enum HaulingAnalysisMethod {
        #[default]
        Wsdot = 0 => "WSDOT",
        Kdot = 1 => "KDOT",
    }
}

stored_enum! {
    /// Roadway conditions to which impact is applied.
    pub enum HaulingImpact {
        NormalCrown = 0 => "Normal crown slope",
        MaxSuperelevation = 1 => "Maximum superelevation",
        #[default]
        Both = 2 => "Both",
    }
}

stored_enum! {
    pub enum CentrifugalForceType {
        Favorable = 0 => "Favorable",
        #[default]
        Adverse = 1 => "Adverse",
    }
}

/// Roadway slope condition during hauling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaulingSlope {
    CrownSlope,
    Superelevation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WsdotHaulingCriteria {
    pub fs_cracking: f64,
    pub fs_failure: f64,
    pub modulus_of_rupture_coefficient: ConcreteArray<f64>,
    pub impact_usage: HaulingImpact,
    pub impact_up: f64,
    pub impact_down: f64,
    pub roadway_crown_slope: f64,
    pub roadway_superelevation: f64,
    pub sweep_tolerance: f64,
    /// m
    pub sweep_growth: f64,
    /// m
    pub support_placement_tolerance: f64,
    pub camber_multiplier: f64,
    pub wind_load_type: WindLoadType,
    pub wind_load: f64,
    pub centrifugal_force_type: CentrifugalForceType,
    /// m/s
    pub hauling_speed: f64,
    /// m
    pub turning_radius: f64,
    pub compression_stress_coefficient_global_stress: f64,
    pub compression_stress_coefficient_peak_stress: f64,
    /// Indexed by crown slope then superelevation.
    pub tension_stress_limit_with_reinforcement: [TensionStressLimit; 2],
    pub tension_stress_limit_without_reinforcement: [TensionStressLimit; 2],
}

impl Default for WsdotHaulingCriteria {
    fn default() -> Self {
        let without = TensionStressLimit::from_ksi(0.0948, Some(0.2));
        let with = TensionStressLimit::from_ksi(0.24, None);
        Self {
            fs_cracking: 1.0,
            fs_failure: 1.5,
            modulus_of_rupture_coefficient: handling_modulus_of_rupture(),
            impact_usage: HaulingImpact::Both,
            impact_up: 0.0,
            impact_down: 0.0,
            roadway_crown_slope: -0.02,
            roadway_superelevation: 0.06,
            sweep_tolerance: 1.0 / 960.0,
            sweep_growth: INCH,
            support_placement_tolerance: INCH,
            camber_multiplier: 1.0,
            wind_load_type: WindLoadType::Speed,
            wind_load: 0.0,
            centrifugal_force_type: CentrifugalForceType::Adverse,
            hauling_speed: 0.0,
            turning_radius: 0.0,
            compression_stress_coefficient_global_stress: 0.65,
            compression_stress_coefficient_peak_stress: 0.70,
            tension_stress_limit_with_reinforcement: [with; 2],
            tension_stress_limit_without_reinforcement: [without; 2],
        }
    }
}

impl WsdotHaulingCriteria {
    pub fn tension_stress_limit(
        &self,
        slope: HaulingSlope,
        with_reinforcement: bool,
    ) -> &TensionStressLimit {
        let limits = if with_reinforcement {
            &self.tension_stress_limit_with_reinforcement
        } else {
            &self.tension_stress_limit_without_reinforcement
        };
        &limits[slope as usize]
    }

    fn exchange(&mut self, ar: &mut dyn Archive) -> Result<(), StoreError> {
        ar.begin_unit("WSDOTHaulingCriteria", 1.0)?;
        ar.float("FsCracking", &mut self.fs_cracking)?;
        ar.float("FsFailure", &mut self.fs_failure)?;
        exchange_concrete(
            ar,
            "ModulusOfRupture",
            &mut self.modulus_of_rupture_coefficient,
            &ConcreteType::CONVENTIONAL,
        )?;
        exchange_enum(ar, "ImpactUsage", &mut self.impact_usage)?;
        ar.float("ImpactUp", &mut self.impact_up)?;
        ar.float("ImpactDown", &mut self.impact_down)?;
        ar.float("RoadwayCrownSlope", &mut self.roadway_crown_slope)?;
        ar.float("RoadwaySuperelevation", &mut self.roadway_superelevation)?;
        ar.float("MaxGirderSweep", &mut self.sweep_tolerance)?;
        ar.float("SweepGrowth", &mut self.sweep_growth)?;
        ar.float(
            "SupportPlacementTolerance",
            &mut self.support_placement_tolerance,
        )?;
        ar.float("CamberMultiplier", &mut self.camber_multiplier)?;
        exchange_enum(ar, "WindLoadType", &mut self.wind_load_type)?;
        ar.float("WindLoad", &mut self.wind_load)?;
        exchange_enum(ar, "CentrifugalForceType", &mut self.centrifugal_force_type)?;
        ar.float("HaulingSpeed", &mut self.hauling_speed)?;
        ar.float("TurningRadius", &mut self.turning_radius)?;
        ar.float(
            "CompressionStressCoefficient_GlobalStress",
            &mut self.compression_stress_coefficient_global_stress,
        )?;
        ar.float(
            "CompressionStressCoefficient_PeakStress",
            &mut self.compression_stress_coefficient_peak_stress,
        )?;
        let [with_crown, with_super] = &mut self.tension_stress_limit_with_reinforcement;
        with_crown.exchange(ar, "TensionStressLimitWithReinforcement_CrownSlope")?;
        with_super.exchange(ar, "TensionStressLimitWithReinforcement_Superelevation")?;
        let [without_crown, without_super] = &mut self.tension_stress_limit_without_reinforcement;
        without_crown.exchange(ar, "TensionStressLimitWithoutReinforcement_CrownSlope")?;
        without_super.exchange(ar, "TensionStressLimitWithoutReinforcement_Superelevation")?;
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

        let safety = !is_equal(self.fs_cracking, other.fs_cracking)
            || !is_equal(self.fs_failure, other.fs_failure);
        if d.group(safety, "Hauling Factors of Safety are different") {
            return false;
        }

        if d.group(
            modulus_of_rupture_differs(
                &self.modulus_of_rupture_coefficient,
                &other.modulus_of_rupture_coefficient,
                edition,
            ),
            "Modulus of Rupture for Cracking Moment During Hauling are different",
        ) {
            return false;
        }

        let analysis = !is_equal(self.impact_up, other.impact_up)
            || !is_equal(self.impact_down, other.impact_down)
            || self.impact_usage != other.impact_usage
            || !is_equal(self.roadway_crown_slope, other.roadway_crown_slope)
            || !is_equal(self.roadway_superelevation, other.roadway_superelevation)
            || !is_equal(self.sweep_tolerance, other.sweep_tolerance)
            || !is_equal(self.sweep_growth, other.sweep_growth)
            || !is_equal(
                self.support_placement_tolerance,
                other.support_placement_tolerance,
            )
            || !is_equal(self.camber_multiplier, other.camber_multiplier)
            || self.wind_load_type != other.wind_load_type
            || !is_equal(self.wind_load, other.wind_load)
            || self.centrifugal_force_type != other.centrifugal_force_type
            || !is_equal(self.hauling_speed, other.hauling_speed)
            || !is_equal(self.turning_radius, other.turning_radius);
        if d.group(analysis, "Hauling Analysis Parameters are different") {
            return false;
        }

        let stresses = !is_equal(
            self.compression_stress_coefficient_global_stress,
            other.compression_stress_coefficient_global_stress,
        ) || !is_equal(
            self.compression_stress_coefficient_peak_stress,
            other.compression_stress_coefficient_peak_stress,
        ) || !crate::stress_limit::all_equal(
            &self.tension_stress_limit_with_reinforcement,
            &other.tension_stress_limit_with_reinforcement,
        ) || !crate::stress_limit::all_equal(
            &self.tension_stress_limit_without_reinforcement,
            &other.tension_stress_limit_without_reinforcement,
        );
        d.group(stresses, "Hauling concrete stress limits are different");
        d.finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KdotHaulingCriteria {
    /// Dynamic factor in the cantilever region.
    pub overhang_g_factor: f64,
    /// Dynamic factor between bunk points.
    pub interior_g_factor: f64,
    pub compression_stress_limit_coefficient: f64,
    pub tension_stress_limit_without_reinforcement: TensionStressLimit,
    pub tension_stress_limit_with_reinforcement: TensionStressLimit,
}

impl Default for KdotHaulingCriteria {
    fn default() -> Self {
        Self {
            overhang_g_factor: 3.0,
            interior_g_factor: 1.0,
            compression_stress_limit_coefficient: 0.60,
            tension_stress_limit_without_reinforcement: TensionStressLimit::from_ksi(
                0.0948,
                Some(0.2),
            ),
            tension_stress_limit_with_reinforcement: TensionStressLimit::from_ksi(0.24, None),
        }
    }
}

impl KdotHaulingCriteria {
    pub fn tension_stress_limit(&self, with_reinforcement: bool) -> &TensionStressLimit {
        if with_reinforcement {
            &self.tension_stress_limit_with_reinforcement
        } else {
            &self.tension_stress_limit_without_reinforcement
        }
    }

    fn exchange(&mut self, ar: &mut dyn Archive) -> Result<(), StoreError> {
        ar.begin_unit("KDOTHaulingCriteria", 1.0)?;
        ar.float("OverhangGFactor", &mut self.overhang_g_factor)?;
        ar.float("InteriorGFactor", &mut self.interior_g_factor)?;
        ar.float(
            "CompressionStressLimitCoefficient",
            &mut self.compression_stress_limit_coefficient,
        )?;
        self.tension_stress_limit_without_reinforcement
            .exchange(ar, "TensionStressLimitWithoutReinforcement")?;
        self.tension_stress_limit_with_reinforcement
            .exchange(ar, "TensionStressLimitWithReinforcement")?;
        ar.end_unit()
    }

    fn compare(
        &self,
        other: &Self,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        let factors = !is_equal(self.overhang_g_factor, other.overhang_g_factor)
            || !is_equal(self.interior_g_factor, other.interior_g_factor);
        if d.group(factors, "Hauling Dynamic Load Factors are different") {
            return false;
        }
        let stresses = !is_equal(
            self.compression_stress_limit_coefficient,
            other.compression_stress_limit_coefficient,
        ) || !self
            .tension_stress_limit_without_reinforcement
            .is_equal(&other.tension_stress_limit_without_reinforcement)
            || !self
                .tension_stress_limit_with_reinforcement
                .is_equal(&other.tension_stress_limit_with_reinforcement);
        d.group(stresses, "Hauling concrete stress limits are different");
        d.finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HaulingCriteria {
    pub check: bool,
    pub design: bool,
    pub analysis_method: HaulingAnalysisMethod,
    /// Negative means use the section depth. m
    pub min_bunk_point: f64,
    /// m
    pub bunk_point_accuracy: f64,
    pub use_min_bunk_point_limit: bool,
    /// Fraction of the girder length.
    pub min_bunk_point_limit_factor: f64,
    pub wsdot: WsdotHaulingCriteria,
    pub kdot: KdotHaulingCriteria,
}

impl Default for HaulingCriteria {
    fn default() -> Self {
        Self {
            check: true,
            design: true,
            analysis_method: HaulingAnalysisMethod::Wsdot,
            min_bunk_point: -1.0,
            bunk_point_accuracy: 0.5 * FOOT,
            use_min_bunk_point_limit: false,
            min_bunk_point_limit_factor: 0.1,
            wsdot: WsdotHaulingCriteria::default(),
            kdot: KdotHaulingCriteria::default(),
        }
    }
}

impl HaulingCriteria {
    /// Modulus of rupture coefficient used by the WSDOT method.
    pub fn modulus_of_rupture(&self, ct: ConcreteType, edition: Edition) -> f64 {
        self.wsdot.modulus_of_rupture_coefficient.get_for(ct, edition)
    }
}

impl CriteriaModule for HaulingCriteria {
    const UNIT_NAME: &'static str = "HaulingCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Hauling";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        ar.bool("bCheck", &mut self.check)?;
        ar.bool("bDesign", &mut self.design)?;
        exchange_enum(ar, "AnalysisMethod", &mut self.analysis_method)?;
        ar.float("MinBunkPoint", &mut self.min_bunk_point)?;
        ar.float("BunkPointAccuracy", &mut self.bunk_point_accuracy)?;
        ar.bool("bUseMinBunkPointLimit", &mut self.use_min_bunk_point_limit)?;
        ar.float(
            "MinBunkPointLimitFactor",
            &mut self.min_bunk_point_limit_factor,
        )?;
        self.wsdot.exchange(ar)?;
        self.kdot.exchange(ar)
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
            || !is_equal(self.min_bunk_point, other.min_bunk_point)
            || !is_equal(self.bunk_point_accuracy, other.bunk_point_accuracy)
            || self.use_min_bunk_point_limit != other.use_min_bunk_point_limit
            || (self.use_min_bunk_point_limit
                && !is_equal(
                    self.min_bunk_point_limit_factor,
                    other.min_bunk_point_limit_factor,
                ));
        if d.group(options, "Hauling Check/Design Options are different") {
            return false;
        }

        if d.group(
            self.analysis_method != other.analysis_method,
            "Hauling Analysis Methods are different",
        ) {
            return false;
        }

        let stop = match self.analysis_method {
            HaulingAnalysisMethod::Wsdot => {
                d.nested(|diffs, stop| self.wsdot.compare(&other.wsdot, edition, diffs, stop))
            }
            HaulingAnalysisMethod::Kdot => {
                d.nested(|diffs, stop| self.kdot.compare(&other.kdot, diffs, stop))
            }
        };
        if stop {
            return false;
        }
        d.finish()
    }
}
