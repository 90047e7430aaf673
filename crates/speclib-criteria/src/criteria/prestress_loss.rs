//! Prestress loss method and its method-specific parameters.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};
use crate::tolerance::{all_equal, is_equal};
use crate::units::KSI;

stored_enum! {
    pub enum LossMethod {
        #[default]
        AashtoRefined = 0 => "Refined estimate per AASHTO LRFD",
        WsdotRefined = 1 => "Refined estimate per WSDOT Bridge Design Manual",
        TxdotRefined2004 = 2 => "Refined estimate per TxDOT Research Report 0-6374-2",
        TxdotRefined2013 = 3 => "Refined estimate per TxDOT 2013",
        AashtoLumpSum = 4 => "Approximate lump sum per AASHTO LRFD",
        AashtoLumpSum2005 = 5 => "Approximate estimate per AASHTO LRFD 2005",
        WsdotLumpSum = 6 => "Approximate lump sum per WSDOT Bridge Design Manual",
        TimeStep = 7 => "Time-step method",
        GeneralLumpSum = 8 => "General lump sum",
    }
}

stored_enum! {
    pub enum RelaxationLossMethod {
        #[default]
        Simplified = 0 => "Simplified",
        Refined = 1 => "Refined",
        LumpSum = 2 => "Lump sum",
    }
}

stored_enum! {
    pub enum TimeDependentConcreteModel {
        #[default]
        Aashto = 0 => "AASHTO LRFD",
        Aci209 = 1 => "ACI 209R-92",
        CebFip = 2 => "CEB-FIP 1990",
    }
}

stored_enum! {
    pub enum FcgpComputationMethod {
        AssumedFpe = 0 => "Assumed effective prestress",
        #[default]
        Iterative = 1 => "Iterative",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrestressLossCriteria {
    pub loss_method: LossMethod,
    pub relaxation_loss_method: RelaxationLossMethod,
    pub time_dependent_concrete_model: TimeDependentConcreteModel,
    pub fcgp_computation_method: FcgpComputationMethod,
    /// Pa, or a fraction of the loss at shipping when negative.
    pub shipping_losses: f64,
    /// days
    pub shipping_time: f64,
    pub slab_elastic_gain: f64,
    pub slab_pad_elastic_gain: f64,
    pub diaphragm_elastic_gain: f64,
    pub user_dc_elastic_gain_before_deck_placement: f64,
    pub user_dw_elastic_gain_before_deck_placement: f64,
    pub user_dc_elastic_gain_after_deck_placement: f64,
    pub user_dw_elastic_gain_after_deck_placement: f64,
    pub railing_system_elastic_gain: f64,
    pub overlay_elastic_gain: f64,
    pub slab_shrinkage_elastic_gain: f64,
    pub live_load_elastic_gain: f64,
}

impl Default for PrestressLossCriteria {
    fn default() -> Self {
        Self {
            loss_method: LossMethod::AashtoRefined,
            relaxation_loss_method: RelaxationLossMethod::Simplified,
            time_dependent_concrete_model: TimeDependentConcreteModel::Aashto,
            fcgp_computation_method: FcgpComputationMethod::Iterative,
            shipping_losses: 20.0 * KSI,
            shipping_time: 10.0,
            slab_elastic_gain: 1.0,
            slab_pad_elastic_gain: 1.0,
            diaphragm_elastic_gain: 1.0,
            user_dc_elastic_gain_before_deck_placement: 1.0,
            user_dw_elastic_gain_before_deck_placement: 1.0,
            user_dc_elastic_gain_after_deck_placement: 1.0,
            user_dw_elastic_gain_after_deck_placement: 1.0,
            railing_system_elastic_gain: 1.0,
            overlay_elastic_gain: 1.0,
            slab_shrinkage_elastic_gain: 0.0,
            live_load_elastic_gain: 0.0,
        }
    }
}

impl PrestressLossCriteria {
    /// Elastic gains due to externally applied loads are part of the method.
    pub fn are_elastic_gains_applicable(&self, edition: Edition) -> bool {
        edition > Edition::ThirdEdition2004
            && matches!(
                self.loss_method,
                LossMethod::AashtoRefined | LossMethod::WsdotRefined | LossMethod::AashtoLumpSum
            )
    }

    /// Elastic gain due to deck shrinkage is part of the method.
    pub fn is_deck_shrinkage_applicable(&self, edition: Edition) -> bool {
        edition > Edition::ThirdEdition2004
            && matches!(
                self.loss_method,
                LossMethod::AashtoRefined | LossMethod::WsdotRefined
            )
    }

    /// Gains for permanent loads, slab shrinkage excluded.
    fn load_gains(&self) -> [f64; 10] {
        [
            self.slab_elastic_gain,
            self.slab_pad_elastic_gain,
            self.diaphragm_elastic_gain,
            self.user_dc_elastic_gain_before_deck_placement,
            self.user_dw_elastic_gain_before_deck_placement,
            self.user_dc_elastic_gain_after_deck_placement,
            self.user_dw_elastic_gain_after_deck_placement,
            self.railing_system_elastic_gain,
            self.overlay_elastic_gain,
            self.live_load_elastic_gain,
        ]
    }

    fn load_gains_differ(&self, other: &Self) -> bool {
        !all_equal(&self.load_gains(), &other.load_gains())
    }

    fn shipping_losses_or_relaxation_differ(&self, other: &Self) -> bool {
        !is_equal(self.shipping_losses, other.shipping_losses)
            || self.relaxation_loss_method != other.relaxation_loss_method
    }

    fn shipping_time_or_relaxation_differ(&self, other: &Self) -> bool {
        !is_equal(self.shipping_time, other.shipping_time)
            || self.relaxation_loss_method != other.relaxation_loss_method
    }
}

impl CriteriaModule for PrestressLossCriteria {
    const UNIT_NAME: &'static str = "PrestressLossCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Prestress Losses";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        exchange_enum(ar, "LossMethod", &mut self.loss_method)?;
        exchange_enum(ar, "RelaxationLossMethod", &mut self.relaxation_loss_method)?;
        exchange_enum(
            ar,
            "TimeDependentConcreteModel",
            &mut self.time_dependent_concrete_model,
        )?;
        exchange_enum(ar, "FcgpComputationMethod", &mut self.fcgp_computation_method)?;
        ar.float("ShippingLosses", &mut self.shipping_losses)?;
        ar.float("ShippingTime", &mut self.shipping_time)?;
        ar.float("SlabElasticGain", &mut self.slab_elastic_gain)?;
        ar.float("SlabPadElasticGain", &mut self.slab_pad_elastic_gain)?;
        ar.float("DiaphragmElasticGain", &mut self.diaphragm_elastic_gain)?;
        ar.float(
            "UserDCElasticGain_BeforeDeckPlacement",
            &mut self.user_dc_elastic_gain_before_deck_placement,
        )?;
        ar.float(
            "UserDWElasticGain_BeforeDeckPlacement",
            &mut self.user_dw_elastic_gain_before_deck_placement,
        )?;
        ar.float(
            "UserDCElasticGain_AfterDeckPlacement",
            &mut self.user_dc_elastic_gain_after_deck_placement,
        )?;
        ar.float(
            "UserDWElasticGain_AfterDeckPlacement",
            &mut self.user_dw_elastic_gain_after_deck_placement,
        )?;
        ar.float("RailingSystemElasticGain", &mut self.railing_system_elastic_gain)?;
        ar.float("OverlayElasticGain", &mut self.overlay_elastic_gain)?;
        ar.float("SlabShrinkageElasticGain", &mut self.slab_shrinkage_elastic_gain)?;
        ar.float("LiveLoadElasticGain", &mut self.live_load_elastic_gain)
    }

    fn compare(
        &self,
        other: &Self,
        edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        const PARAMETERS: &str = "Prestress Loss Parameters are different";
        const GAINS: &str = "Elastic Gains are different";

        let mut d = DiffCollector::new(diffs, stop_on_first);
        if self.loss_method != other.loss_method {
            d.group(true, "Prestress Loss Methods are different");
            return d.finish();
        }

        let gains = self.are_elastic_gains_applicable(edition);
        match self.loss_method {
            LossMethod::AashtoRefined | LossMethod::WsdotRefined => {
                if gains {
                    if d.group(self.shipping_time_or_relaxation_differ(other), PARAMETERS) {
                        return false;
                    }
                    let differs = self.load_gains_differ(other)
                        || !is_equal(
                            self.slab_shrinkage_elastic_gain,
                            other.slab_shrinkage_elastic_gain,
                        );
                    d.group(differs, GAINS);
                } else {
                    d.group(self.shipping_losses_or_relaxation_differ(other), PARAMETERS);
                }
            }
            LossMethod::TxdotRefined2004 => {
                let differs = if edition <= Edition::ThirdEdition2004 {
                    self.shipping_losses_or_relaxation_differ(other)
                } else {
                    self.shipping_time_or_relaxation_differ(other)
                };
                d.group(differs, PARAMETERS);
            }
            LossMethod::TxdotRefined2013 => {
                let differs = self.shipping_losses_or_relaxation_differ(other)
                    || self.fcgp_computation_method != other.fcgp_computation_method;
                d.group(differs, PARAMETERS);
            }
            LossMethod::AashtoLumpSum if gains => {
                d.group(self.load_gains_differ(other), GAINS);
            }
            LossMethod::AashtoLumpSum
            | LossMethod::AashtoLumpSum2005
            | LossMethod::WsdotLumpSum
            | LossMethod::GeneralLumpSum => {
                d.group(self.shipping_losses_or_relaxation_differ(other), PARAMETERS);
            }
            LossMethod::TimeStep => {
                d.group(
                    self.time_dependent_concrete_model != other.time_dependent_concrete_model,
                    "Time-Dependent Models are different",
                );
            }
        }
        d.finish()
    }
}
