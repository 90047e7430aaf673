//! Horizontal shear at the girder/deck interface.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};
use crate::tolerance::is_equal;
use crate::units::INCH;

stored_enum! {
    pub enum ShearFlowMethod {
        #[default]
        Lrfd = 0 => "LRFD simplified",
        Classical = 1 => "Classical (VQ/I)",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceShearCriteria {
    pub shear_flow_method: ShearFlowMethod,
    /// m
    pub max_interface_shear_connector_spacing: f64,
    /// Use the deck weight as the permanent net compressive force.
    pub use_deck_weight_for_pc: bool,
}

impl Default for InterfaceShearCriteria {
    fn default() -> Self {
        Self {
            shear_flow_method: ShearFlowMethod::Lrfd,
            max_interface_shear_connector_spacing: 24.0 * INCH,
            use_deck_weight_for_pc: false,
        }
    }
}

impl CriteriaModule for InterfaceShearCriteria {
    const UNIT_NAME: &'static str = "InterfaceShearCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Interface Shear";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        exchange_enum(ar, "ShearFlowMethod", &mut self.shear_flow_method)?;
        ar.float(
            "MaxInterfaceShearConnectorSpacing",
            &mut self.max_interface_shear_connector_spacing,
        )?;
        ar.bool("bUseDeckWeightForPc", &mut self.use_deck_weight_for_pc)
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        let differs = self.shear_flow_method != other.shear_flow_method
            || !is_equal(
                self.max_interface_shear_connector_spacing,
                other.max_interface_shear_connector_spacing,
            )
            || self.use_deck_weight_for_pc != other.use_deck_weight_for_pc;
        d.group(differs, "Interface Shear parameters are different");
        d.finish()
    }
}
