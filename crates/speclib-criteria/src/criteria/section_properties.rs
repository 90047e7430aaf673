//! Section property and effective flange width methods.

use speclib_store::{Archive, StoreError};

use crate::difference::{DiffCollector, DifferenceItem};
use crate::edition::Edition;
use crate::module::{exchange_enum, stored_enum, CriteriaModule};

stored_enum! {
    /// Whether section properties include transformed reinforcement.
    pub enum SectionPropertyMode {
        Gross = 0 => "Gross",
        #[default]
        Transformed = 1 => "Transformed",
    }
}

stored_enum! {
    pub enum EffectiveFlangeWidthMethod {
        #[default]
        Standard = 0 => "Standard",
        TributaryWidth = 1 => "Tributary width",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionPropertiesCriteria {
    pub section_property_mode: SectionPropertyMode,
    pub effective_flange_width_method: EffectiveFlangeWidthMethod,
}

impl CriteriaModule for SectionPropertiesCriteria {
    const UNIT_NAME: &'static str = "SectionPropertiesCriteria";
    const VERSION: f64 = 1.0;
    const TITLE: &'static str = "Section Properties";

    fn exchange(&mut self, ar: &mut dyn Archive, _version: f64) -> Result<(), StoreError> {
        exchange_enum(ar, "SectionPropertyMode", &mut self.section_property_mode)?;
        exchange_enum(
            ar,
            "EffectiveFlangeWidthMethod",
            &mut self.effective_flange_width_method,
        )
    }

    fn compare(
        &self,
        other: &Self,
        _edition: Edition,
        diffs: &mut Vec<DifferenceItem>,
        stop_on_first: bool,
    ) -> bool {
        let mut d = DiffCollector::new(diffs, stop_on_first);
        if d.group(
            self.section_property_mode != other.section_property_mode,
            "Section Property modes are different",
        ) {
            return false;
        }
        d.group(
            self.effective_flange_width_method != other.effective_flange_width_method,
            "Effective Flange Width methods are different",
        );
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{labels, round_trip};

    #[test]
    fn round_trip_and_compare() {
        let a = SectionPropertiesCriteria::default();
        let b = SectionPropertiesCriteria {
            section_property_mode: SectionPropertyMode::Gross,
            effective_flange_width_method: EffectiveFlangeWidthMethod::TributaryWidth,
        };
        assert_eq!(round_trip(&b), b);
        assert_eq!(labels(&a, &b, Edition::LATEST).len(), 2);
    }
}
